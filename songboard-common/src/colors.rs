//! Genre color registry: a fixed genre → display color table used to color
//! word-cloud entries and the legend.
//!
//! The table is defined independently of the dataset. Lookups tolerate both
//! directions of mismatch: genres present here but absent from the data are
//! simply never asked for, and genres present in the data but absent here
//! resolve to the sentinel color.

/// Color returned when a genre (or word) has no registry entry.
pub const SENTINEL_COLOR: &str = "black";

/// Genre → CSS color name, in display order.
const BUILTIN: &[(&str, &str)] = &[
    ("neo mellow", "PaleVioletRed"),
    ("detroit hip hop", "DarkOrange"),
    ("dance pop", "LightGreen"),
    ("pop", "MediumPurple"),
    ("canadian pop", "LightSkyBlue"),
    ("barbadian pop", "Gold"),
    ("atl hip hop", "FireBrick"),
    ("australian pop", "MediumOrchid"),
    ("indie pop", "LimeGreen"),
    ("art pop", "Aqua"),
    ("colombian pop", "Coral"),
    ("big room", "RoyalBlue"),
    ("british soul", "DarkSlateGray"),
    ("chicago rap", "DarkRed"),
    ("acoustic pop", "SandyBrown"),
    ("permanent wave", "DarkCyan"),
    ("boy band", "DarkViolet"),
    ("baroque pop", "MediumTurquoise"),
    ("celtic rock", "Sienna"),
    ("electro", "BlueViolet"),
    ("complextro", "Orchid"),
    ("canadian hip hop", "Tomato"),
    ("candy pop", "HotPink"),
    ("alaska indie", "DarkMagenta"),
    ("folk-pop", "DarkGoldenRod"),
    ("metropopolis", "MediumSeaGreen"),
    ("house", "Navy"),
    ("australian hip hop", "Lime"),
    ("electropop", "Orchid"),
    ("australian dance", "MediumSpringGreen"),
    ("hollywood", "Gold"),
    ("canadian contemporary r&b", "Chocolate"),
    ("irish singer-songwriter", "DarkOliveGreen"),
    ("tropical house", "DarkKhaki"),
    ("belgian edm", "DarkOrchid"),
    ("french indie pop", "Teal"),
    ("hip hop", "Red"),
    ("danish pop", "DeepPink"),
    ("latin", "DarkSalmon"),
    ("canadian latin", "Peru"),
    ("electronic trap", "SteelBlue"),
    ("edm", "Indigo"),
    ("electro house", "MediumBlue"),
    ("downtempo", "Olive"),
    ("brostep", "Purple"),
    ("contemporary country", "DarkSlateBlue"),
    ("moroccan pop", "MediumVioletRed"),
    ("escape room", "SlateBlue"),
    ("alternative r&b", "#003F5C"),
];

/// The registry handle passed explicitly into every derivation that colors
/// things, so no derivation depends on enclosing-scope state.
#[derive(Debug, Clone, Copy)]
pub struct GenreColorMap {
    entries: &'static [(&'static str, &'static str)],
}

impl GenreColorMap {
    /// The standard dashboard registry.
    pub fn builtin() -> Self {
        Self { entries: BUILTIN }
    }

    /// Color for a genre, defaulting to the sentinel when unmapped.
    pub fn color_for(&self, genre: &str) -> &'static str {
        self.entries
            .iter()
            .find(|(g, _)| *g == genre)
            .map(|(_, c)| *c)
            .unwrap_or(SENTINEL_COLOR)
    }

    /// (genre, color) pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of registry entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
