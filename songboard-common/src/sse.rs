//! Server-Sent Events (SSE) utilities
//!
//! The dashboard has no domain events to broadcast; a heartbeat stream is
//! enough for the UI's connection-status indicator.

use std::convert::Infallible;
use std::time::Duration;

use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use tracing::{debug, info};

/// Create a heartbeat-only SSE stream for connection status monitoring.
pub fn heartbeat_stream(
    service_name: &'static str,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!("New SSE client connected to {} events", service_name);

    let stream = async_stream::stream! {
        // Initial connected status, then periodic comment-only heartbeats
        yield Ok(Event::default()
            .event("ConnectionStatus")
            .data("connected"));

        loop {
            tokio::time::sleep(Duration::from_secs(15)).await;
            debug!("SSE: sending heartbeat");
            yield Ok(Event::default().comment("heartbeat"));
        }
    };

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("heartbeat"),
    )
}
