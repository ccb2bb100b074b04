//! Server-Sent Events (SSE) for connection status

use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, Sse},
};
use futures::stream::Stream;

use crate::AppState;

/// GET /api/events - SSE event stream for connection status
///
/// Streams an initial ConnectionStatus event followed by heartbeats.
pub async fn event_stream(
    State(_state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    songboard_common::sse::heartbeat_stream("songboard-dash")
}
