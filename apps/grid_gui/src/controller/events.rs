//! Events posted from the backend worker to the UI loop.

use grid_core::LoadTicket;
use shared::{domain::Row, error::FetchError};

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    PageLoaded {
        ticket: LoadTicket,
        outcome: Result<Vec<Row>, FetchError>,
    },
    BackendFailed(String),
}
