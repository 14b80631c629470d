//! Backend commands queued from UI to backend worker.

use grid_core::LoadTicket;

#[derive(Debug, Clone, Copy)]
pub enum BackendCommand {
    FetchPage { ticket: LoadTicket },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::FetchPage { .. } => "fetch_page",
        }
    }
}
