use thiserror::Error;

/// Why a page fetch produced no rows.
///
/// Kept `Clone` so a fetch outcome can be handed across threads and compared
/// in tests; transport and decode details are flattened to text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("catalog responded with HTTP {0}")]
    Status(u16),
    #[error("malformed catalog response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Status(_) => "status",
            FetchError::Decode(_) => "decode",
        }
    }
}
