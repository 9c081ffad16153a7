//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Core protocol error: {0}")]
    Core(#[from] scanlink_core::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] scanlink_transport::Error),

    #[error("Frame error: {0}")]
    Frame(#[from] scanlink_types::Error),
}

impl Error {
    /// HTTP status code of a rejected request, if that is what failed
    pub fn rejected_status(&self) -> Option<u16> {
        match self {
            Self::Transport(scanlink_transport::Error::Rejected { status, .. }) => Some(*status),
            _ => None,
        }
    }
}
