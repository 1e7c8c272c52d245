use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WardenStorageError {
    /// The underlying state could not be read or written
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl WardenStorageError {
    pub(crate) fn unavailable(error: impl std::fmt::Display) -> Self {
        Self::Unavailable(format!("{error}"))
    }
}
