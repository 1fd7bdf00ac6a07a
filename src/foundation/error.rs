/// Convenience result type used across sheen.
pub type SheenResult<T> = Result<T, SheenError>;

/// Top-level error taxonomy used by sheen APIs.
#[derive(thiserror::Error, Debug)]
pub enum SheenError {
    /// A caller-provided argument violates a documented precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Errors raised by a drawing surface or while preparing a drawable.
    #[error("surface error: {0}")]
    Surface(String),

    /// Errors while reading or writing persisted preferences.
    #[error("storage error: {0}")]
    Storage(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SheenError {
    /// Build a [`SheenError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`SheenError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`SheenError::Storage`] value.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Build a [`SheenError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
