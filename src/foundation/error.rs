/// Convenience result type used across scrollfx.
pub type ScrollFxResult<T> = Result<T, ScrollFxError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only construction-time input (configuration, registrations) can fail. Runtime conditions such
/// as a missing region or an event arriving after disposal are handled locally and never surface
/// here.
#[derive(thiserror::Error, Debug)]
pub enum ScrollFxError {
    /// Invalid user-provided registration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Engine configuration failed its invariants.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollFxError {
    /// Build a [`ScrollFxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollFxError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScrollFxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScrollFxError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
