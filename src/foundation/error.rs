/// Convenience result type used across rasterkit.
pub type RasterResult<T> = Result<T, RasterError>;

/// Error taxonomy for the fallible surfaces of the crate.
///
/// Geometry operations never fail; these errors come from raw buffer
/// construction and job execution.
#[derive(thiserror::Error, Debug)]
pub enum RasterError {
    /// Invalid user-provided buffer or geometry data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating or running a job.
    #[error("job error: {0}")]
    Job(String),

    /// Errors when serializing or deserializing job files.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RasterError {
    /// Build a [`RasterError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RasterError::Job`] value.
    pub fn job(msg: impl Into<String>) -> Self {
        Self::Job(msg.into())
    }

    /// Build a [`RasterError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RasterError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
