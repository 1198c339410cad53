/// Convenience result type used across the crate.
pub type DeforumResult<T> = Result<T, DeforumError>;

/// Error taxonomy for payload parsing and camera resolution.
///
/// Node callers never see these directly: [`crate::resolve`] folds every
/// variant into [`crate::NodeOutput::Error`] using the `Display` string.
#[derive(thiserror::Error, Debug)]
pub enum DeforumError {
    /// Structurally valid data that violates a contract.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while resolving camera parameters for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when deserializing payloads or node inputs.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl DeforumError {
    /// Build a [`DeforumError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DeforumError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`DeforumError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for DeforumError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
