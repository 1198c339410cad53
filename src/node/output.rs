use crate::{
    camera::params::CameraParams,
    foundation::error::{DeforumError, DeforumResult},
};

/// What the node hands back to the host.
///
/// Serializes as a mapping with exactly one key: `{"camera_movement": {...}}` on success or
/// `{"error": "..."}` on failure. Never both.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeOutput {
    /// Resolved camera parameters for the requested frame.
    CameraMovement(CameraParams),
    /// Human-readable reason the payload could not be resolved.
    Error(String),
}

impl NodeOutput {
    /// Camera parameters, if resolution succeeded.
    pub fn camera_movement(&self) -> Option<&CameraParams> {
        match self {
            Self::CameraMovement(p) => Some(p),
            Self::Error(_) => None,
        }
    }

    /// Error message, if resolution failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::CameraMovement(_) => None,
            Self::Error(msg) => Some(msg),
        }
    }

    /// Whether this is the error record.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Output as a JSON value, the shape the host consumes.
    pub fn to_json(&self) -> DeforumResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl From<DeforumResult<CameraParams>> for NodeOutput {
    fn from(r: DeforumResult<CameraParams>) -> Self {
        match r {
            Ok(p) => Self::CameraMovement(p),
            Err(e) => Self::Error(e.to_string()),
        }
    }
}

impl From<DeforumError> for NodeOutput {
    fn from(e: DeforumError) -> Self {
        Self::Error(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/node/output.rs"]
mod tests;
