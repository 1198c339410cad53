use crate::foundation::error::{DeforumError, DeforumResult};

/// Target frame requested by the host (0-based, non-negative).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Frame number in the signed space keyframes are authored in.
    pub fn to_keyframe_frame(self) -> DeforumResult<i64> {
        i64::try_from(self.0).map_err(|_| {
            DeforumError::evaluation(format!(
                "frame {} does not fit the keyframe frame range",
                self.0
            ))
        })
    }
}

impl From<u64> for FrameIndex {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl std::fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
