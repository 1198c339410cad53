//! Parseq keyframes to Deforum camera movement.
//!
//! A Parseq payload is a sparse list of keyframes, each carrying a `frame` number and some of the
//! seven camera parameters Deforum understands. This crate resolves the full parameter set for a
//! single target frame:
//!
//! 1. **Parse**: `&str -> KeyframeSet`, validated once at the boundary.
//! 2. **Exact match**: keyframes sitting on the target frame overwrite the neutral defaults.
//! 3. **Interpolate**: otherwise the nearest keyframes on each side are blended linearly.
//! 4. **Wrap**: the record is returned as `{"camera_movement": {...}}`, or `{"error": "..."}`.
//!
//! Resolution is pure and stateless; every call builds its own data and may run concurrently
//! with others.
//!
//! ```
//! use parseq_deforum::{FrameIndex, NodeOutput, resolve};
//!
//! let payload = r#"{"keyframes": [{"frame": 0, "zoom": 1.0}, {"frame": 10, "zoom": 3.0}]}"#;
//! let out = resolve(payload, FrameIndex(10));
//! assert_eq!(out.camera_movement().map(|p| p.zoom), Some(3.0));
//!
//! let bad = resolve("{oops", FrameIndex(0));
//! assert!(matches!(bad, NodeOutput::Error(_)));
//! ```
//!
//! Hosts that load nodes from a registration table use [`NODE_CLASS_MAPPINGS`] and [`invoke`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod camera;
mod foundation;
mod keyframes;
mod node;

pub use camera::interp::{ALPHA_EPSILON, Bracket, Lerp};
pub use camera::params::{CameraField, CameraParams};
pub use camera::resolve::{resolve, try_resolve};
pub use foundation::core::FrameIndex;
pub use foundation::error::{DeforumError, DeforumResult};
pub use keyframes::model::{Keyframe, KeyframeSet};
pub use keyframes::number::parse_numeric_str;
pub use node::output::NodeOutput;
pub use node::registry::{
    InputDefault, InputKind, InputSpec, NODE_CLASS_MAPPINGS, NODE_DISPLAY_NAME_MAPPINGS,
    NodeDescriptor, PARSEQ_TO_DEFORUM, RegistrationTable, find_node, invoke, registration_table,
};
