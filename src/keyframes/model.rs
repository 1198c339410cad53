use crate::{
    camera::params::CameraField,
    foundation::error::{DeforumError, DeforumResult},
    keyframes::number,
};

/// A single authored keyframe.
///
/// Only `frame` is mandatory. Parameters the keyframe does not mention stay `None`; any other
/// keys in the payload (interpolation hints, prompts, ...) are ignored.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Position of the keyframe on the timeline.
    pub frame: i64,
    /// Horizontal pan.
    #[serde(
        default,
        deserialize_with = "number::param",
        skip_serializing_if = "Option::is_none"
    )]
    pub translation_x: Option<f64>,
    /// Vertical pan.
    #[serde(
        default,
        deserialize_with = "number::param",
        skip_serializing_if = "Option::is_none"
    )]
    pub translation_y: Option<f64>,
    /// Dolly along the view axis.
    #[serde(
        default,
        deserialize_with = "number::param",
        skip_serializing_if = "Option::is_none"
    )]
    pub translation_z: Option<f64>,
    /// 3D rotation around X.
    #[serde(
        default,
        deserialize_with = "number::param",
        skip_serializing_if = "Option::is_none"
    )]
    pub rotation_3d_x: Option<f64>,
    /// 3D rotation around Y.
    #[serde(
        default,
        deserialize_with = "number::param",
        skip_serializing_if = "Option::is_none"
    )]
    pub rotation_3d_y: Option<f64>,
    /// 3D rotation around Z.
    #[serde(
        default,
        deserialize_with = "number::param",
        skip_serializing_if = "Option::is_none"
    )]
    pub rotation_3d_z: Option<f64>,
    /// 2D zoom factor.
    #[serde(
        default,
        deserialize_with = "number::param",
        skip_serializing_if = "Option::is_none"
    )]
    pub zoom: Option<f64>,
}

impl Keyframe {
    /// Keyframe at `frame` with no parameters set.
    pub fn at(frame: i64) -> Self {
        Self {
            frame,
            ..Self::default()
        }
    }

    /// Builder-style setter, mostly for tests and programmatic payloads.
    pub fn with(mut self, field: CameraField, value: f64) -> Self {
        *self.slot_mut(field) = Some(value);
        self
    }

    /// Value of `field` if this keyframe defines it.
    pub fn get(&self, field: CameraField) -> Option<f64> {
        match field {
            CameraField::TranslationX => self.translation_x,
            CameraField::TranslationY => self.translation_y,
            CameraField::TranslationZ => self.translation_z,
            CameraField::Rotation3dX => self.rotation_3d_x,
            CameraField::Rotation3dY => self.rotation_3d_y,
            CameraField::Rotation3dZ => self.rotation_3d_z,
            CameraField::Zoom => self.zoom,
        }
    }

    fn slot_mut(&mut self, field: CameraField) -> &mut Option<f64> {
        match field {
            CameraField::TranslationX => &mut self.translation_x,
            CameraField::TranslationY => &mut self.translation_y,
            CameraField::TranslationZ => &mut self.translation_z,
            CameraField::Rotation3dX => &mut self.rotation_3d_x,
            CameraField::Rotation3dY => &mut self.rotation_3d_y,
            CameraField::Rotation3dZ => &mut self.rotation_3d_z,
            CameraField::Zoom => &mut self.zoom,
        }
    }
}

/// The `keyframes` list of a Parseq payload, in payload order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyframeSet {
    /// Keyframes as received; not sorted, frames not required to be unique.
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
}

impl KeyframeSet {
    /// Wrap an existing list of keyframes.
    pub fn new(keyframes: Vec<Keyframe>) -> Self {
        Self { keyframes }
    }

    /// Parse and validate a JSON payload.
    ///
    /// The payload must be an object. A missing `keyframes` key is an empty set; every
    /// keyframe must carry an integer `frame` and numeric camera parameters.
    pub fn from_json(payload: &str) -> DeforumResult<Self> {
        let value: serde_json::Value = serde_json::from_str(payload)?;
        if !value.is_object() {
            return Err(DeforumError::validation(format!(
                "payload must be a JSON object, got {}",
                json_kind(&value)
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Number of keyframes.
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    /// Whether the set has no keyframes.
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/keyframes/model.rs"]
mod tests;
