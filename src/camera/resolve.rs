use crate::{
    camera::{
        interp::Bracket,
        params::{CameraField, CameraParams},
    },
    foundation::{core::FrameIndex, error::DeforumResult},
    keyframes::model::KeyframeSet,
    node::output::NodeOutput,
};

impl KeyframeSet {
    /// Camera parameters at `frame`.
    ///
    /// Keyframes sitting exactly on `frame` are applied in payload order, so with duplicates
    /// the last one defining a field wins for that field. Otherwise the nearest keyframes on
    /// either side are blended linearly; fields missing on either side keep their neutral value.
    pub fn camera_params_at(&self, frame: FrameIndex) -> DeforumResult<CameraParams> {
        let target = frame.to_keyframe_frame()?;
        let mut params = CameraParams::default();

        let mut exact = 0usize;
        for kf in self.keyframes.iter().filter(|kf| kf.frame == target) {
            exact += 1;
            for field in CameraField::ALL {
                if let Some(v) = kf.get(field) {
                    params.set(field, v);
                }
            }
        }

        if exact > 0 {
            tracing::debug!(%frame, matches = exact, "exact keyframe match");
        } else {
            let bracket = Bracket::locate(&self.keyframes, target);
            tracing::debug!(%frame, alpha = bracket.alpha(target), "interpolating");
            bracket.apply(target, &mut params);
        }

        Ok(params)
    }
}

/// Parse `payload` and resolve the camera parameters at `frame`, keeping the error typed.
#[tracing::instrument(skip(payload), fields(payload_len = payload.len()))]
pub fn try_resolve(payload: &str, frame: FrameIndex) -> DeforumResult<CameraParams> {
    let set = KeyframeSet::from_json(payload)?;
    set.camera_params_at(frame)
}

/// Node entry point: resolve `frame` from a serialized keyframe payload.
///
/// Never fails. Any parse or extraction problem is reported as [`NodeOutput::Error`] in place
/// of the camera record.
pub fn resolve(payload: &str, frame: FrameIndex) -> NodeOutput {
    match try_resolve(payload, frame) {
        Ok(params) => NodeOutput::CameraMovement(params),
        Err(e) => {
            tracing::debug!(error = %e, %frame, "camera extraction failed");
            NodeOutput::from(e)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/resolve.rs"]
mod tests;
