use crate::{
    camera::params::{CameraField, CameraParams},
    keyframes::model::Keyframe,
};

/// Added to the frame distance so a zero-width bracket never divides by zero.
pub const ALPHA_EPSILON: f64 = 1e-6;

/// Linear blend between two values.
pub trait Lerp: Sized {
    /// `(1 - t) * a + t * b`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (1.0 - t) * a + t * b
    }
}

/// Keyframes surrounding a target frame that has no keyframe of its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bracket<'a> {
    /// No keyframes at all.
    Empty,
    /// Target lies before the first or after the last keyframe.
    Clamped(&'a Keyframe),
    /// Nearest keyframes at-or-before and at-or-after the target.
    Between {
        /// Latest keyframe before the target.
        prev: &'a Keyframe,
        /// Earliest keyframe after the target.
        next: &'a Keyframe,
    },
}

impl<'a> Bracket<'a> {
    /// Find the nearest keyframe on each side of `frame`.
    ///
    /// With duplicate frame numbers the first keyframe in payload order wins.
    pub fn locate(keyframes: &'a [Keyframe], frame: i64) -> Self {
        let mut prev: Option<&Keyframe> = None;
        let mut next: Option<&Keyframe> = None;

        for kf in keyframes {
            if kf.frame <= frame && prev.is_none_or(|p| kf.frame > p.frame) {
                prev = Some(kf);
            }
            if kf.frame >= frame && next.is_none_or(|n| kf.frame < n.frame) {
                next = Some(kf);
            }
        }

        match (prev, next) {
            (None, None) => Self::Empty,
            (Some(kf), None) | (None, Some(kf)) => Self::Clamped(kf),
            (Some(prev), Some(next)) => Self::Between { prev, next },
        }
    }

    /// Blend factor toward `next`: `(frame - prev) / (next - prev + ε)`, or 0 when clamped.
    pub fn alpha(&self, frame: i64) -> f64 {
        match self {
            Self::Empty | Self::Clamped(_) => 0.0,
            Self::Between { prev, next } => {
                let span = next.frame as f64 - prev.frame as f64;
                (frame as f64 - prev.frame as f64) / (span + ALPHA_EPSILON)
            }
        }
    }

    /// Blend every field both sides define into `params`; other fields are left alone.
    pub fn apply(&self, frame: i64, params: &mut CameraParams) {
        let (prev, next) = match *self {
            Self::Empty => return,
            Self::Clamped(kf) => (kf, kf),
            Self::Between { prev, next } => (prev, next),
        };
        let alpha = self.alpha(frame);

        for field in CameraField::ALL {
            if let (Some(a), Some(b)) = (prev.get(field), next.get(field)) {
                params.set(field, f64::lerp(&a, &b, alpha));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/interp.rs"]
mod tests;
