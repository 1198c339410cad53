/// One of the seven camera parameters Deforum consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CameraField {
    /// Horizontal pan.
    TranslationX,
    /// Vertical pan.
    TranslationY,
    /// Dolly along the view axis.
    TranslationZ,
    /// 3D rotation around X (degrees).
    Rotation3dX,
    /// 3D rotation around Y (degrees).
    Rotation3dY,
    /// 3D rotation around Z (degrees).
    Rotation3dZ,
    /// 2D zoom factor.
    Zoom,
}

impl CameraField {
    /// Every field, in output order.
    pub const ALL: [CameraField; 7] = [
        Self::TranslationX,
        Self::TranslationY,
        Self::TranslationZ,
        Self::Rotation3dX,
        Self::Rotation3dY,
        Self::Rotation3dZ,
        Self::Zoom,
    ];

    /// Wire name used in keyframes and in the output record.
    pub fn name(self) -> &'static str {
        match self {
            Self::TranslationX => "translation_x",
            Self::TranslationY => "translation_y",
            Self::TranslationZ => "translation_z",
            Self::Rotation3dX => "rotation_3d_x",
            Self::Rotation3dY => "rotation_3d_y",
            Self::Rotation3dZ => "rotation_3d_z",
            Self::Zoom => "zoom",
        }
    }

    /// Value used when no keyframe supplies the field.
    pub fn neutral(self) -> f64 {
        match self {
            Self::Zoom => 1.0,
            _ => 0.0,
        }
    }

    /// Look a field up by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Fully resolved camera movement for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraParams {
    /// Horizontal pan.
    pub translation_x: f64,
    /// Vertical pan.
    pub translation_y: f64,
    /// Dolly along the view axis.
    pub translation_z: f64,
    /// 3D rotation around X.
    pub rotation_3d_x: f64,
    /// 3D rotation around Y.
    pub rotation_3d_y: f64,
    /// 3D rotation around Z.
    pub rotation_3d_z: f64,
    /// 2D zoom factor.
    pub zoom: f64,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            translation_x: CameraField::TranslationX.neutral(),
            translation_y: CameraField::TranslationY.neutral(),
            translation_z: CameraField::TranslationZ.neutral(),
            rotation_3d_x: CameraField::Rotation3dX.neutral(),
            rotation_3d_y: CameraField::Rotation3dY.neutral(),
            rotation_3d_z: CameraField::Rotation3dZ.neutral(),
            zoom: CameraField::Zoom.neutral(),
        }
    }
}

impl CameraParams {
    /// Read one field.
    pub fn get(&self, field: CameraField) -> f64 {
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

    /// Overwrite one field.
    pub fn set(&mut self, field: CameraField, value: f64) {
        let slot = match field {
            CameraField::TranslationX => &mut self.translation_x,
            CameraField::TranslationY => &mut self.translation_y,
            CameraField::TranslationZ => &mut self.translation_z,
            CameraField::Rotation3dX => &mut self.rotation_3d_x,
            CameraField::Rotation3dY => &mut self.rotation_3d_y,
            CameraField::Rotation3dZ => &mut self.rotation_3d_z,
            CameraField::Zoom => &mut self.zoom,
        };
        *slot = value;
    }

    /// `(field, value)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (CameraField, f64)> + '_ {
        CameraField::ALL.into_iter().map(|f| (f, self.get(f)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/params.rs"]
mod tests;
