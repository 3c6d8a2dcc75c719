use nalgebra_glm as glm;

/// Camera operating mode. `Free` carries the translational fly position,
/// decoupled from the spherical triple which then acts as a look offset.
#[derive(Debug, Clone, PartialEq)]
pub enum CameraMode {
    Origin,
    Free { position: glm::Vec3 },
}

impl CameraMode {
    pub fn origin() -> Self {
        CameraMode::Origin
    }

    /// Free mode with the default rig position.
    pub fn free() -> Self {
        CameraMode::Free {
            position: glm::vec3(0.0, 10.0, 0.0),
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, CameraMode::Free { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            CameraMode::Origin => "Origin",
            CameraMode::Free { .. } => "Free",
        }
    }
}

/// Spherical camera pose, angles in degrees. `delta_azimuth`/`delta_polar`
/// accumulate during an active drag and are folded in on pointer-up;
/// outside a drag they are exactly 0.
#[derive(Debug, Clone)]
pub struct CameraPose {
    pub radius: f32,
    pub polar: f32,
    pub azimuth: f32,
    pub delta_azimuth: f32,
    pub delta_polar: f32,
    pub mode: CameraMode,
}

impl CameraPose {
    /// Mode-specific default pose, used on construction and every reset.
    pub fn for_mode(mode: CameraMode) -> Self {
        let (polar, azimuth) = match mode {
            CameraMode::Origin => (90.0, 90.0),
            CameraMode::Free { .. } => (90.0, 270.0),
        };
        Self {
            radius: 10.0,
            polar,
            azimuth,
            delta_azimuth: 0.0,
            delta_polar: 0.0,
            mode,
        }
    }
}

/// In-progress drag gesture. The anchor is captured from the first move
/// sample after pointer-down, not from the pointer-down itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    pub active: bool,
    pub anchor: Option<glm::Vec2>,
}

/// Directional fly keys, consumed in `Free` mode only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlyKey {
    W,
    S,
    A,
    D,
    R,
    F,
}

impl FlyKey {
    pub fn from_str(key: &str) -> Option<Self> {
        match key {
            "w" | "W" => Some(FlyKey::W),
            "s" | "S" => Some(FlyKey::S),
            "a" | "A" => Some(FlyKey::A),
            "d" | "D" => Some(FlyKey::D),
            "r" | "R" => Some(FlyKey::R),
            "f" | "F" => Some(FlyKey::F),
            _ => None,
        }
    }
}

/// Single-slot key state: last key down wins, any key up clears it.
/// `last_sec` is the previous frame timestamp; `None` right after any
/// key transition so the first frame integrates zero movement.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    pub pressed: Option<FlyKey>,
    pub last_sec: Option<f32>,
}
