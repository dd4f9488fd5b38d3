use super::camera::CameraRig;
use super::launch::{LaunchState, ALTITUDE_START};

/// Everything the controller mutates and the renderer reads.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub rocket_altitude: f32,
    pub launch: LaunchState,
    pub camera: CameraRig,
    pub smoke_enabled: bool,
    pub night_mode: bool,
    /// Grows without bound; wrapped only when clouds are placed.
    pub cloud_phase: f32,
}

impl SceneState {
    pub fn new() -> Self {
        Self {
            rocket_altitude: ALTITUDE_START,
            launch: LaunchState::Idle,
            camera: CameraRig::new(),
            smoke_enabled: false,
            night_mode: false,
            cloud_phase: 0.0,
        }
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}
