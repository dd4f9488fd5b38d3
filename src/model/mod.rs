// MODEL: scene state and camera data
pub mod camera;
pub mod launch;
pub mod scene_state;

pub use camera::{Camera, CameraMode, CameraRig, CameraView};
pub use launch::LaunchState;
pub use scene_state::SceneState;
