use tracing::{debug, info};

use super::input::Command;
use crate::model::launch::{
    ALTITUDE_MAX, ALTITUDE_START, ASCENT_STEP, CLOUD_DRIFT_STEP,
};
use crate::model::{LaunchState, SceneState};

/// What the event loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Advances the scene state on ticks and key commands
pub struct StateController {
    pub countdown_step: f32,
}

impl StateController {
    pub fn new(countdown_step: f32) -> Self {
        Self { countdown_step }
    }

    /// One simulation step of `dt` seconds.
    pub fn tick(&self, state: &mut SceneState, dt: f32) {
        state.cloud_phase += CLOUD_DRIFT_STEP;

        match state.launch {
            LaunchState::Countdown { remaining: 0, .. } => {
                state.launch = LaunchState::Ascending;
                info!(altitude = state.rocket_altitude, "liftoff");
            }
            LaunchState::Countdown { remaining, elapsed } => {
                let elapsed = elapsed + dt;
                state.launch = if elapsed >= self.countdown_step {
                    info!(remaining = remaining - 1, "countdown");
                    LaunchState::Countdown {
                        remaining: remaining - 1,
                        elapsed: elapsed - self.countdown_step,
                    }
                } else {
                    LaunchState::Countdown { remaining, elapsed }
                };
            }
            LaunchState::Ascending if state.rocket_altitude < ALTITUDE_MAX => {
                state.rocket_altitude = (state.rocket_altitude + ASCENT_STEP).min(ALTITUDE_MAX);
                if state.rocket_altitude >= ALTITUDE_MAX {
                    info!("rocket reached maximum altitude");
                }
            }
            LaunchState::Ascending | LaunchState::Idle => {}
        }
    }

    pub fn handle_command(&self, state: &mut SceneState, command: Command) -> Flow {
        match command {
            Command::Launch => {
                if state.launch.is_idle() {
                    state.launch = LaunchState::countdown();
                    info!("countdown started");
                } else {
                    debug!(phase = state.launch.label(), "launch ignored, already in progress");
                }
            }
            Command::Reset => {
                state.launch = LaunchState::Idle;
                state.rocket_altitude = ALTITUDE_START;
                info!("launch reset");
            }
            Command::ToggleCamera => {
                state.camera.toggle_mode();
                debug!(mode = ?state.camera.mode, "camera mode");
            }
            Command::ToggleSmoke => {
                state.smoke_enabled = !state.smoke_enabled;
                debug!(enabled = state.smoke_enabled, "smoke");
            }
            Command::ToggleNight => {
                state.night_mode = !state.night_mode;
                debug!(night = state.night_mode, "sky mode");
            }
            Command::ZoomIn => {
                state.camera.zoom_by(1.0);
                debug!(zoom = state.camera.zoom, "camera zoom");
            }
            Command::ZoomOut => {
                state.camera.zoom_by(-1.0);
                debug!(zoom = state.camera.zoom, "camera zoom");
            }
            Command::PanLeft => {
                state.camera.pan_by(-1.0);
                debug!(pan = state.camera.pan, "camera pan");
            }
            Command::PanRight => {
                state.camera.pan_by(1.0);
                debug!(pan = state.camera.pan, "camera pan");
            }
            Command::Quit => {
                info!("quit requested");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }
}

impl Default for StateController {
    fn default() -> Self {
        Self::new(1.0)
    }
}
