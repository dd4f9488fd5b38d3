/// Altitude of the rocket base while it sits on the pad.
pub const ALTITUDE_START: f32 = -1.0;
/// Altitude at which the ascent stops.
pub const ALTITUDE_MAX: f32 = 3.0;
/// Altitude gained per simulation tick while ascending.
pub const ASCENT_STEP: f32 = 0.005;
/// Cloud drift per simulation tick.
pub const CLOUD_DRIFT_STEP: f32 = 0.001;
/// First number shown when a countdown starts.
pub const COUNTDOWN_START: u32 = 3;

/// Launch progression: idle on the pad, counting down, or flying.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LaunchState {
    Idle,
    /// `elapsed` is the time accumulated towards the next decrement.
    Countdown { remaining: u32, elapsed: f32 },
    Ascending,
}

impl LaunchState {
    pub fn countdown() -> Self {
        LaunchState::Countdown { remaining: COUNTDOWN_START, elapsed: 0.0 }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, LaunchState::Idle)
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, LaunchState::Ascending)
    }

    /// Remaining count while counting down.
    pub fn countdown_remaining(&self) -> Option<u32> {
        match self {
            LaunchState::Countdown { remaining, .. } => Some(*remaining),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LaunchState::Idle => "Idle",
            LaunchState::Countdown { .. } => "Countdown",
            LaunchState::Ascending => "Ascending",
        }
    }
}

impl Default for LaunchState {
    fn default() -> Self {
        LaunchState::Idle
    }
}
