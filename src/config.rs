/// Startup settings for the window, projection and simulation clock.
#[derive(Debug, Clone)]
pub struct Settings {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub fov_y_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
    /// Simulation ticks per second.
    pub tick_rate_hz: f32,
    /// Seconds each countdown number stays on screen.
    pub countdown_step_secs: f32,
    /// Fixed seed for particle jitter; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Settings {
    pub fn tick_interval(&self) -> f32 {
        1.0 / self.tick_rate_hz
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Rocket Launch Simulation".to_string(),
            window_width: 800,
            window_height: 600,
            fov_y_degrees: 45.0,
            z_near: 1.0,
            z_far: 200.0,
            tick_rate_hz: 60.0,
            countdown_step_secs: 1.0,
            seed: None,
        }
    }
}
