use tracing::trace;

use super::input::InputProcessor;
use super::state_controller::{Flow, StateController};
use crate::config::Settings;
use crate::model::SceneState;

/// Most simulation ticks run for one frame; a long stall drops the rest.
const MAX_TICKS_PER_FRAME: u32 = 10;

/// Turns variable frame deltas into a whole number of fixed ticks.
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self { dt, accumulator: 0.0 }
    }

    /// Add frame time and return how many ticks are now due.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        let steps = (self.accumulator / self.dt) as u32;
        if steps > MAX_TICKS_PER_FRAME {
            self.accumulator = 0.0;
            return MAX_TICKS_PER_FRAME;
        }
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Frames per second, averaged over one-second windows.
pub struct FpsCounter {
    fps: f32,
    frames: u32,
    timer: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self { fps: 0.0, frames: 0, timer: 0.0 }
    }

    pub fn record(&mut self, dt: f32) {
        self.frames += 1;
        self.timer += dt;
        if self.timer >= 1.0 {
            self.fps = self.frames as f32 / self.timer;
            self.frames = 0;
            self.timer = 0.0;
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Main loop state: the scene plus everything that drives it
pub struct FrameLoopContext {
    pub state: SceneState,
    pub controller: StateController,
    pub input: InputProcessor,
    timestep: FixedTimestep,
    fps: FpsCounter,
}

impl FrameLoopContext {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: SceneState::new(),
            controller: StateController::new(settings.countdown_step_secs),
            input: InputProcessor::default(),
            timestep: FixedTimestep::new(settings.tick_interval()),
            fps: FpsCounter::new(),
        }
    }

    /// Apply a typed key; unmapped keys leave the state alone.
    pub fn on_key(&mut self, key: &str) -> Flow {
        match self.input.command_for(key) {
            Some(command) => self.controller.handle_command(&mut self.state, command),
            None => Flow::Continue,
        }
    }

    /// Advance the simulation by one rendered frame. Returns ticks run.
    pub fn update(&mut self, frame_dt: f32) -> u32 {
        self.fps.record(frame_dt);
        let steps = self.timestep.accumulate(frame_dt);
        let dt = self.timestep.dt();
        for _ in 0..steps {
            self.controller.tick(&mut self.state, dt);
        }
        trace!(steps, frame_dt, "frame update");
        steps
    }

    pub fn fps(&self) -> f32 {
        self.fps.fps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(0.25);
        assert_eq!(ts.accumulate(0.25), 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0), 10);
        assert_eq!(ts.accumulate(0.0), 0);
    }

    #[test]
    fn negative_frame_time_is_ignored() {
        let mut ts = FixedTimestep::new(0.5);
        assert_eq!(ts.accumulate(-3.0), 0);
        assert_eq!(ts.accumulate(0.5), 1);
    }

    #[test]
    fn fps_reports_after_a_second() {
        let mut fps = FpsCounter::new();
        for _ in 0..30 {
            fps.record(0.02);
        }
        assert_eq!(fps.fps(), 0.0);
        for _ in 0..25 {
            fps.record(0.02);
        }
        assert!((fps.fps() - 50.0).abs() < 1.0, "fps was {}", fps.fps());
    }

    #[test]
    fn keys_drive_the_scene() {
        let mut ctx = FrameLoopContext::new(&Settings::default());
        assert_eq!(ctx.on_key("l"), Flow::Continue);
        assert_eq!(ctx.state.launch.countdown_remaining(), Some(3));
        assert_eq!(ctx.on_key("?"), Flow::Continue);
        assert_eq!(ctx.on_key("q"), Flow::Quit);
    }

    #[test]
    fn countdown_runs_without_blocking_frames() {
        let settings = Settings { tick_rate_hz: 10.0, ..Settings::default() };
        let mut ctx = FrameLoopContext::new(&settings);
        ctx.on_key("l");
        let mut ticks = 0;
        // 0.1 s frames; ten frames per countdown second.
        while !ctx.state.launch.is_ascending() {
            ticks += ctx.update(0.1);
            assert!(ticks <= 40, "countdown never finished");
        }
        assert!(ticks >= 30);
    }
}
