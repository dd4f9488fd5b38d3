// CONTROLLER: Input, launch logic, and update loop
pub mod frame_loop;
pub mod input;
pub mod state_controller;

pub use frame_loop::{FixedTimestep, FpsCounter, FrameLoopContext};
pub use input::{Command, InputProcessor, KeyBindings};
pub use state_controller::{Flow, StateController};
