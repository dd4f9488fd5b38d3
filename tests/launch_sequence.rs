use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rocket_launch::{
    config::Settings,
    controller::{Flow, FrameLoopContext},
    model::{
        launch::{ALTITUDE_MAX, ALTITUDE_START},
        CameraMode, LaunchState, SceneState,
    },
    view::{scene, Element},
};

// Helper: a loop context driven by whole-second ticks so each countdown
// step lands on exactly one tick
fn create_context() -> FrameLoopContext {
    FrameLoopContext::new(&Settings::default())
}

fn tick(ctx: &mut FrameLoopContext, times: usize) {
    for _ in 0..times {
        ctx.controller.tick(&mut ctx.state, 1.0);
    }
}

fn run_to_ascent(ctx: &mut FrameLoopContext) {
    assert_eq!(ctx.on_key("l"), Flow::Continue);
    tick(ctx, 4);
    assert!(ctx.state.launch.is_ascending());
}

#[test]
fn test_full_launch_sequence() {
    let mut ctx = create_context();
    assert_eq!(ctx.state, SceneState::new());

    ctx.on_key("l");
    assert_eq!(ctx.state.launch.countdown_remaining(), Some(3));

    for expected in [2, 1, 0] {
        tick(&mut ctx, 1);
        assert_eq!(ctx.state.launch.countdown_remaining(), Some(expected));
        assert_relative_eq!(ctx.state.rocket_altitude, ALTITUDE_START);
    }

    // zero hands over to ascent without moving the rocket
    tick(&mut ctx, 1);
    assert_eq!(ctx.state.launch, LaunchState::Ascending);
    assert_relative_eq!(ctx.state.rocket_altitude, ALTITUDE_START);

    tick(&mut ctx, 1);
    assert_relative_eq!(ctx.state.rocket_altitude, ALTITUDE_START + 0.005, epsilon = 1e-6);
}

#[test]
fn test_ascent_holds_at_maximum_altitude() {
    let mut ctx = create_context();
    run_to_ascent(&mut ctx);

    tick(&mut ctx, 1000);
    assert_relative_eq!(ctx.state.rocket_altitude, ALTITUDE_MAX);
    assert!(ctx.state.launch.is_ascending());

    tick(&mut ctx, 10);
    assert_relative_eq!(ctx.state.rocket_altitude, ALTITUDE_MAX);
}

#[test]
fn test_reset_from_every_phase() {
    let mut ctx = create_context();

    ctx.on_key("r");
    assert!(ctx.state.launch.is_idle());

    ctx.on_key("l");
    tick(&mut ctx, 1);
    ctx.on_key("r");
    assert!(ctx.state.launch.is_idle());
    assert_relative_eq!(ctx.state.rocket_altitude, ALTITUDE_START);

    run_to_ascent(&mut ctx);
    tick(&mut ctx, 200);
    assert!(ctx.state.rocket_altitude > ALTITUDE_START);
    ctx.on_key("r");
    assert!(ctx.state.launch.is_idle());
    assert_relative_eq!(ctx.state.rocket_altitude, ALTITUDE_START);
}

#[test]
fn test_launch_ignored_while_in_progress() {
    let mut ctx = create_context();
    ctx.on_key("l");
    tick(&mut ctx, 2);
    ctx.on_key("l");
    assert_eq!(ctx.state.launch.countdown_remaining(), Some(1));

    tick(&mut ctx, 2);
    let altitude = ctx.state.rocket_altitude;
    ctx.on_key("l");
    assert!(ctx.state.launch.is_ascending());
    assert_relative_eq!(ctx.state.rocket_altitude, altitude);
}

#[test]
fn test_toggles_are_involutions() {
    let mut ctx = create_context();
    let mut rng = StdRng::seed_from_u64(7);
    let day = scene::render(&ctx.state, &mut rng);

    ctx.on_key("t");
    let night = scene::render(&ctx.state, &mut rng);
    assert_ne!(night.clear_color, day.clear_color);
    assert_eq!(night.count(Element::Star), 100);

    ctx.on_key("t");
    let day_again = scene::render(&ctx.state, &mut rng);
    assert_eq!(day_again.clear_color, day.clear_color);
    assert_eq!(day_again.count(Element::Star), 0);

    let body_color = |frame: &rocket_launch::view::Frame| {
        frame.commands_for(Element::CelestialBody).map(|c| c.color).collect::<Vec<_>>()
    };
    assert_ne!(body_color(&night), body_color(&day));
    assert_eq!(body_color(&day_again), body_color(&day));

    ctx.on_key("c");
    assert_eq!(ctx.state.camera.mode, CameraMode::TopDown);
    ctx.on_key("c");
    assert_eq!(ctx.state.camera.mode, CameraMode::Chase);
}

#[test]
fn test_clouds_drift_every_tick() {
    let mut ctx = create_context();
    tick(&mut ctx, 250);
    assert_relative_eq!(ctx.state.cloud_phase, 0.25, epsilon = 1e-4);

    // drift continues through a launch
    run_to_ascent(&mut ctx);
    assert_relative_eq!(ctx.state.cloud_phase, 0.254, epsilon = 1e-4);
}

#[test]
fn test_smoke_and_flames_only_after_liftoff() {
    let mut ctx = create_context();
    let mut rng = StdRng::seed_from_u64(42);
    ctx.on_key("s");

    ctx.on_key("l");
    let counting = scene::render(&ctx.state, &mut rng);
    assert_eq!(counting.overlay_text.as_deref(), Some("3"));
    assert_eq!(counting.count(Element::Smoke), 0);
    assert_eq!(counting.count(Element::Flame), 0);

    tick(&mut ctx, 4);
    let flying = scene::render(&ctx.state, &mut rng);
    assert_eq!(flying.overlay_text, None);
    assert_eq!(flying.count(Element::Smoke), 20);
    assert_eq!(flying.count(Element::Flame), 3);
}

#[test]
fn test_frame_loop_runs_fixed_ticks_and_quits() {
    let mut ctx = create_context();
    let steps = ctx.update(0.5);
    assert_eq!(steps, 10);
    assert_relative_eq!(ctx.state.cloud_phase, 0.01, epsilon = 1e-5);

    assert_eq!(ctx.on_key("q"), Flow::Quit);
    assert_eq!(ctx.on_key("Q"), Flow::Continue);
}
