use glam::Vec3;
use rand::Rng;

use super::effects;
use super::frame::{Element, Frame, Lighting, Rgba, Shape};
use crate::model::SceneState;

pub const DAY_SKY: Rgba = [0.2, 0.4, 0.8, 1.0];
pub const NIGHT_SKY: Rgba = [0.05, 0.05, 0.1, 1.0];
pub const SUN_COLOR: Rgba = [1.0, 1.0, 0.0, 1.0];
pub const MOON_COLOR: Rgba = [1.0, 1.0, 1.0, 1.0];

const LIGHT_POS: Vec3 = Vec3::new(5.0, 5.0, 5.0);

const GROUND_COLOR: Rgba = [0.1, 0.6, 0.1, 1.0];
const GROUND_Y: f32 = -1.0;
const GROUND_HALF_EXTENT: f32 = 10.0;

const PAD_COLOR: Rgba = [0.4, 0.3, 0.2, 1.0];
const BODY_COLOR: Rgba = [0.8, 0.8, 0.8, 1.0];
const NOSE_COLOR: Rgba = [1.0, 0.0, 0.0, 1.0];
const FIN_COLOR: Rgba = [0.0, 0.0, 1.0, 1.0];

const BODY_RADIUS: f32 = 0.2;
const BODY_HEIGHT: f32 = 1.0;
const NOSE_HEIGHT: f32 = 0.3;

/// Fin triangles relative to the rocket base.
const FINS: [[Vec3; 3]; 3] = [
    [Vec3::new(-0.2, 0.0, 0.0), Vec3::new(-0.4, -0.3, 0.2), Vec3::new(-0.2, 0.1, 0.0)],
    [Vec3::new(0.2, 0.0, 0.0), Vec3::new(0.4, -0.3, 0.2), Vec3::new(0.2, 0.1, 0.0)],
    [Vec3::new(0.0, 0.0, -0.2), Vec3::new(0.0, -0.3, -0.4), Vec3::new(0.1, 0.1, -0.2)],
];

pub fn sky_color(night_mode: bool) -> Rgba {
    if night_mode { NIGHT_SKY } else { DAY_SKY }
}

pub fn celestial_color(night_mode: bool) -> Rgba {
    if night_mode { MOON_COLOR } else { SUN_COLOR }
}

pub fn lighting(night_mode: bool) -> Lighting {
    if night_mode {
        Lighting { light_pos: LIGHT_POS, light_color: [0.45, 0.5, 0.7], ambient: 0.15 }
    } else {
        Lighting { light_pos: LIGHT_POS, light_color: [1.0, 1.0, 0.9], ambient: 0.35 }
    }
}

/// Frame with sky, camera and lighting set but no geometry.
pub(crate) fn empty_frame(state: &SceneState) -> Frame {
    Frame {
        clear_color: sky_color(state.night_mode),
        view: state.camera.view(),
        lighting: lighting(state.night_mode),
        commands: Vec::new(),
        overlay_text: None,
    }
}

/// Build the draw list for the current state. Reads `state` only; all
/// per-frame jitter comes from `rng`.
pub fn render<R: Rng + ?Sized>(state: &SceneState, rng: &mut R) -> Frame {
    let mut frame = empty_frame(state);

    push_ground(&mut frame);
    effects::push_clouds(&mut frame, state);
    push_celestial_body(&mut frame, state);
    push_pad(&mut frame);
    push_rocket(&mut frame, state);
    effects::push_smoke(&mut frame, state, rng);
    effects::push_flames(&mut frame, state, rng);
    effects::push_stars(&mut frame, state, rng);

    frame.overlay_text = state.launch.countdown_remaining().map(|n| n.to_string());
    frame
}

fn push_ground(frame: &mut Frame) {
    let e = GROUND_HALF_EXTENT;
    frame.push(
        Element::Ground,
        Shape::Quad([
            Vec3::new(-e, GROUND_Y, -e),
            Vec3::new(-e, GROUND_Y, e),
            Vec3::new(e, GROUND_Y, e),
            Vec3::new(e, GROUND_Y, -e),
        ]),
        GROUND_COLOR,
    );
}

fn push_celestial_body(frame: &mut Frame, state: &SceneState) {
    frame.push(
        Element::CelestialBody,
        Shape::Sphere { center: Vec3::new(3.0, 3.0, -5.0), radius: 0.3 },
        celestial_color(state.night_mode),
    );
}

fn push_pad(frame: &mut Frame) {
    // platform
    frame.push(
        Element::LaunchPad,
        Shape::Cuboid { center: Vec3::new(0.0, -1.0, 0.0), size: Vec3::new(1.5, 0.2, 1.5) },
        PAD_COLOR,
    );
    // support pillar
    frame.push(
        Element::LaunchPad,
        Shape::Cuboid { center: Vec3::new(0.0, -0.75, 0.0), size: Vec3::new(0.1, 0.5, 0.1) },
        PAD_COLOR,
    );
}

fn push_rocket(frame: &mut Frame, state: &SceneState) {
    let base = Vec3::new(0.0, state.rocket_altitude, 0.0);
    frame.push(
        Element::Rocket,
        Shape::Cylinder { base, radius: BODY_RADIUS, height: BODY_HEIGHT },
        BODY_COLOR,
    );
    frame.push(
        Element::Rocket,
        Shape::Cone { base: base + Vec3::Y * BODY_HEIGHT, radius: BODY_RADIUS, height: NOSE_HEIGHT },
        NOSE_COLOR,
    );
    for fin in FINS {
        frame.push(Element::Rocket, Shape::Triangle(fin.map(|v| v + base)), FIN_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CameraMode, LaunchState};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn celestial(frame: &Frame) -> Rgba {
        frame.commands_for(Element::CelestialBody).next().map(|c| c.color).unwrap_or_default()
    }

    #[test]
    fn idle_scene_has_static_parts_only() {
        let frame = render(&SceneState::new(), &mut StdRng::seed_from_u64(0));
        assert_eq!(frame.count(Element::Ground), 1);
        assert_eq!(frame.count(Element::LaunchPad), 2);
        assert_eq!(frame.count(Element::Rocket), 5);
        assert_eq!(frame.count(Element::CelestialBody), 1);
        assert_eq!(frame.count(Element::Cloud), 33);
        assert_eq!(frame.count(Element::Smoke), 0);
        assert_eq!(frame.count(Element::Flame), 0);
        assert_eq!(frame.count(Element::Star), 0);
        assert_eq!(frame.overlay_text, None);
        assert_eq!(frame.clear_color, DAY_SKY);
    }

    #[test]
    fn rocket_rides_on_altitude() {
        let state = SceneState { rocket_altitude: 2.0, ..SceneState::new() };
        let frame = render(&state, &mut StdRng::seed_from_u64(0));
        let body = frame.commands_for(Element::Rocket).next().map(|c| c.shape);
        assert_eq!(
            body,
            Some(Shape::Cylinder { base: Vec3::new(0.0, 2.0, 0.0), radius: 0.2, height: 1.0 })
        );
    }

    #[test]
    fn countdown_text_shows_remaining() {
        let state = SceneState {
            launch: LaunchState::Countdown { remaining: 2, elapsed: 0.4 },
            ..SceneState::new()
        };
        let frame = render(&state, &mut StdRng::seed_from_u64(0));
        assert_eq!(frame.overlay_text.as_deref(), Some("2"));
    }

    #[test]
    fn ascent_with_smoke_has_all_effects() {
        let state = SceneState {
            launch: LaunchState::Ascending,
            smoke_enabled: true,
            night_mode: true,
            ..SceneState::new()
        };
        let frame = render(&state, &mut StdRng::seed_from_u64(0));
        assert_eq!(frame.count(Element::Smoke), 20);
        assert_eq!(frame.count(Element::Flame), 3);
        assert_eq!(frame.count(Element::Star), 100);
        assert_eq!(frame.overlay_text, None);
    }

    #[test]
    fn night_toggle_twice_restores_colors() {
        let mut state = SceneState::new();
        let mut rng = StdRng::seed_from_u64(0);
        let day = render(&state, &mut rng);
        state.night_mode = true;
        let night = render(&state, &mut rng);
        assert_eq!(night.clear_color, NIGHT_SKY);
        assert_eq!(celestial(&night), MOON_COLOR);
        assert_ne!(night.lighting, day.lighting);
        state.night_mode = false;
        let day_again = render(&state, &mut rng);
        assert_eq!(day_again.clear_color, day.clear_color);
        assert_eq!(celestial(&day_again), SUN_COLOR);
        assert_eq!(day_again.lighting, day.lighting);
    }

    #[test]
    fn same_seed_same_frame() {
        let state = SceneState {
            launch: LaunchState::Ascending,
            smoke_enabled: true,
            night_mode: true,
            ..SceneState::new()
        };
        let a = render(&state, &mut StdRng::seed_from_u64(42));
        let b = render(&state, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn render_leaves_state_untouched() {
        let state = SceneState { launch: LaunchState::Ascending, ..SceneState::new() };
        let before = state.clone();
        let _ = render(&state, &mut StdRng::seed_from_u64(1));
        assert_eq!(state, before);
    }

    #[test]
    fn frame_uses_camera_mode() {
        let mut state = SceneState::new();
        state.camera.mode = CameraMode::TopDown;
        let frame = render(&state, &mut StdRng::seed_from_u64(0));
        assert_eq!(frame.view, state.camera.view());
        assert_eq!(frame.view.eye, Vec3::new(0.0, 8.0, 0.01));
    }
}
