//! Procedural effects: smoke, flames, clouds and stars.
//!
//! Smoke, flames and stars are re-rolled every frame from the supplied RNG,
//! so they flicker and shimmer on screen. Clouds are deterministic.

use glam::Vec3;
use rand::Rng;

use super::frame::{Element, Frame, Rgba, Shape};
use crate::model::SceneState;

pub const SMOKE_PUFFS: usize = 20;
const SMOKE_COLOR: Rgba = [0.6, 0.6, 0.6, 0.5];

const FLAME_COLORS: [Rgba; 3] = [
    [1.0, 1.0, 0.0, 1.0],
    [1.0, 0.5, 0.0, 1.0],
    [1.0, 0.0, 0.0, 1.0],
];

const CLOUD_COLOR: Rgba = [1.0, 1.0, 1.0, 0.65];
const CLOUD_SPACING: f32 = 2.5;
/// Clouds slide this far before jumping back.
const CLOUD_WRAP: f32 = 3.0;
const CLOUD_HEIGHT: f32 = 2.8;
const CLOUD_DEPTH: f32 = -4.0;

pub const STAR_COUNT: usize = 100;
const STAR_COLOR: Rgba = [1.0, 1.0, 1.0, 1.0];

/// Grey puffs trailing below the rocket, only during the ascent.
pub fn push_smoke<R: Rng + ?Sized>(frame: &mut Frame, state: &SceneState, rng: &mut R) {
    if !(state.launch.is_ascending() && state.smoke_enabled) {
        return;
    }
    let anchor = Vec3::new(0.0, state.rocket_altitude - 0.3, 0.0);
    for _ in 0..SMOKE_PUFFS {
        let x = rng.gen_range(-0.1f32..0.1);
        let y = rng.gen_range(0.0f32..0.2);
        let z = rng.gen_range(-0.1f32..0.1);
        let radius = rng.gen_range(0.1f32..0.2);
        frame.push(
            Element::Smoke,
            Shape::Sphere { center: anchor + Vec3::new(x, -y, z), radius },
            SMOKE_COLOR,
        );
    }
}

/// Three flickering exhaust cones, yellow inside to red outside.
pub fn push_flames<R: Rng + ?Sized>(frame: &mut Frame, state: &SceneState, rng: &mut R) {
    if !state.launch.is_ascending() {
        return;
    }
    for (i, color) in FLAME_COLORS.iter().enumerate() {
        let flicker = 0.05 * rng.gen_range(0..10) as f32;
        let height = 0.2 + flicker;
        let radius = 0.1 + rng.gen_range(0..10) as f32 / 100.0;
        let base_y = state.rocket_altitude - 0.1 - flicker * i as f32;
        frame.push(
            Element::Flame,
            Shape::Cone { base: Vec3::new(0.0, base_y, 0.0), radius, height },
            *color,
        );
    }
}

/// Horizontal cloud positions for the given drift phase.
pub fn cloud_positions(cloud_phase: f32) -> impl Iterator<Item = Vec3> {
    let drift = cloud_phase % CLOUD_WRAP;
    (-5..=5).map(move |i| Vec3::new(i as f32 * CLOUD_SPACING + drift, CLOUD_HEIGHT, CLOUD_DEPTH))
}

/// Each cloud is one large puff flanked by two smaller ones.
pub fn push_clouds(frame: &mut Frame, state: &SceneState) {
    for center in cloud_positions(state.cloud_phase) {
        frame.push(Element::Cloud, Shape::Sphere { center, radius: 0.4 }, CLOUD_COLOR);
        for dx in [-0.5, 0.5] {
            frame.push(
                Element::Cloud,
                Shape::Sphere { center: center + Vec3::new(dx, 0.1, 0.0), radius: 0.3 },
                CLOUD_COLOR,
            );
        }
    }
}

/// Random star field, regenerated each frame.
pub fn push_stars<R: Rng + ?Sized>(frame: &mut Frame, state: &SceneState, rng: &mut R) {
    if !state.night_mode {
        return;
    }
    for _ in 0..STAR_COUNT {
        let x = rng.gen_range(-10.0f32..10.0);
        let y = rng.gen_range(1.0f32..11.0);
        let z = rng.gen_range(-10.0f32..10.0);
        frame.push(Element::Star, Shape::Point(Vec3::new(x, y, z)), STAR_COLOR);
    }
}
