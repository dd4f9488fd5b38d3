use egui::Context;

use crate::model::{CameraMode, SceneState};
use crate::view::Frame;

/// Draw the overlay for one frame. Call inside `Context::run`.
pub fn build_ui(ctx: &Context, frame: &Frame, state: &SceneState, fps: f32, help: &[String]) {
    if let Some(text) = frame.overlay_text.as_deref() {
        draw_countdown(ctx, text);
    }
    draw_status_window(ctx, state, fps, help);
}

fn draw_countdown(ctx: &Context, text: &str) {
    egui::Area::new(egui::Id::new("countdown"))
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .size(64.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            );
        });
}

fn draw_status_window(ctx: &Context, state: &SceneState, fps: f32, help: &[String]) {
    egui::Window::new("Launch")
        .default_pos([8.0, 8.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(format!("FPS: {:.0}", fps)).small());
            for line in status_lines(state) {
                ui.label(egui::RichText::new(line).small());
            }
            ui.separator();
            ui.label(egui::RichText::new("Controls:").small());
            for line in help {
                ui.label(egui::RichText::new(line).small());
            }
        });
}

pub fn status_lines(state: &SceneState) -> Vec<String> {
    let phase = match state.launch.countdown_remaining() {
        Some(n) => format!("Phase: Countdown ({n})"),
        None => format!("Phase: {}", state.launch.label()),
    };
    let camera = match state.camera.mode {
        CameraMode::Chase => format!(
            "Camera: Chase (pan {:.1}, zoom {:.1})",
            state.camera.pan, state.camera.zoom
        ),
        CameraMode::TopDown => "Camera: Top-down".to_string(),
    };
    let on_off = |b: bool| if b { "on" } else { "off" };
    vec![
        phase,
        format!("Altitude: {:.2}", state.rocket_altitude),
        camera,
        format!("Smoke: {}", on_off(state.smoke_enabled)),
        format!("Night: {}", on_off(state.night_mode)),
    ]
}
