use glam::{Mat4, Vec3};

pub const ZOOM_DEFAULT: f32 = 5.0;
pub const ZOOM_STEP: f32 = 0.3;
pub const PAN_STEP: f32 = 0.3;
/// Closest chase distance; below this the eye passes the look-at target.
pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    Chase,
    TopDown,
}

impl CameraMode {
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::Chase => CameraMode::TopDown,
            CameraMode::TopDown => CameraMode::Chase,
        }
    }
}

/// User-controlled camera parameters, stored in the scene state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub mode: CameraMode,
    pub pan: f32,
    pub zoom: f32,
}

impl CameraRig {
    pub fn new() -> Self {
        Self {
            mode: CameraMode::Chase,
            pan: 0.0,
            zoom: ZOOM_DEFAULT,
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Positive `steps` move the eye closer to the pad.
    pub fn zoom_by(&mut self, steps: f32) {
        self.zoom = (self.zoom - steps * ZOOM_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn pan_by(&mut self, steps: f32) {
        self.pan += steps * PAN_STEP;
    }

    /// Eye, target and up vector for the current mode.
    pub fn view(&self) -> CameraView {
        match self.mode {
            CameraMode::TopDown => CameraView {
                eye: Vec3::new(0.0, 8.0, 0.01),
                target: Vec3::ZERO,
                up: Vec3::NEG_Z,
            },
            CameraMode::Chase => CameraView {
                eye: Vec3::new(self.pan, 1.0, self.zoom),
                target: Vec3::new(self.pan, 0.0, 0.0),
                up: Vec3::Y,
            },
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl CameraView {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Perspective projection, resized with the window.
pub struct Camera {
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32, fov_y_degrees: f32, z_near: f32, z_far: f32) -> Self {
        let mut camera = Self {
            fov_y: fov_y_degrees.to_radians(),
            aspect: 1.0,
            z_near,
            z_far,
        };
        camera.set_aspect(width, height);
        camera
    }

    /// Ignores zero-sized windows (minimized).
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far)
    }

    pub fn view_proj(&self, view: &CameraView) -> Mat4 {
        self.projection() * view.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn chase_view_follows_pan_and_zoom() {
        let mut rig = CameraRig::new();
        rig.pan_by(1.0);
        rig.zoom_by(1.0);
        let view = rig.view();
        assert_relative_eq!(view.eye.x, 0.3, epsilon = 1e-6);
        assert_relative_eq!(view.eye.z, 4.7, epsilon = 1e-6);
        assert_relative_eq!(view.target.x, 0.3, epsilon = 1e-6);
        assert_eq!(view.up, Vec3::Y);
    }

    #[test]
    fn top_down_ignores_offsets() {
        let mut rig = CameraRig::new();
        rig.pan_by(-4.0);
        rig.toggle_mode();
        let view = rig.view();
        assert_eq!(view.eye, Vec3::new(0.0, 8.0, 0.01));
        assert_eq!(view.target, Vec3::ZERO);
    }

    #[test]
    fn zoom_saturates() {
        let mut rig = CameraRig::new();
        for _ in 0..100 {
            rig.zoom_by(1.0);
        }
        assert_relative_eq!(rig.zoom, ZOOM_MIN);
        for _ in 0..1000 {
            rig.zoom_by(-1.0);
        }
        assert_relative_eq!(rig.zoom, ZOOM_MAX);
    }

    #[test]
    fn aspect_tracks_resize() {
        let mut camera = Camera::new(800, 600, 45.0, 1.0, 200.0);
        assert_relative_eq!(camera.aspect, 800.0 / 600.0, epsilon = 1e-6);
        camera.set_aspect(1000, 500);
        assert_relative_eq!(camera.aspect, 2.0);
        camera.set_aspect(1000, 0);
        assert_relative_eq!(camera.aspect, 2.0);
    }

    #[test]
    fn view_proj_is_finite_in_both_modes() {
        let camera = Camera::new(800, 600, 45.0, 1.0, 200.0);
        let mut rig = CameraRig::new();
        for _ in 0..2 {
            let m = camera.view_proj(&rig.view());
            assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
            rig.toggle_mode();
        }
    }
}
