use glam::Vec3;

use crate::model::CameraView;

pub type Rgba = [f32; 4];

/// Which part of the scene a draw command belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Ground,
    Cloud,
    CelestialBody,
    LaunchPad,
    Rocket,
    Smoke,
    Flame,
    Star,
}

impl Element {
    /// Drawn at full color regardless of lighting.
    pub fn is_emissive(self) -> bool {
        matches!(self, Element::CelestialBody | Element::Flame | Element::Star)
    }
}

/// Primitive shapes in world space. Cylinders and cones stand upright
/// on `base` and extend along +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Quad([Vec3; 4]),
    Triangle([Vec3; 3]),
    Cuboid { center: Vec3, size: Vec3 },
    Sphere { center: Vec3, radius: f32 },
    Cylinder { base: Vec3, radius: f32, height: f32 },
    Cone { base: Vec3, radius: f32, height: f32 },
    Point(Vec3),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub element: Element,
    pub shape: Shape,
    pub color: Rgba,
}

impl DrawCommand {
    pub fn is_translucent(&self) -> bool {
        self.color[3] < 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub light_pos: Vec3,
    pub light_color: [f32; 3],
    pub ambient: f32,
}

/// Everything needed to draw one frame, independent of the GPU.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub clear_color: Rgba,
    pub view: CameraView,
    pub lighting: Lighting,
    pub commands: Vec<DrawCommand>,
    /// Large centered text, e.g. the countdown number.
    pub overlay_text: Option<String>,
}

impl Frame {
    pub fn push(&mut self, element: Element, shape: Shape, color: Rgba) {
        self.commands.push(DrawCommand { element, shape, color });
    }

    pub fn commands_for(&self, element: Element) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |c| c.element == element)
    }

    pub fn count(&self, element: Element) -> usize {
        self.commands_for(element).count()
    }
}
