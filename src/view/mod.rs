// VIEW: Frame description, tessellation and GPU rendering
pub mod effects;
pub mod frame;
pub mod gpu_init;
pub mod render;
pub mod scene;
pub mod tessellate;

pub use frame::{DrawCommand, Element, Frame, Lighting, Shape};
pub use gpu_init::GpuContext;
pub use render::{CameraResources, PipelineResources, SceneRenderer};
pub use tessellate::{tessellate, SceneMeshes};
