use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info, warn};
use winit::{
    event::*,
    event_loop::EventLoop,
    window::Window,
};

// Import from the library crate
use rocket_launch::{
    config::Settings,
    controller::{input::native, Flow, FrameLoopContext},
    error::LaunchError,
    logging,
    model::Camera,
    ui,
    view::{self, GpuContext, SceneRenderer},
};

struct App {
    gpu: GpuContext,
    size: winit::dpi::PhysicalSize<u32>,
    window: Arc<Window>,

    // Rendering state
    scene_renderer: SceneRenderer,
    camera: Camera,

    // egui
    egui_renderer: egui_wgpu::Renderer,
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,

    // Simulation
    frame_loop: FrameLoopContext,
    rng: StdRng,
    help: Vec<String>,

    // Frame timing
    last_frame_time: std::time::Instant,
}

impl App {
    async fn new(window: Arc<Window>, settings: &Settings) -> Result<Self, LaunchError> {
        let size = window.inner_size();

        // Initialize wgpu
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;
        let gpu = GpuContext::new(&instance, surface, size.width, size.height).await?;

        let scene_renderer = SceneRenderer::new(&gpu.device, gpu.format, gpu.config.width, gpu.config.height);
        let camera = Camera::new(
            gpu.config.width,
            gpu.config.height,
            settings.fov_y_degrees,
            settings.z_near,
            settings.z_far,
        );

        // Initialize egui
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            None,
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &gpu.device,
            gpu.format,
            egui_wgpu::RendererOptions::default(),
        );

        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let frame_loop = FrameLoopContext::new(settings);
        let help = frame_loop.input.help_lines();

        Ok(Self {
            gpu,
            size,
            window,
            scene_renderer,
            camera,
            egui_renderer,
            egui_state,
            egui_ctx,
            frame_loop,
            rng,
            help,
            last_frame_time: std::time::Instant::now(),
        })
    }

    /// Returns `Flow::Quit` when the quit key was pressed.
    fn input(&mut self, event: &WindowEvent) -> Flow {
        // egui sees every event first; the scene keys stay active underneath it
        let _ = self.egui_state.on_window_event(self.window.as_ref(), event);

        if let WindowEvent::KeyboardInput { event: key_event, .. } = event {
            if let Some(key) = native::pressed_character(key_event) {
                return self.frame_loop.on_key(key);
            }
        }
        Flow::Continue
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.gpu.resize(new_size.width, new_size.height);
            self.scene_renderer.resize(&self.gpu.device, new_size.width, new_size.height);
            self.camera.set_aspect(new_size.width, new_size.height);
        }
    }

    fn update(&mut self, dt: f32) {
        self.frame_loop.update(dt);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.gpu.surface.get_current_texture()?;
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let frame = view::scene::render(&self.frame_loop.state, &mut self.rng);

        // Overlay
        let raw_input = self.egui_state.take_egui_input(&self.window);
        let fps = self.frame_loop.fps();
        let state = &self.frame_loop.state;
        let help = &self.help;
        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            ui::build_ui(ctx, &frame, state, fps, help);
        });
        self.egui_state.handle_platform_output(&self.window, egui_output.platform_output);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.gpu.config.width, self.gpu.config.height],
            pixels_per_point: self.window.scale_factor() as f32,
        };
        let primitives = self.egui_ctx.tessellate(egui_output.shapes, self.window.scale_factor() as f32);
        let textures_delta = egui_output.textures_delta;

        let mut encoder = self.gpu.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        self.scene_renderer.encode(
            &self.gpu.device,
            &self.gpu.queue,
            &mut encoder,
            &view,
            &frame,
            &self.camera,
        );

        // Upload egui textures
        for (id, image_delta) in &textures_delta.set {
            self.egui_renderer.update_texture(&self.gpu.device, &self.gpu.queue, *id, image_delta);
        }
        self.egui_renderer.update_buffers(&self.gpu.device, &self.gpu.queue, &mut encoder, &primitives, &screen_descriptor);

        // Render egui on top
        {
            let egui_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui_render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.egui_renderer.render(&mut egui_pass.forget_lifetime(), &primitives, &screen_descriptor);
        }

        // Cleanup egui textures
        for id in &textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn run() -> Result<(), LaunchError> {
    let settings = Settings::default();

    let event_loop = EventLoop::new()?;
    let window_attributes = Window::default_attributes()
        .with_title(settings.window_title.as_str())
        .with_inner_size(winit::dpi::LogicalSize::new(settings.window_width, settings.window_height));
    let window = Arc::new(event_loop.create_window(window_attributes)?);

    let mut app = pollster::block_on(App::new(window.clone(), &settings))?;
    info!("window ready, press 'l' to launch");

    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == app.window.id() => {
                if app.input(event) == Flow::Quit {
                    elwt.exit();
                    return;
                }
                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::Resized(physical_size) => {
                        app.resize(*physical_size);
                    }
                    WindowEvent::RedrawRequested => {
                        let now = std::time::Instant::now();
                        let dt = (now - app.last_frame_time).as_secs_f32();
                        app.last_frame_time = now;

                        app.update(dt);

                        match app.render() {
                            Ok(_) => {}
                            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => app.gpu.reconfigure(),
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                error!("surface out of memory");
                                elwt.exit();
                            }
                            Err(e) => warn!("dropped frame: {e:?}"),
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                app.window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}

fn main() {
    logging::init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}
