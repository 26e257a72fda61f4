use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::camera::OrbitCamera;
use crate::cli::Cli;
use crate::demos::DemoSettings;
use crate::field::CubeField;
use crate::renderer::Renderer;

pub const INITIAL_WINDOW_WIDTH: u32 = 800;
pub const INITIAL_WINDOW_HEIGHT: u32 = 600;

/// Application state: the cube field, the camera, and the renderer, driven
/// by winit's event loop on the main thread.
pub struct App {
    settings: DemoSettings,
    field: CubeField,
    camera: OrbitCamera,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
}

impl App {
    pub fn new(cli: &Cli) -> Self {
        let mut settings = cli.demo.settings();
        if let Some(count) = cli.count {
            settings.field.count = count;
        }

        let field = CubeField::generate(&settings.field);
        let camera = OrbitCamera {
            orbiting: settings.orbiting,
            ..OrbitCamera::default()
        };

        log::info!(
            "demo '{}': {} cubes, camera {}",
            cli.demo.name(),
            field.len(),
            if settings.orbiting { "orbiting" } else { "static" }
        );

        Self {
            settings,
            field,
            camera,
            window: None,
            renderer: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Cube Field")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window.clone(), self.field.len())) {
            Ok(r) => r,
            Err(e) => {
                log::error!("failed to initialize renderer: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.camera.set_aspect(size.width, size.height);

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                self.camera.set_aspect(new_size.width, new_size.height);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.field.advance();
                self.camera.advance();

                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    match renderer.render(
                        &mut self.camera,
                        &self.field,
                        window,
                        self.settings.show_slider,
                    ) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            let size = window.inner_size();
                            renderer.resize(size.width, size.height);
                        }
                        Err(e) => log::error!("render error: {e}"),
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Continuous animation: draw, then immediately ask for the next frame.
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
