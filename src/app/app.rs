use crate::app::controller::Controller;
use crate::error::VisError;
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::ui::{self, UiResponse};
use egui_wgpu::ScreenDescriptor;
use egui_winit::State;
use std::sync::Arc;
use tokio::runtime::Handle;
use winit::window::Window;

pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
}

pub struct App {
    pub window: Arc<Window>,
    renderer: Renderer,
    egui_state: State,
    settings: Settings,
    controller: Controller,
}

impl App {
    pub async fn new(window: Arc<Window>, runtime: Handle) -> Result<Self, VisError> {
        let settings = Settings::load();

        let renderer = Renderer::new(&window, settings.colors.background).await?;

        let egui_ctx = renderer.egui_context();
        let egui_state = State::new(
            egui_ctx,
            egui::viewport::ViewportId::ROOT,
            &*window,
            None,
            None,
            None,
        );

        let controller = Controller::new(runtime);
        log::info!("Initial lot: {:?}", controller.sizes().as_slice());

        Ok(Self {
            window,
            renderer,
            egui_state,
            settings,
            controller,
        })
    }

    pub fn handle_event(&mut self, event: &winit::event::WindowEvent) -> EventResponse {
        let egui_response = self.egui_state.on_window_event(&self.window, event);

        match event {
            winit::event::WindowEvent::CloseRequested => {
                return EventResponse {
                    repaint: false,
                    exit: true,
                };
            }
            winit::event::WindowEvent::KeyboardInput { event, .. } => {
                if !egui_response.consumed
                    && event.logical_key
                        == winit::keyboard::Key::Named(winit::keyboard::NamedKey::Escape)
                {
                    return EventResponse {
                        repaint: false,
                        exit: true,
                    };
                }
            }
            winit::event::WindowEvent::Resized(size) => {
                self.renderer.resize(*size);
            }
            _ => {}
        }

        EventResponse {
            repaint: egui_response.repaint,
            exit: false,
        }
    }

    /// Apply pending sort snapshots, run the UI and present one frame.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        if self.controller.pump() {
            self.window.request_redraw();
        }

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let egui_ctx = self.renderer.egui_context();

        let mut response = UiResponse::default();
        let full_output = egui_ctx.run(raw_input, |ctx| {
            response = ui::show(
                ctx,
                self.controller.status(),
                self.controller.sizes(),
                &mut self.settings,
                self.controller.is_running(),
            );
        });

        if response.settings_changed {
            self.settings.animation.save();
        }

        if response.reset {
            self.controller.reset();
        }

        if response.sort {
            let algorithm = self.settings.animation.algorithm;
            let delay = self.settings.animation.step_delay();
            self.controller.sort(algorithm, delay);
        }

        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [self.window.inner_size().width, self.window.inner_size().height],
            pixels_per_point: full_output.pixels_per_point,
        };

        self.renderer
            .render(paint_jobs, full_output.textures_delta, screen_descriptor)
    }

    /// Recover from a failed frame where possible.
    pub fn handle_render_error(&mut self, err: wgpu::SurfaceError) -> EventResponse {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                log::debug!("Surface {:?}, reconfiguring", err);
                self.renderer.reconfigure();
            }
            wgpu::SurfaceError::OutOfMemory => {
                log::error!("Render error: {:?}", err);
                return EventResponse {
                    repaint: false,
                    exit: true,
                };
            }
            other => log::warn!("Render error: {:?}", other),
        }
        EventResponse {
            repaint: true,
            exit: false,
        }
    }
}
