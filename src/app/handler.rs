use crate::app::app::App;
use crate::error::VisError;
use std::sync::Arc;
use tokio::runtime::Runtime;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

pub const WINDOW_TITLE: &str = "Parking Visualizer";
pub const WINDOW_WIDTH: f64 = 800.0;
pub const WINDOW_HEIGHT: f64 = 600.0;

pub struct AppHandler {
    pub app: Option<App>,
    pub runtime: Runtime,
    /// Startup failure reported back to `main` once the loop exits.
    pub error: Option<VisError>,
}

impl AppHandler {
    pub fn new(runtime: Runtime) -> Self {
        Self {
            app: None,
            runtime,
            error: None,
        }
    }

    fn create_app(&self, event_loop: &ActiveEventLoop) -> Result<App, VisError> {
        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let runtime_handle = self.runtime.handle().clone();
        self.runtime.block_on(App::new(window, runtime_handle))
    }
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_none() {
            match self.create_app(event_loop) {
                Ok(app) => self.app = Some(app),
                Err(e) => {
                    log::error!("Failed to start: {}", e);
                    self.error = Some(VisError::new("startup-failed").push_vis(e));
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(app) = &mut self.app {
            let response = app.handle_event(&event);
            if response.repaint {
                app.window.request_redraw();
            }
            if response.exit {
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(app) = &mut self.app {
            if let Err(e) = app.render() {
                if app.handle_render_error(e).exit {
                    event_loop.exit();
                    return;
                }
            }
            app.window.request_redraw();
        }
    }
}
