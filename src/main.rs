use winit::event_loop::{ControlFlow, EventLoop};

mod animator;
mod app;
mod error;
mod layout;
mod lot;
mod renderer;
mod settings;
mod sort;
mod ui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut handler = app::AppHandler::new(tokio::runtime::Runtime::new()?);

    event_loop.run_app(&mut handler)?;

    if let Some(err) = handler.error.take() {
        return Err(err.into());
    }

    Ok(())
}
