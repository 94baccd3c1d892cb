pub mod render;
pub mod renderer;

pub use renderer::Renderer;
