pub mod commands;
pub mod renderer;

pub use commands::{DrawCommand, PixelRect, RenderFrame};
pub use renderer::Renderer;
