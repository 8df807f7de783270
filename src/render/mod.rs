//! Drawing: the surface the game paints onto and the terminal renderer

pub mod renderer;
pub mod surface;

pub use renderer::Renderer;
pub use surface::{paint, CellCanvas, CellColor, RenderSurface};
