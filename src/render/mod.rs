//! Drawing: the surface the games draw on and its ratatui rendition

pub mod canvas;
pub mod renderer;
pub mod surface;

pub use canvas::{CellCanvas, Glyph};
pub use renderer::Renderer;
pub use surface::{DrawCommand, Paint, RecordingSurface, Surface, TextAnchor};
