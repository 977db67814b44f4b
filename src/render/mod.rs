pub mod draw;
pub mod renderer;
pub mod surface;

pub use draw::{Draw, draw_frame};
pub use renderer::Renderer;
pub use surface::{Canvas, Cell, CellRect, Surface};
