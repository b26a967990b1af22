pub mod graphics;
pub mod sprite;

pub use graphics::{create_graphics, Graphics, GraphicsEvent};
