//! Rendering primitives
//!
//! Simulation code never touches pixels. Draw passes issue commands to a
//! [`Renderer`], and the host decides what those commands turn into.

pub mod draw_list;

pub use draw_list::{DrawCommand, DrawList};

/// Palette index used by rectangle fills
pub type Color = u8;

/// Sprite sheet index
pub type SpriteId = u16;

/// The fantasy console's drawing surface
pub trait Renderer {
    /// Clear the whole screen
    fn clear(&mut self);

    /// Draw sprite `id` with its top-left corner at (`x`, `y`)
    fn sprite(&mut self, id: SpriteId, x: i32, y: i32);

    /// Fill the rectangle spanning (`x0`, `y0`) to (`x1`, `y1`)
    fn rect_fill(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color);

    /// Draw `text` using bitmap font `font`
    fn text(&mut self, font: u8, x: i32, y: i32, text: &str);
}
