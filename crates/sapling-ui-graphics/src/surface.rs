use crate::{Color, Point, Rect};

/// Drawing target handed to widgets during the render pass.
///
/// Backends own every resource behind a surface (window, pixel buffer,
/// fonts). Widgets only see these primitives, positioned in surface
/// coordinates that already include every ancestor offset.
pub trait Surface {
    /// Clears the whole surface before a frame is drawn.
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color);

    /// Draws a single line of text with its top-left corner at `origin`.
    fn draw_text(&mut self, origin: Point, text: &str, color: Color);

    /// Makes the frame drawn since the last [`Surface::clear`] visible.
    fn present(&mut self);
}
