//! Rendering context shared between the app shell and surface backends.

use sapling_core::ElementTree;
use sapling_ui_graphics::{Color, Surface};

/// Owns the drawing surface for the lifetime of an application.
///
/// Constructed once and threaded through every frame; nothing about the
/// backend lives in global state.
#[derive(Debug)]
pub struct RenderContext<S: Surface> {
    surface: S,
    clear_color: Color,
    frames: u64,
}

impl<S: Surface> RenderContext<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            clear_color: Color::BLACK,
            frames: 0,
        }
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Clears the surface, paints `tree` in tree order and presents it.
    pub fn render_frame(&mut self, tree: &mut ElementTree) {
        self.surface.clear(self.clear_color);
        tree.paint(&mut self.surface);
        self.surface.present();
        self.frames += 1;
        log::trace!("presented frame {}", self.frames);
    }
}

#[cfg(test)]
mod tests {
    use sapling_core::{Constraints, ElementTree, Widget};
    use sapling_testing::{DrawOp, RecordingSurface};
    use sapling_ui::{ColoredBox, Padding};
    use sapling_ui_graphics::{EdgeInsets, Rect, Size};

    use super::*;

    #[test]
    fn frame_is_cleared_painted_and_presented() {
        let red = Color::rgb(255, 0, 0);
        let mut tree = ElementTree::new();
        let root = tree
            .mount(Widget::from(Padding::new(
                EdgeInsets::all(4.0),
                ColoredBox::new(red),
            )))
            .expect("mount");
        tree.layout(root, Constraints::tight(Size::new(20.0, 10.0)))
            .expect("layout");

        let mut cx = RenderContext::new(RecordingSurface::new()).with_clear_color(Color::WHITE);
        cx.render_frame(&mut tree);

        assert_eq!(
            cx.surface().ops(),
            &[
                DrawOp::Clear(Color::WHITE),
                DrawOp::FillRect(
                    Rect {
                        x: 4.0,
                        y: 4.0,
                        width: 12.0,
                        height: 2.0
                    },
                    red
                ),
                DrawOp::Present,
            ]
        );
        assert_eq!(cx.frames(), 1);
    }
}
