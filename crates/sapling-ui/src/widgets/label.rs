use sapling_core::{LayoutChildren, StructuralWidget, Surface, TreeError, Widget};
use sapling_ui_graphics::{Color, Offset, Point, Size};
use sapling_ui_layout::Constraints;

/// Advance of one character; text is measured as a fixed-width grid.
pub const CHAR_WIDTH: f32 = 8.0;
pub const LINE_HEIGHT: f32 = 16.0;

/// Single line of text.
pub struct Label {
    pub text: String,
    pub color: Color,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Color::WHITE,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Unconstrained size of the text.
    pub fn measure(&self) -> Size {
        Size::new(self.text.chars().count() as f32 * CHAR_WIDTH, LINE_HEIGHT)
    }
}

impl StructuralWidget for Label {
    fn layout(
        &self,
        constraints: Constraints,
        _children: &mut LayoutChildren<'_>,
    ) -> Result<Size, TreeError> {
        Ok(constraints.constrain(self.measure()))
    }

    fn render(&self, origin: Offset, _size: Size, surface: &mut dyn Surface) {
        surface.draw_text(Point::ZERO + origin, &self.text, self.color);
    }
}

impl From<Label> for Widget {
    fn from(label: Label) -> Self {
        Widget::structural(label)
    }
}
