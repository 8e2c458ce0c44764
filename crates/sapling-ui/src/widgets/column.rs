//! Column widget implementation

use sapling_core::{LayoutChildren, StructuralWidget, TreeError, Widget};
use sapling_ui_graphics::{Offset, Size};
use sapling_ui_layout::{Constraints, UNBOUNDED};

/// Stacks children top to bottom, left aligned.
///
/// Children get the column's maximum width and an unbounded height.
#[derive(Default)]
pub struct Column {
    pub children: Vec<Widget>,
    pub spacing: f32,
}

impl Column {
    pub fn new(children: Vec<Widget>) -> Self {
        Self {
            children,
            spacing: 0.0,
        }
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }
}

impl StructuralWidget for Column {
    fn children(&self) -> Vec<Widget> {
        self.children.clone()
    }

    fn layout(
        &self,
        constraints: Constraints,
        children: &mut LayoutChildren<'_>,
    ) -> Result<Size, TreeError> {
        let child_constraints = Constraints {
            min_width: 0.0,
            max_width: constraints.max_width,
            min_height: 0.0,
            max_height: UNBOUNDED,
        };
        let mut y = 0.0f32;
        let mut width = 0.0f32;
        for index in 0..children.len() {
            if index > 0 {
                y += self.spacing;
            }
            let size = children.layout(index, child_constraints)?;
            children.place(index, Offset::new(0.0, y))?;
            y += size.height;
            width = width.max(size.width);
        }
        Ok(constraints.constrain(Size::new(width, y)))
    }
}

impl From<Column> for Widget {
    fn from(column: Column) -> Self {
        Widget::structural(column)
    }
}
