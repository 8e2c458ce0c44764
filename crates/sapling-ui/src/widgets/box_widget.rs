//! Single-child boxes: fixed size, extra constraints, solid fill.

use sapling_core::{LayoutChildren, StructuralWidget, Surface, TreeError, Widget};
use sapling_ui_graphics::{Color, Offset, Rect, Size};
use sapling_ui_layout::Constraints;

/// Box of a preferred size; its child, if any, is forced to that size.
pub struct SizedBox {
    pub size: Size,
    pub child: Option<Widget>,
}

impl SizedBox {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            child: None,
        }
    }

    pub fn with_child(mut self, child: impl Into<Widget>) -> Self {
        self.child = Some(child.into());
        self
    }
}

impl StructuralWidget for SizedBox {
    fn children(&self) -> Vec<Widget> {
        self.child.iter().cloned().collect()
    }

    fn layout(
        &self,
        constraints: Constraints,
        children: &mut LayoutChildren<'_>,
    ) -> Result<Size, TreeError> {
        let size = constraints.constrain(self.size);
        if !children.is_empty() {
            children.layout(0, Constraints::tight(size))?;
            children.place(0, Offset::ZERO)?;
        }
        Ok(size)
    }
}

impl From<SizedBox> for Widget {
    fn from(sized: SizedBox) -> Self {
        Widget::structural(sized)
    }
}

/// Imposes additional constraints on its child.
pub struct ConstrainedBox {
    pub constraints: Constraints,
    pub child: Option<Widget>,
}

impl ConstrainedBox {
    pub fn new(constraints: Constraints, child: Option<Widget>) -> Self {
        Self { constraints, child }
    }
}

impl StructuralWidget for ConstrainedBox {
    fn children(&self) -> Vec<Widget> {
        self.child.iter().cloned().collect()
    }

    fn layout(
        &self,
        constraints: Constraints,
        children: &mut LayoutChildren<'_>,
    ) -> Result<Size, TreeError> {
        let inner = self.constraints.enforce(constraints);
        if children.is_empty() {
            return Ok(inner.smallest());
        }
        let size = children.layout(0, inner)?;
        children.place(0, Offset::ZERO)?;
        Ok(constraints.constrain(size))
    }
}

impl From<ConstrainedBox> for Widget {
    fn from(constrained: ConstrainedBox) -> Self {
        Widget::structural(constrained)
    }
}

/// Fills its bounds with a color, then draws its child on top.
///
/// Without a child it expands to the largest finite size allowed.
pub struct ColoredBox {
    pub color: Color,
    pub child: Option<Widget>,
}

impl ColoredBox {
    pub fn new(color: Color) -> Self {
        Self { color, child: None }
    }

    pub fn with_child(mut self, child: impl Into<Widget>) -> Self {
        self.child = Some(child.into());
        self
    }
}

impl StructuralWidget for ColoredBox {
    fn children(&self) -> Vec<Widget> {
        self.child.iter().cloned().collect()
    }

    fn layout(
        &self,
        constraints: Constraints,
        children: &mut LayoutChildren<'_>,
    ) -> Result<Size, TreeError> {
        if children.is_empty() {
            return Ok(constraints.constrain(constraints.biggest_finite()));
        }
        let size = children.layout(0, constraints)?;
        children.place(0, Offset::ZERO)?;
        Ok(size)
    }

    fn render(&self, origin: Offset, size: Size, surface: &mut dyn Surface) {
        if !self.color.is_transparent() {
            surface.fill_rect(Rect::from_origin_size(origin, size), self.color);
        }
    }
}

impl From<ColoredBox> for Widget {
    fn from(colored: ColoredBox) -> Self {
        Widget::structural(colored)
    }
}
