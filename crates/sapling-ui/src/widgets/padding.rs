use sapling_core::{LayoutChildren, StructuralWidget, TreeError, Widget};
use sapling_ui_graphics::{EdgeInsets, Size};
use sapling_ui_layout::Constraints;

/// Reserves `padding` around a required child.
pub struct Padding {
    pub padding: EdgeInsets,
    pub child: Option<Widget>,
}

impl Padding {
    pub fn new(padding: EdgeInsets, child: impl Into<Widget>) -> Self {
        Self {
            padding,
            child: Some(child.into()),
        }
    }
}

impl StructuralWidget for Padding {
    fn children(&self) -> Vec<Widget> {
        self.child.iter().cloned().collect()
    }

    fn layout(
        &self,
        constraints: Constraints,
        children: &mut LayoutChildren<'_>,
    ) -> Result<Size, TreeError> {
        children.require_child()?;
        let child = children.layout(0, constraints.deflate(self.padding))?;
        children.place(0, self.padding.top_left())?;
        Ok(constraints.constrain(child.inflate(self.padding)))
    }
}

impl From<Padding> for Widget {
    fn from(padding: Padding) -> Self {
        Widget::structural(padding)
    }
}
