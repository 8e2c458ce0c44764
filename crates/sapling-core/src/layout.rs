//! Top-down constraint propagation producing element sizes and offsets.

use sapling_ui_graphics::{Offset, Size};
use sapling_ui_layout::Constraints;

use crate::element::{ElementId, ElementTree};
use crate::error::{Invariant, TreeError};
use crate::widget::{Widget, WidgetKind};

/// Children of a structural element during its layout call.
///
/// Indices follow the order of `StructuralWidget::children`.
pub struct LayoutChildren<'a> {
    tree: &'a mut ElementTree,
    owner: WidgetKind,
    children: Vec<ElementId>,
}

impl LayoutChildren<'_> {
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Fails with [`Invariant::MissingChild`] unless at least one child exists.
    pub fn require_child(&self) -> Result<(), TreeError> {
        if self.children.is_empty() {
            return Err(self.missing_child());
        }
        Ok(())
    }

    /// Lays out the child at `index` and returns its size.
    pub fn layout(&mut self, index: usize, constraints: Constraints) -> Result<Size, TreeError> {
        let child = self.child(index)?;
        self.tree.layout(child, constraints)
    }

    /// Sets the offset of the child at `index` relative to the parent's origin.
    pub fn place(&mut self, index: usize, offset: Offset) -> Result<(), TreeError> {
        let child = self.child(index)?;
        self.tree.get_mut(child)?.offset = offset;
        Ok(())
    }

    /// Size of the child at `index` from its most recent layout.
    pub fn size(&self, index: usize) -> Option<Size> {
        let child = self.children.get(index)?;
        self.tree.get(*child).map(|element| element.size())
    }

    fn child(&self, index: usize) -> Result<ElementId, TreeError> {
        self.children
            .get(index)
            .copied()
            .ok_or_else(|| self.missing_child())
    }

    fn missing_child(&self) -> TreeError {
        Invariant::MissingChild {
            kind: self.owner.name(),
        }
        .into()
    }
}

impl ElementTree {
    /// Lays out `id` under `constraints`, storing and returning its size.
    ///
    /// Builder and stateful elements pass the constraints through to their
    /// single child unchanged and adopt its size.
    pub fn layout(&mut self, id: ElementId, constraints: Constraints) -> Result<Size, TreeError> {
        let element = self.elements.get(id).ok_or(TreeError::Missing { id })?;
        let widget = element.widget().clone();
        let children = element.children().to_vec();

        let size = match &widget {
            Widget::Structural(structural) => {
                for child in &children {
                    self.get_mut(*child)?.offset = Offset::ZERO;
                }
                let mut cx = LayoutChildren {
                    tree: self,
                    owner: widget.kind(),
                    children,
                };
                structural.layout(constraints, &mut cx)?
            }
            Widget::Builder(_) | Widget::Stateful(_) => {
                let child = children.first().copied().ok_or(Invariant::MissingChild {
                    kind: widget.kind().name(),
                })?;
                let size = self.layout(child, constraints)?;
                self.get_mut(child)?.offset = Offset::ZERO;
                size
            }
        };

        self.get_mut(id)?.size = size;
        Ok(size)
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
