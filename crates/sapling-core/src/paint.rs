use sapling_ui_graphics::{Offset, Surface};

use crate::element::{ElementId, ElementKind, ElementTree};
use crate::widget::Widget;

impl ElementTree {
    /// Renders the tree in tree order, parents before children.
    ///
    /// Structural widgets receive their origin with every ancestor offset
    /// accumulated. Each stateful element visited is marked rendered.
    pub fn paint(&mut self, surface: &mut dyn Surface) {
        if let Some(root) = self.root {
            self.paint_element(root, Offset::ZERO, surface);
        }
    }

    fn paint_element(&mut self, id: ElementId, parent_origin: Offset, surface: &mut dyn Surface) {
        let Some(element) = self.elements.get_mut(id) else {
            return;
        };
        let origin = parent_origin + element.offset;
        match &mut element.kind {
            ElementKind::Stateful { rendered, .. } => *rendered = true,
            ElementKind::Builder { .. } | ElementKind::Structural { .. } => {}
        }
        if let Widget::Structural(structural) = &element.widget {
            structural.render(origin, element.size, surface);
        }
        let children = element.children().to_vec();
        for child in children {
            self.paint_element(child, origin, surface);
        }
    }
}

#[cfg(test)]
#[path = "tests/paint_tests.rs"]
mod tests;
