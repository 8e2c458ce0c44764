//! Selective rebuild of dirty stateful elements and the bottom-up
//! `rendered` aggregation that follows it every frame.

use hashbrown::HashSet;

use crate::element::{ElementId, ElementKind, ElementTree};
use crate::error::{Invariant, TreeError};

/// Result of one [`ElementTree::propagate_rendered`] pass.
///
/// Lists every element whose aggregate `rendered` value was `false`; it
/// describes a single frame and is never merged into the next one.
#[derive(Debug, Default, Clone)]
pub struct RenderedReport {
    stale: HashSet<ElementId>,
}

impl RenderedReport {
    /// Aggregate value for `id`: `true` if neither it nor a descendant is stale.
    pub fn is_rendered(&self, id: ElementId) -> bool {
        !self.stale.contains(&id)
    }

    /// `true` when nothing in the tree needed a redraw.
    pub fn is_clean(&self) -> bool {
        self.stale.is_empty()
    }

    pub fn stale_count(&self) -> usize {
        self.stale.len()
    }

    pub fn stale(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.stale.iter().copied()
    }
}

impl ElementTree {
    /// Rebuilds every dirty stateful element in place, top-down.
    ///
    /// A dirty element's subtree is resynchronised by its own rebuild, so
    /// the walk does not descend below it. Returns the number of elements
    /// rebuilt.
    pub fn rebuild_dirty(&mut self) -> Result<usize, TreeError> {
        let Some(root) = self.root else {
            return Ok(0);
        };
        let mut rebuilt = 0;
        let mut pending = vec![root];
        while let Some(id) = pending.pop() {
            let element = self.get_mut(id)?;
            if !element.is_dirty() {
                // Reverse so children are visited in tree order.
                pending.extend(element.children().iter().rev().copied());
                continue;
            }
            let widget = element.widget.clone();
            let parent = element.parent;
            let result = self.reconcile(Some(widget), Some(id), parent)?;
            if result != Some(id) {
                return Err(Invariant::RebuildChangedIdentity { element: id }.into());
            }
            if let ElementKind::Stateful { rendered, .. } = &mut self.get_mut(id)?.kind {
                *rendered = false;
            }
            rebuilt += 1;
        }
        if rebuilt > 0 {
            log::debug!("rebuilt {} dirty element(s)", rebuilt);
        }
        Ok(rebuilt)
    }

    /// Recomputes `rendered = self_rendered && all(children rendered)` for
    /// the whole tree and stores the aggregate on structural elements.
    pub fn propagate_rendered(&mut self) -> RenderedReport {
        let mut report = RenderedReport::default();
        if let Some(root) = self.root {
            self.aggregate_rendered(root, &mut report);
        }
        report
    }

    fn aggregate_rendered(&mut self, id: ElementId, report: &mut RenderedReport) -> bool {
        let Some(element) = self.elements.get(id) else {
            return true;
        };
        let mut rendered = match element.kind {
            ElementKind::Stateful { rendered, .. } => rendered,
            _ => true,
        };
        let children = element.children().to_vec();
        for child in children {
            // Every child is visited so the whole report stays complete.
            rendered &= self.aggregate_rendered(child, report);
        }
        if let Some(element) = self.elements.get_mut(id) {
            if let ElementKind::Structural { rendered: slot, .. } = &mut element.kind {
                *slot = rendered;
            }
        }
        if !rendered {
            report.stale.insert(id);
        }
        rendered
    }
}

#[cfg(test)]
#[path = "tests/rebuild_tests.rs"]
mod tests;
