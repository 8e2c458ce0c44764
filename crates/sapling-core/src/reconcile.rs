//! Widget to element reconciliation.
//!
//! Children are matched purely by position: the widget at index `i` is
//! diffed against the element at index `i` of the prior child list. An
//! element is reused when its widget has the same category and concrete
//! kind as the incoming widget; otherwise the prior subtree is released
//! and a fresh element takes its place.

use std::mem;

use crate::context::BuildContext;
use crate::element::{ElementId, ElementKind, ElementTree};
use crate::error::{Invariant, TreeError};
use crate::widget::Widget;

impl ElementTree {
    /// Diffs `widget` against the `prior` element at one position under `parent`.
    ///
    /// Returns the element now occupying the position, or `None` when
    /// `widget` is `None` (the prior subtree is removed in that case).
    pub fn reconcile(
        &mut self,
        widget: Option<Widget>,
        prior: Option<ElementId>,
        parent: Option<ElementId>,
    ) -> Result<Option<ElementId>, TreeError> {
        let Some(widget) = widget else {
            if let Some(prior) = prior {
                log::trace!("position emptied, discarding {:?}", prior);
                self.remove_subtree(prior);
            }
            return Ok(None);
        };

        let id = self.reuse_or_create(&widget, prior, parent);
        match &widget {
            Widget::Builder(builder) => {
                let child = builder
                    .build(&BuildContext::new(self, id))
                    .map_err(|source| build_error(&widget, source))?;
                self.reconcile_single_child(id, child)?;
            }
            Widget::Stateful(_) => {
                let child = self.build_state(id, &widget)?;
                self.reconcile_single_child(id, child)?;
                if let ElementKind::Stateful { built, .. } = &mut self.get_mut(id)?.kind {
                    *built = true;
                }
            }
            Widget::Structural(structural) => {
                let old_children = match &mut self.get_mut(id)?.kind {
                    ElementKind::Structural { children, .. } => mem::take(children),
                    _ => Vec::new(),
                };
                let declared = structural.children();
                let mut children = Vec::with_capacity(declared.len());
                for (index, child) in declared.into_iter().enumerate() {
                    let prior_child = old_children.get(index).copied();
                    if let Some(child) = self.reconcile(Some(child), prior_child, Some(id))? {
                        children.push(child);
                    }
                }
                for surplus in old_children.iter().skip(children.len()) {
                    log::trace!("discarding surplus child {:?} of {:?}", surplus, id);
                    self.remove_subtree(*surplus);
                }
                if let ElementKind::Structural {
                    children: slot, ..
                } = &mut self.get_mut(id)?.kind
                {
                    *slot = children;
                }
            }
        }
        Ok(Some(id))
    }

    fn reuse_or_create(
        &mut self,
        widget: &Widget,
        prior: Option<ElementId>,
        parent: Option<ElementId>,
    ) -> ElementId {
        if let Some(prior) = prior {
            if let Some(element) = self.elements.get_mut(prior) {
                if element.widget.can_update(widget) {
                    log::trace!("reusing {:?} for {}", prior, widget.kind().name());
                    element.widget = widget.clone();
                    element.parent = parent;
                    return prior;
                }
                log::debug!(
                    "kind changed at {:?}: {} -> {}",
                    prior,
                    element.widget.kind().name(),
                    widget.kind().name()
                );
            }
            self.remove_subtree(prior);
        }
        let id = self.insert(widget.clone(), parent);
        log::debug!("created {:?} for {}", id, widget.kind().name());
        id
    }

    /// Lends the element's state to its own build and puts it back afterwards,
    /// whether or not the build succeeded.
    fn build_state(&mut self, id: ElementId, widget: &Widget) -> Result<Widget, TreeError> {
        let mut state = match &mut self.get_mut(id)?.kind {
            ElementKind::Stateful { state, .. } => state
                .take()
                .ok_or(Invariant::StateInUse { element: id })?,
            _ => return Err(TreeError::NotStateful { id }),
        };
        let built = state.build(&BuildContext::new(self, id));
        if let ElementKind::Stateful { state: slot, .. } = &mut self.get_mut(id)?.kind {
            *slot = Some(state);
        }
        built.map_err(|source| build_error(widget, source))
    }

    fn reconcile_single_child(&mut self, id: ElementId, child: Widget) -> Result<(), TreeError> {
        let prior = self.single_child(id);
        let child = self.reconcile(Some(child), prior, Some(id))?;
        self.set_single_child(id, child);
        Ok(())
    }
}

fn build_error(widget: &Widget, source: anyhow::Error) -> TreeError {
    let kind = widget.kind().name();
    log::debug!("build of {} failed: {:#}", kind, source);
    TreeError::Build { kind, source }
}

#[cfg(test)]
#[path = "tests/reconcile_tests.rs"]
mod tests;
