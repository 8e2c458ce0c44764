//! Persistent element arena mirroring the widget tree.

use std::fmt::{self, Write as _};

use slotmap::{new_key_type, SlotMap};

use sapling_ui_graphics::{Offset, Size};

use crate::error::TreeError;
use crate::widget::{State, Widget};

new_key_type! {
    /// Generational handle to an element. A handle to a removed element
    /// never resolves to a different element allocated later.
    pub struct ElementId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Builder,
    Stateful,
    Structural,
}

pub(crate) enum ElementKind {
    Builder {
        child: Option<ElementId>,
    },
    Stateful {
        /// `None` only while the state is lent out to its own build.
        state: Option<Box<dyn State>>,
        built: bool,
        rendered: bool,
        child: Option<ElementId>,
    },
    Structural {
        children: Vec<ElementId>,
        rendered: bool,
    },
}

/// A node of the element tree.
pub struct Element {
    pub(crate) widget: Widget,
    pub(crate) parent: Option<ElementId>,
    pub(crate) kind: ElementKind,
    pub(crate) size: Size,
    pub(crate) offset: Offset,
}

impl Element {
    fn new(widget: Widget, parent: Option<ElementId>) -> Self {
        let kind = match &widget {
            Widget::Builder(_) => ElementKind::Builder { child: None },
            Widget::Stateful(stateful) => ElementKind::Stateful {
                state: Some(stateful.create_state()),
                built: false,
                rendered: false,
                child: None,
            },
            Widget::Structural(_) => ElementKind::Structural {
                children: Vec::new(),
                rendered: false,
            },
        };
        Self {
            widget,
            parent,
            kind,
            size: Size::ZERO,
            offset: Offset::ZERO,
        }
    }

    /// The widget this element currently represents.
    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn category(&self) -> Category {
        match self.kind {
            ElementKind::Builder { .. } => Category::Builder,
            ElementKind::Stateful { .. } => Category::Stateful,
            ElementKind::Structural { .. } => Category::Structural,
        }
    }

    pub fn children(&self) -> &[ElementId] {
        match &self.kind {
            ElementKind::Builder { child } | ElementKind::Stateful { child, .. } => match child {
                Some(child) => std::slice::from_ref(child),
                None => &[],
            },
            ElementKind::Structural { children, .. } => children,
        }
    }

    /// Size computed by the last layout pass.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Offset relative to the parent's origin, set by the last layout pass.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// `true` for a stateful element whose state changed since its last build.
    pub fn is_dirty(&self) -> bool {
        matches!(self.kind, ElementKind::Stateful { built: false, .. })
    }

    /// The stored `rendered` flag: the stateful element's own output
    /// freshness, or the structural element's last aggregate. Builders
    /// carry no flag.
    pub fn rendered_flag(&self) -> Option<bool> {
        match self.kind {
            ElementKind::Builder { .. } => None,
            ElementKind::Stateful { rendered, .. } | ElementKind::Structural { rendered, .. } => {
                Some(rendered)
            }
        }
    }

    pub fn state(&self) -> Option<&dyn State> {
        match &self.kind {
            ElementKind::Stateful { state, .. } => state.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("widget", &self.widget)
            .field("parent", &self.parent)
            .field("children", &self.children())
            .field("size", &self.size)
            .field("offset", &self.offset)
            .finish()
    }
}

/// Arena owning every element. Children are owned through their parent's
/// child list; the parent link is a plain id used only for upward walks.
#[derive(Default)]
pub struct ElementTree {
    pub(crate) elements: SlotMap<ElementId, Element>,
    pub(crate) root: Option<ElementId>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<ElementId> {
        self.root
    }

    /// Reconciles `widget` against the current root and installs the result.
    pub fn mount(&mut self, widget: Widget) -> Result<ElementId, TreeError> {
        let root = self
            .reconcile(Some(widget), self.root, None)?
            .ok_or(TreeError::EmptyTree)?;
        self.root = Some(root);
        Ok(root)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements.get(id).and_then(|element| element.parent)
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.elements
            .get(id)
            .map(Element::children)
            .unwrap_or(&[])
    }

    /// Walks parent links starting with `id` itself and ending at the root.
    pub fn ancestors(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::successors(Some(id).filter(|id| self.contains(*id)), move |id| {
            self.parent(*id)
        })
    }

    /// Returns the state of a stateful element if it has type `S`.
    pub fn state<S: State>(&self, id: ElementId) -> Option<&S> {
        self.elements.get(id)?.state()?.downcast_ref::<S>()
    }

    /// Mutates the state of a stateful element and marks it for rebuild.
    ///
    /// Flipping `built` to false is the only effect on the tree; the rebuild
    /// itself happens during the next [`ElementTree::rebuild_dirty`].
    pub fn set_state<S: State, R>(
        &mut self,
        id: ElementId,
        update: impl FnOnce(&mut S) -> R,
    ) -> Result<R, TreeError> {
        let element = self.elements.get_mut(id).ok_or(TreeError::Missing { id })?;
        match &mut element.kind {
            ElementKind::Stateful {
                state: Some(state),
                built,
                ..
            } => {
                let state = (**state)
                    .downcast_mut::<S>()
                    .ok_or(TreeError::StateTypeMismatch {
                        id,
                        expected: std::any::type_name::<S>(),
                    })?;
                let result = update(state);
                *built = false;
                Ok(result)
            }
            _ => Err(TreeError::NotStateful { id }),
        }
    }

    pub(crate) fn get_mut(&mut self, id: ElementId) -> Result<&mut Element, TreeError> {
        self.elements.get_mut(id).ok_or(TreeError::Missing { id })
    }

    pub(crate) fn insert(&mut self, widget: Widget, parent: Option<ElementId>) -> ElementId {
        self.elements.insert(Element::new(widget, parent))
    }

    pub(crate) fn single_child(&self, id: ElementId) -> Option<ElementId> {
        self.children(id).first().copied()
    }

    pub(crate) fn set_single_child(&mut self, id: ElementId, new_child: Option<ElementId>) {
        if let Some(element) = self.elements.get_mut(id) {
            match &mut element.kind {
                ElementKind::Builder { child } | ElementKind::Stateful { child, .. } => {
                    *child = new_child;
                }
                ElementKind::Structural { children, .. } => {
                    children.clear();
                    children.extend(new_child);
                }
            }
        }
    }

    /// Removes `id` and its whole subtree, dropping any owned state.
    pub(crate) fn remove_subtree(&mut self, id: ElementId) {
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(element) = self.elements.remove(next) {
                log::trace!("discarding element {:?} ({})", next, element.widget.kind().name());
                pending.extend_from_slice(element.children());
            }
        }
        if self.root == Some(id) {
            self.root = None;
        }
    }

    /// Indented listing of kind, size and offset for every element under `root`.
    pub fn dump(&self, root: Option<ElementId>) -> String {
        let mut output = String::new();
        match root {
            Some(root) => self.dump_element(&mut output, root, 0),
            None => output.push_str("(no root)\n"),
        }
        output
    }

    fn dump_element(&self, output: &mut String, id: ElementId, depth: usize) {
        let indent = "  ".repeat(depth);
        match self.elements.get(id) {
            Some(element) => {
                let _ = writeln!(
                    output,
                    "{indent}{:?} {} {}x{} @ ({}, {})",
                    element.category(),
                    element.widget.kind().name(),
                    element.size.width,
                    element.size.height,
                    element.offset.dx,
                    element.offset.dy,
                );
                for child in element.children() {
                    self.dump_element(output, *child, depth + 1);
                }
            }
            None => {
                let _ = writeln!(output, "{indent}{id:?} (missing)");
            }
        }
    }
}

impl fmt::Debug for ElementTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementTree")
            .field("root", &self.root)
            .field("len", &self.elements.len())
            .finish()
    }
}
