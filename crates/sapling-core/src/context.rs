use std::any::Any;

use crate::element::{Element, ElementId, ElementTree};
use crate::widget::{State, Widget};

/// Handle to the element being built, passed to every `build` call.
///
/// The tree is borrowed read-only: builds describe children, they never
/// mutate other elements.
#[derive(Clone, Copy)]
pub struct BuildContext<'a> {
    tree: &'a ElementTree,
    element: ElementId,
}

impl<'a> BuildContext<'a> {
    pub(crate) fn new(tree: &'a ElementTree, element: ElementId) -> Self {
        Self { tree, element }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn tree(&self) -> &'a ElementTree {
        self.tree
    }

    /// The widget currently stored on the element being built.
    pub fn widget(&self) -> Option<&'a Widget> {
        self.tree.get(self.element).map(Element::widget)
    }

    /// The current widget's configuration as its concrete type.
    pub fn widget_as<W: Any>(&self) -> Option<&'a W> {
        self.widget()?.downcast_ref::<W>()
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.tree.parent(self.element)
    }

    /// Nearest strict ancestor whose widget has type `W`.
    pub fn ancestor_widget<W: Any>(&self) -> Option<&'a W> {
        self.tree
            .ancestors(self.element)
            .skip(1)
            .find_map(|id| self.tree.get(id)?.widget().downcast_ref::<W>())
    }

    /// Nearest strict ancestor owning a state of type `S`.
    ///
    /// An ancestor whose state is currently lent to its own build is skipped.
    pub fn ancestor_state<S: State>(&self) -> Option<&'a S> {
        self.tree
            .ancestors(self.element)
            .skip(1)
            .find_map(|id| self.tree.state::<S>(id))
    }
}

impl std::fmt::Debug for BuildContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildContext")
            .field("element", &self.element)
            .finish()
    }
}
