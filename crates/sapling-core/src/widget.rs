//! Widget descriptors and the three capability shapes the reconciler understands.

use std::any::{Any, TypeId};
use std::fmt;
use std::rc::Rc;

use sapling_foundation::PointerEventListener;
use sapling_ui_graphics::{Offset, Size, Surface};
use sapling_ui_layout::Constraints;

use crate::context::BuildContext;
use crate::element::Category;
use crate::error::TreeError;
use crate::layout::LayoutChildren;

/// Concrete kind identity of a widget.
///
/// Two widgets share a kind iff they are the same Rust type; the name is
/// only carried for diagnostics.
#[derive(Clone, Copy)]
pub struct WidgetKind {
    id: TypeId,
    name: &'static str,
}

impl WidgetKind {
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for WidgetKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for WidgetKind {}

impl fmt::Debug for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Type-erasure helper implemented for every widget type.
pub trait AnyWidget: Any {
    fn widget_any(&self) -> &dyn Any;
    fn kind(&self) -> WidgetKind;
}

impl<T: Any> AnyWidget for T {
    fn widget_any(&self) -> &dyn Any {
        self
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::of::<T>()
    }
}

/// Produces exactly one child widget on demand and keeps no state.
pub trait BuilderWidget: AnyWidget {
    fn build(&self, cx: &BuildContext<'_>) -> anyhow::Result<Widget>;

    /// Child widgets already present in this descriptor's configuration.
    ///
    /// Only used by [`Widget::find`]; the reconciler always calls `build`.
    fn declared_children(&self) -> Vec<Widget> {
        Vec::new()
    }
}

/// Owns a [`State`] that survives across frames and builds its child.
pub trait StatefulWidget: AnyWidget {
    fn create_state(&self) -> Box<dyn State>;

    /// See [`BuilderWidget::declared_children`].
    fn declared_children(&self) -> Vec<Widget> {
        Vec::new()
    }
}

/// Owns its children directly and lays them out and renders itself.
pub trait StructuralWidget: AnyWidget {
    /// Child descriptors, matched by index against the element's children.
    fn children(&self) -> Vec<Widget> {
        Vec::new()
    }

    /// Lays out the children and returns this widget's size.
    ///
    /// Implementations place every child they lay out through
    /// [`LayoutChildren::place`]; the returned size must satisfy `constraints`.
    fn layout(
        &self,
        constraints: Constraints,
        children: &mut LayoutChildren<'_>,
    ) -> Result<Size, TreeError>;

    /// Draws this widget. `origin` already includes every ancestor offset.
    fn render(&self, _origin: Offset, _size: Size, _surface: &mut dyn Surface) {}
}

/// Type-erasure helper implemented for every state type.
pub trait AnyState: Any {
    fn state_any(&self) -> &dyn Any;
    fn state_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AnyState for T {
    fn state_any(&self) -> &dyn Any {
        self
    }

    fn state_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Mutable data owned by a stateful element for its whole lifetime.
pub trait State: AnyState {
    /// Builds the child widget from the current state and widget configuration.
    ///
    /// Called on every reconciliation of the owning element, never skipped.
    fn build(&mut self, cx: &BuildContext<'_>) -> anyhow::Result<Widget>;

    /// Exposes the pointer listener capability, if this state has one.
    fn pointer_listener(&mut self) -> Option<&mut dyn PointerEventListener> {
        None
    }
}

impl dyn State {
    pub fn downcast_ref<S: State>(&self) -> Option<&S> {
        self.state_any().downcast_ref::<S>()
    }

    pub fn downcast_mut<S: State>(&mut self) -> Option<&mut S> {
        self.state_any_mut().downcast_mut::<S>()
    }
}

/// Immutable per-frame description of desired UI configuration.
///
/// Cloning a widget clones the handle, not the configuration.
#[derive(Clone)]
pub enum Widget {
    Builder(Rc<dyn BuilderWidget>),
    Stateful(Rc<dyn StatefulWidget>),
    Structural(Rc<dyn StructuralWidget>),
}

impl Widget {
    pub fn builder(widget: impl BuilderWidget) -> Self {
        Widget::Builder(Rc::new(widget))
    }

    pub fn stateful(widget: impl StatefulWidget) -> Self {
        Widget::Stateful(Rc::new(widget))
    }

    pub fn structural(widget: impl StructuralWidget) -> Self {
        Widget::Structural(Rc::new(widget))
    }

    pub fn kind(&self) -> WidgetKind {
        match self {
            Widget::Builder(widget) => AnyWidget::kind(&**widget),
            Widget::Stateful(widget) => AnyWidget::kind(&**widget),
            Widget::Structural(widget) => AnyWidget::kind(&**widget),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Widget::Builder(_) => Category::Builder,
            Widget::Stateful(_) => Category::Stateful,
            Widget::Structural(_) => Category::Structural,
        }
    }

    /// Whether an element built for `self` may be reused for `other`.
    pub fn can_update(&self, other: &Widget) -> bool {
        self.category() == other.category() && self.kind() == other.kind()
    }

    pub fn downcast_ref<W: Any>(&self) -> Option<&W> {
        let any = match self {
            Widget::Builder(widget) => AnyWidget::widget_any(&**widget),
            Widget::Stateful(widget) => AnyWidget::widget_any(&**widget),
            Widget::Structural(widget) => AnyWidget::widget_any(&**widget),
        };
        any.downcast_ref::<W>()
    }

    /// Child descriptors visible without building anything.
    pub fn declared_children(&self) -> Vec<Widget> {
        match self {
            Widget::Builder(widget) => widget.declared_children(),
            Widget::Stateful(widget) => widget.declared_children(),
            Widget::Structural(widget) => widget.children(),
        }
    }

    /// Depth-first search of the declared widget tree for a widget of type `W`.
    pub fn find<W: Any>(&self) -> Option<Widget> {
        if self.kind().is::<W>() {
            return Some(self.clone());
        }
        self.declared_children()
            .iter()
            .find_map(|child| child.find::<W>())
    }
}

impl fmt::Debug for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Widget")
            .field(&self.category())
            .field(&self.kind())
            .finish()
    }
}
