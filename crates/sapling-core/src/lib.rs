#![doc = r"Core of the Sapling retained-mode UI engine: widget shapes, the element arena, reconciliation and the per-frame protocols built on it."]

pub mod context;
pub mod dispatch;
pub mod element;
pub mod error;
pub mod layout;
pub mod paint;
pub mod platform;
pub mod rebuild;
pub mod reconcile;
pub mod widget;

#[cfg(test)]
#[path = "tests/fixtures.rs"]
pub(crate) mod fixtures;

pub use context::BuildContext;
pub use dispatch::Dispatch;
pub use element::{Category, Element, ElementId, ElementTree};
pub use error::{Invariant, TreeError};
pub use layout::LayoutChildren;
pub use platform::Clock;
pub use rebuild::RenderedReport;
pub use widget::{
    AnyState, AnyWidget, BuilderWidget, State, StatefulWidget, StructuralWidget, Widget,
    WidgetKind,
};

pub use sapling_foundation::{EventContext, PointerEvent, PointerEventListener};
pub use sapling_ui_graphics::{EdgeInsets, Offset, Point, Size, Surface};
pub use sapling_ui_layout::Constraints;
