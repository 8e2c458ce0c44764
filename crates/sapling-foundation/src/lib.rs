//! Foundation pieces for Sapling: the input vocabulary shared by platforms,
//! the frame loop and widget state.

pub mod input;

// Re-export commonly used items
pub use input::*;

pub mod prelude {
    pub use crate::input::{
        EventContext, EventSource, Key, PlatformEvent, PointerEvent, PointerEventKind,
        PointerEventListener, ScrollDirection,
    };
}
