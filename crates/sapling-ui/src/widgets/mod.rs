//! UI Widget components

pub mod app;
pub mod box_widget;
pub mod column;
pub mod label;
pub mod padding;
pub mod scroll_view;
pub mod window;

pub use app::*;
pub use box_widget::*;
pub use column::*;
pub use label::*;
pub use padding::*;
pub use scroll_view::*;
pub use window::*;
