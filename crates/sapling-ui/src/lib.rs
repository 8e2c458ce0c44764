//! Widgets for Sapling applications.

pub mod widgets;

pub use widgets::*;

pub mod prelude {
    pub use crate::widgets::{
        App, Column, ColoredBox, ConstrainedBox, Label, Padding, ScrollView, SizedBox, Window,
        WindowState,
    };
    pub use sapling_core::{BuildContext, ElementTree, Widget};
    pub use sapling_ui_graphics::prelude::*;
}

#[cfg(test)]
#[path = "tests/widgets_tests.rs"]
mod tests;
