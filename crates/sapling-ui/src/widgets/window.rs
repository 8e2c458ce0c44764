//! Stateful window root.

use sapling_core::{BuildContext, State, StatefulWidget, Widget};
use sapling_ui_graphics::Size;
use sapling_ui_layout::Constraints;

use super::ConstrainedBox;

/// Root of every shell-driven tree: lays its child out at the window size.
pub struct Window {
    pub initial_size: Size,
    pub child: Widget,
}

impl Window {
    pub fn new(initial_size: Size, child: impl Into<Widget>) -> Self {
        Self {
            initial_size,
            child: child.into(),
        }
    }
}

impl StatefulWidget for Window {
    fn create_state(&self) -> Box<dyn State> {
        Box::new(WindowState {
            size: self.initial_size,
        })
    }

    fn declared_children(&self) -> Vec<Widget> {
        vec![self.child.clone()]
    }
}

impl From<Window> for Widget {
    fn from(window: Window) -> Self {
        Widget::stateful(window)
    }
}

/// Current window size, updated on resize.
#[derive(Debug)]
pub struct WindowState {
    pub size: Size,
}

impl State for WindowState {
    fn build(&mut self, cx: &BuildContext<'_>) -> anyhow::Result<Widget> {
        let window = cx
            .widget_as::<Window>()
            .ok_or_else(|| anyhow::anyhow!("window state outside a window"))?;
        Ok(ConstrainedBox::new(Constraints::tight(self.size), Some(window.child.clone())).into())
    }
}
