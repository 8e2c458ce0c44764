//! Application root descriptor.

use sapling_core::{BuildContext, BuilderWidget, Widget};

/// Top-level widget naming the application.
///
/// It builds straight into its child; the shell looks it up in the root
/// widget tree to title the window.
pub struct App {
    pub title: String,
    pub child: Widget,
}

impl App {
    pub fn new(title: impl Into<String>, child: impl Into<Widget>) -> Self {
        Self {
            title: title.into(),
            child: child.into(),
        }
    }
}

impl BuilderWidget for App {
    fn build(&self, _cx: &BuildContext<'_>) -> anyhow::Result<Widget> {
        Ok(self.child.clone())
    }

    fn declared_children(&self) -> Vec<Widget> {
        vec![self.child.clone()]
    }
}

impl From<App> for Widget {
    fn from(app: App) -> Self {
        Widget::builder(app)
    }
}
