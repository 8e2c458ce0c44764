//! Vertically scrollable viewport driven by wheel events.

use sapling_core::{
    BuildContext, LayoutChildren, State, StatefulWidget, StructuralWidget, TreeError, Widget,
};
use sapling_foundation::{EventContext, PointerEvent, PointerEventListener};
use sapling_ui_graphics::{Offset, Size};
use sapling_ui_layout::{Constraints, UNBOUNDED};

/// Distance scrolled per wheel line.
pub const DEFAULT_SCROLL_STEP: f32 = 20.0;

pub struct ScrollView {
    pub child: Widget,
    pub step: f32,
}

impl ScrollView {
    pub fn new(child: impl Into<Widget>) -> Self {
        Self {
            child: child.into(),
            step: DEFAULT_SCROLL_STEP,
        }
    }

    pub fn step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }
}

impl StatefulWidget for ScrollView {
    fn create_state(&self) -> Box<dyn State> {
        Box::new(ScrollState {
            offset: 0.0,
            step: self.step,
        })
    }

    fn declared_children(&self) -> Vec<Widget> {
        vec![self.child.clone()]
    }
}

impl From<ScrollView> for Widget {
    fn from(scroll: ScrollView) -> Self {
        Widget::stateful(scroll)
    }
}

#[derive(Debug)]
pub struct ScrollState {
    offset: f32,
    step: f32,
}

impl ScrollState {
    /// Requested scroll distance from the top; the viewport clamps it to
    /// the content actually available.
    pub fn offset(&self) -> f32 {
        self.offset
    }
}

impl State for ScrollState {
    fn build(&mut self, cx: &BuildContext<'_>) -> anyhow::Result<Widget> {
        let scroll = cx
            .widget_as::<ScrollView>()
            .ok_or_else(|| anyhow::anyhow!("scroll state outside a scroll view"))?;
        self.step = scroll.step;
        Ok(Widget::structural(Viewport {
            offset: self.offset,
            child: scroll.child.clone(),
        }))
    }

    fn pointer_listener(&mut self) -> Option<&mut dyn PointerEventListener> {
        Some(self)
    }
}

impl PointerEventListener for ScrollState {
    fn handle_event(&mut self, event: &PointerEvent, cx: &mut EventContext) -> bool {
        let Some(delta) = event.scroll_delta() else {
            return false;
        };
        let target = (self.offset + delta * self.step).max(0.0);
        if target != self.offset {
            log::trace!("scroll offset {} -> {}", self.offset, target);
            cx.set_state(|| self.offset = target);
        }
        true
    }
}

/// Lays its child out with unbounded height and shifts it up by the offset.
pub struct Viewport {
    pub offset: f32,
    pub child: Widget,
}

impl StructuralWidget for Viewport {
    fn children(&self) -> Vec<Widget> {
        vec![self.child.clone()]
    }

    fn layout(
        &self,
        constraints: Constraints,
        children: &mut LayoutChildren<'_>,
    ) -> Result<Size, TreeError> {
        children.require_child()?;
        let content = children.layout(
            0,
            Constraints {
                min_width: constraints.min_width,
                max_width: constraints.max_width,
                min_height: 0.0,
                max_height: UNBOUNDED,
            },
        )?;
        let size = constraints.constrain(content);
        let max_offset = (content.height - size.height).max(0.0);
        children.place(0, Offset::new(0.0, -self.offset.min(max_offset)))?;
        Ok(size)
    }
}
