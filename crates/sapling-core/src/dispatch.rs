//! Hit-testing and upward event bubbling.

use sapling_foundation::{EventContext, PointerEvent};
use sapling_ui_graphics::Point;

use crate::element::{ElementId, ElementKind, ElementTree};

/// Outcome of delivering a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A listener on this element consumed the event.
    Handled(ElementId),
    /// Bubbling reached the root without a listener consuming the event.
    Dropped,
    /// The event position lies outside the tree.
    Missed,
}

impl ElementTree {
    /// Deepest element under `point`, given in the coordinate space of
    /// `id`'s parent.
    ///
    /// Bounds are half-open. Children are probed in order and the first hit
    /// wins; a subtree whose root misses is never entered.
    pub fn hit_test(&self, id: ElementId, point: Point) -> Option<ElementId> {
        let element = self.get(id)?;
        let local = point.translate_into(element.offset());
        if !element.size().contains(local) {
            return None;
        }
        element
            .children()
            .iter()
            .find_map(|child| self.hit_test(*child, local))
            .or(Some(id))
    }

    /// Offers `event` to `id` and then to each ancestor until a listener
    /// reports it handled.
    pub fn bubble_up(&mut self, id: ElementId, event: &PointerEvent) -> Dispatch {
        let mut current = Some(id);
        while let Some(id) = current {
            let Some(element) = self.elements.get_mut(id) else {
                break;
            };
            if let ElementKind::Stateful {
                state: Some(state),
                built,
                ..
            } = &mut element.kind
            {
                if let Some(listener) = state.pointer_listener() {
                    let mut cx = EventContext::new();
                    let handled = listener.handle_event(event, &mut cx);
                    if cx.state_changed() {
                        *built = false;
                    }
                    if handled {
                        log::trace!("{:?} handled {:?}", id, event.kind);
                        return Dispatch::Handled(id);
                    }
                }
            }
            current = element.parent;
        }
        log::trace!("{:?} dropped", event.kind);
        Dispatch::Dropped
    }

    /// Hit-tests `event.position` from the root and bubbles from the hit.
    pub fn dispatch_pointer(&mut self, event: &PointerEvent) -> Dispatch {
        let hit = self.root.and_then(|root| self.hit_test(root, event.position));
        match hit {
            Some(target) => self.bubble_up(target, event),
            None => Dispatch::Missed,
        }
    }
}

#[cfg(test)]
#[path = "tests/dispatch_tests.rs"]
mod tests;
