use super::PointerEvent;

/// Context passed to a [`PointerEventListener`].
///
/// Mutating state through [`EventContext::set_state`] is what schedules the
/// listening element for a rebuild on the next frame.
#[derive(Debug, Default)]
pub struct EventContext {
    state_changed: bool,
}

impl EventContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `update` and marks the owning element as needing a rebuild.
    pub fn set_state<R>(&mut self, update: impl FnOnce() -> R) -> R {
        let result = update();
        self.state_changed = true;
        result
    }

    pub fn state_changed(&self) -> bool {
        self.state_changed
    }
}

/// Capability implemented by widget state that reacts to pointer events.
pub trait PointerEventListener {
    /// Returns `true` when the event is consumed and bubbling should stop.
    fn handle_event(&mut self, event: &PointerEvent, cx: &mut EventContext) -> bool;
}
