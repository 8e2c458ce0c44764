use sapling_ui_graphics::Point;

/// Keys the frame loop distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Character(char),
    Escape,
    /// Any other key, identified by the platform's key code.
    Other(u32),
}

/// Raw event handed over by a platform each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlatformEvent {
    Quit,
    KeyDown(Key),
    /// Vertical wheel movement in lines; positive is away from the user.
    Wheel { delta_y: f32 },
    Resized { width: f32, height: f32 },
    PointerMoved(Point),
}

/// Non-blocking source of platform events.
pub trait EventSource {
    /// Returns the next pending event, or `None` once the queue is drained.
    fn poll_event(&mut self) -> Option<PlatformEvent>;

    /// Current pointer position in window coordinates.
    fn pointer_position(&self) -> Point;
}
