use std::collections::VecDeque;

use sapling_foundation::{EventSource, PlatformEvent};
use sapling_ui_graphics::Point;

/// Event source replaying a script one frame at a time.
///
/// Each frame's batch is drained completely before `poll_event` reports
/// `None`; the next drain then starts on the following batch. Once the
/// script is exhausted every drain is empty.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    frames: VecDeque<Vec<PlatformEvent>>,
    current: VecDeque<PlatformEvent>,
    draining: bool,
    pointer: Point,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the events delivered during one future frame.
    pub fn frame(mut self, events: impl IntoIterator<Item = PlatformEvent>) -> Self {
        self.frames.push_back(events.into_iter().collect());
        self
    }

    /// Appends a frame without events.
    pub fn idle(self) -> Self {
        self.frame(std::iter::empty())
    }

    pub fn push_frame(&mut self, events: impl IntoIterator<Item = PlatformEvent>) {
        self.frames.push_back(events.into_iter().collect());
    }

    /// Frames not yet delivered.
    pub fn remaining_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn set_pointer(&mut self, position: Point) {
        self.pointer = position;
    }
}

impl EventSource for ScriptedEvents {
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        if !self.draining {
            self.current = self.frames.pop_front().unwrap_or_default().into();
            self.draining = true;
        }
        match self.current.pop_front() {
            Some(PlatformEvent::PointerMoved(position)) => {
                self.pointer = position;
                Some(PlatformEvent::PointerMoved(position))
            }
            Some(event) => Some(event),
            None => {
                self.draining = false;
                None
            }
        }
    }

    fn pointer_position(&self) -> Point {
        self.pointer
    }
}
