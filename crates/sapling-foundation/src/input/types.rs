use sapling_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEventKind {
    /// Wheel scroll; `magnitude` is always positive, the sign lives in `direction`.
    Scroll {
        direction: ScrollDirection,
        magnitude: f32,
    },
}

/// Abstract pointer event fed to hit-testing and bubbling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Pointer position in window coordinates at the time of the event.
    pub position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self { kind, position }
    }

    pub fn scroll(direction: ScrollDirection, magnitude: f32, position: Point) -> Self {
        Self::new(
            PointerEventKind::Scroll {
                direction,
                magnitude,
            },
            position,
        )
    }

    /// Translates a vertical wheel delta into a scroll event.
    ///
    /// Positive deltas scroll up, negative deltas scroll down, and a zero
    /// delta produces no event.
    pub fn from_wheel(delta_y: f32, position: Point) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::scroll(ScrollDirection::Up, delta_y, position))
        } else if delta_y < 0.0 {
            Some(Self::scroll(ScrollDirection::Down, -delta_y, position))
        } else {
            None
        }
    }

    /// Signed scroll amount along y, positive when scrolling down.
    pub fn scroll_delta(&self) -> Option<f32> {
        match self.kind {
            PointerEventKind::Scroll {
                direction: ScrollDirection::Down,
                magnitude,
            } => Some(magnitude),
            PointerEventKind::Scroll {
                direction: ScrollDirection::Up,
                magnitude,
            } => Some(-magnitude),
        }
    }
}
