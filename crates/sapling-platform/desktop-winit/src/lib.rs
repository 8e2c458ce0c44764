//! Translates winit window events into Sapling platform events.

use std::collections::VecDeque;

use sapling_foundation::{EventSource, Key, PlatformEvent};
use sapling_ui_graphics::Point;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, KeyboardInput, MouseScrollDelta, VirtualKeyCode, WindowEvent};

/// Pixels of precise scrolling treated as one wheel line.
pub const PIXELS_PER_LINE: f64 = 20.0;

const LETTERS: [(VirtualKeyCode, char); 26] = [
    (VirtualKeyCode::A, 'a'),
    (VirtualKeyCode::B, 'b'),
    (VirtualKeyCode::C, 'c'),
    (VirtualKeyCode::D, 'd'),
    (VirtualKeyCode::E, 'e'),
    (VirtualKeyCode::F, 'f'),
    (VirtualKeyCode::G, 'g'),
    (VirtualKeyCode::H, 'h'),
    (VirtualKeyCode::I, 'i'),
    (VirtualKeyCode::J, 'j'),
    (VirtualKeyCode::K, 'k'),
    (VirtualKeyCode::L, 'l'),
    (VirtualKeyCode::M, 'm'),
    (VirtualKeyCode::N, 'n'),
    (VirtualKeyCode::O, 'o'),
    (VirtualKeyCode::P, 'p'),
    (VirtualKeyCode::Q, 'q'),
    (VirtualKeyCode::R, 'r'),
    (VirtualKeyCode::S, 's'),
    (VirtualKeyCode::T, 't'),
    (VirtualKeyCode::U, 'u'),
    (VirtualKeyCode::V, 'v'),
    (VirtualKeyCode::W, 'w'),
    (VirtualKeyCode::X, 'x'),
    (VirtualKeyCode::Y, 'y'),
    (VirtualKeyCode::Z, 'z'),
];

/// Queue of translated events plus the last known pointer position.
///
/// Feed it every `WindowEvent` with [`DesktopWinitPlatform::handle_window_event`]
/// and hand it to the app shell as its [`EventSource`] once per frame.
pub struct DesktopWinitPlatform {
    scale_factor: f64,
    pointer: Point,
    pending: VecDeque<PlatformEvent>,
}

impl DesktopWinitPlatform {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            pointer: Point::ZERO,
            pending: VecDeque::new(),
        }
    }

    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Translates and enqueues `event`; events with no counterpart are ignored.
    pub fn handle_window_event(&mut self, event: &WindowEvent<'_>) {
        if let Some(event) = self.translate(event) {
            self.pending.push_back(event);
        }
    }

    pub fn translate(&mut self, event: &WindowEvent<'_>) -> Option<PlatformEvent> {
        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => Some(PlatformEvent::Quit),
            WindowEvent::KeyboardInput { input, .. } => translate_key(input),
            WindowEvent::MouseWheel { delta, .. } => {
                let delta_y = self.wheel_lines(*delta);
                (delta_y != 0.0).then_some(PlatformEvent::Wheel { delta_y })
            }
            WindowEvent::CursorMoved { position, .. } => {
                let point = self.pointer_position(*position);
                self.pointer = point;
                Some(PlatformEvent::PointerMoved(point))
            }
            WindowEvent::Resized(size) => Some(self.resized(*size)),
            WindowEvent::ScaleFactorChanged {
                scale_factor,
                new_inner_size,
            } => {
                log::debug!("scale factor changed to {}", scale_factor);
                self.scale_factor = *scale_factor;
                Some(self.resized(**new_inner_size))
            }
            _ => None,
        }
    }

    pub fn pointer_position(&self, position: PhysicalPosition<f64>) -> Point {
        Point {
            x: (position.x / self.scale_factor) as f32,
            y: (position.y / self.scale_factor) as f32,
        }
    }

    /// Logical resize event for a physical window size.
    pub fn resized(&self, size: PhysicalSize<u32>) -> PlatformEvent {
        let logical = size.to_logical::<f64>(self.scale_factor);
        PlatformEvent::Resized {
            width: logical.width as f32,
            height: logical.height as f32,
        }
    }

    /// Vertical wheel movement in lines, positive away from the user.
    pub fn wheel_lines(&self, delta: MouseScrollDelta) -> f32 {
        match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => {
                (position.y / self.scale_factor / PIXELS_PER_LINE) as f32
            }
        }
    }
}

impl Default for DesktopWinitPlatform {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl EventSource for DesktopWinitPlatform {
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        self.pending.pop_front()
    }

    fn pointer_position(&self) -> Point {
        self.pointer
    }
}

/// Key presses only; releases and unmapped keys without a scancode are dropped.
pub fn translate_key(input: &KeyboardInput) -> Option<PlatformEvent> {
    if input.state != ElementState::Pressed {
        return None;
    }
    let key = match input.virtual_keycode {
        Some(VirtualKeyCode::Escape) => Key::Escape,
        Some(code) => LETTERS
            .iter()
            .find(|(letter, _)| *letter == code)
            .map(|(_, ch)| Key::Character(*ch))
            .unwrap_or(Key::Other(input.scancode)),
        None => Key::Other(input.scancode),
    };
    Some(PlatformEvent::KeyDown(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(deprecated)]
    fn key(state: ElementState, code: Option<VirtualKeyCode>, scancode: u32) -> KeyboardInput {
        KeyboardInput {
            scancode,
            state,
            virtual_keycode: code,
            modifiers: Default::default(),
        }
    }

    #[test]
    fn letters_map_to_lowercase_characters() {
        assert_eq!(
            translate_key(&key(ElementState::Pressed, Some(VirtualKeyCode::Q), 16)),
            Some(PlatformEvent::KeyDown(Key::Character('q')))
        );
        assert_eq!(
            translate_key(&key(ElementState::Pressed, Some(VirtualKeyCode::Escape), 1)),
            Some(PlatformEvent::KeyDown(Key::Escape))
        );
        assert_eq!(
            translate_key(&key(ElementState::Pressed, Some(VirtualKeyCode::F1), 59)),
            Some(PlatformEvent::KeyDown(Key::Other(59)))
        );
    }

    #[test]
    fn key_releases_are_ignored() {
        assert_eq!(
            translate_key(&key(ElementState::Released, Some(VirtualKeyCode::Q), 16)),
            None
        );
    }

    #[test]
    fn positions_and_sizes_are_logical() {
        let platform = DesktopWinitPlatform::new(2.0);
        assert_eq!(
            platform.pointer_position(PhysicalPosition::new(40.0, 10.0)),
            Point::new(20.0, 5.0)
        );
        assert_eq!(
            platform.resized(PhysicalSize::new(760, 1200)),
            PlatformEvent::Resized {
                width: 380.0,
                height: 600.0
            }
        );
    }

    #[test]
    fn wheel_deltas_become_lines() {
        let platform = DesktopWinitPlatform::new(2.0);
        assert_eq!(platform.wheel_lines(MouseScrollDelta::LineDelta(0.0, -2.0)), -2.0);
        assert_eq!(
            platform.wheel_lines(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 80.0))),
            2.0
        );
    }

    #[test]
    fn close_request_is_queued_as_quit() {
        let mut platform = DesktopWinitPlatform::default();
        platform.handle_window_event(&WindowEvent::CloseRequested);
        platform.handle_window_event(&WindowEvent::Focused(true));
        assert_eq!(platform.poll_event(), Some(PlatformEvent::Quit));
        assert_eq!(platform.poll_event(), None);
    }
}
