//! Counter demo. By default it drives the frame loop headless with a scripted
//! session; `--desktop` opens a winit window and takes real input instead.
//! Either way every draw call is logged instead of rasterized.

mod desktop;

use sapling_app_shell::{AppShell, AppShellOptions};
use sapling_core::{
    BuildContext, EventContext, PointerEvent, PointerEventListener, State, StatefulWidget, Widget,
};
use sapling_foundation::{Key, PlatformEvent};
use sapling_testing::ScriptedEvents;
use sapling_ui::{App, ColoredBox, Column, Label, Padding, ScrollView, SizedBox};
use sapling_ui_graphics::{Color, EdgeInsets, Point, Rect, Surface};

const SQUARE_COUNT: usize = 12;

struct Counter;

impl StatefulWidget for Counter {
    fn create_state(&self) -> Box<dyn State> {
        Box::new(CounterState { count: 0 })
    }
}

struct CounterState {
    count: i64,
}

impl State for CounterState {
    fn build(&mut self, _cx: &BuildContext<'_>) -> anyhow::Result<Widget> {
        let color = if self.count % 2 == 0 {
            Color::rgb(40, 90, 160)
        } else {
            Color::rgb(160, 60, 40)
        };
        Ok(Padding::new(
            EdgeInsets::all(8.0),
            ColoredBox::new(color).with_child(Label::new(format!("count: {}", self.count))),
        )
        .into())
    }

    fn pointer_listener(&mut self) -> Option<&mut dyn PointerEventListener> {
        Some(self)
    }
}

impl PointerEventListener for CounterState {
    fn handle_event(&mut self, event: &PointerEvent, cx: &mut EventContext) -> bool {
        let Some(delta) = event.scroll_delta() else {
            return false;
        };
        let step = if delta < 0.0 { 1 } else { -1 };
        cx.set_state(|| self.count += step);
        true
    }
}

fn squares() -> Widget {
    let squares: Vec<Widget> = (0..SQUARE_COUNT)
        .map(|index| {
            let shade = (index * 20) as u8;
            SizedBox::new(360.0, 40.0)
                .with_child(
                    Padding::new(
                        EdgeInsets::symmetric(4.0, 0.0),
                        ColoredBox::new(Color::rgb(shade, 200u8.saturating_sub(shade), 120)),
                    ),
                )
                .into()
        })
        .collect();
    SizedBox::new(380.0, 200.0)
        .with_child(ScrollView::new(Column::new(squares)))
        .into()
}

fn content() -> App {
    App::new(
        "Sapling Counter",
        Column::new(vec![
            Label::new("scroll over the counter to change it").into(),
            Widget::stateful(Counter),
            squares(),
        ]),
    )
}

/// Surface that logs draw calls at debug level.
#[derive(Default)]
pub struct LogSurface {
    frame: u64,
}

impl Surface for LogSurface {
    fn clear(&mut self, _color: Color) {
        self.frame += 1;
        log::debug!("-- frame {} --", self.frame);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        log::debug!("fill {:?} {:?}", rect, color);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        log::debug!("stroke {:?} {:?}", rect, color);
    }

    fn draw_text(&mut self, origin: Point, text: &str, _color: Color) {
        log::info!("frame {}: text {:?} at ({}, {})", self.frame, text, origin.x, origin.y);
    }

    fn present(&mut self) {}
}

fn session() -> ScriptedEvents {
    let over_counter = PlatformEvent::PointerMoved(Point::new(20.0, 30.0));
    let over_squares = PlatformEvent::PointerMoved(Point::new(20.0, 120.0));
    ScriptedEvents::new()
        .idle()
        .frame([over_counter, PlatformEvent::Wheel { delta_y: 1.0 }])
        .frame([PlatformEvent::Wheel { delta_y: 1.0 }])
        .frame([PlatformEvent::Wheel { delta_y: -1.0 }])
        .frame([over_squares, PlatformEvent::Wheel { delta_y: -3.0 }])
        .frame([PlatformEvent::Resized {
            width: 420.0,
            height: 640.0,
        }])
        .idle()
        .frame([PlatformEvent::KeyDown(Key::Character('q'))])
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = AppShellOptions::default().with_fps(30);
    let mut shell = AppShell::new(options, LogSurface::default(), content())?;
    if std::env::args().any(|arg| arg == "--desktop") {
        return desktop::run(shell);
    }
    let mut events = session();
    shell.run(&mut events)?;

    let window = shell.window();
    log::info!(
        "{} finished after {} frames\n{}",
        shell.title(),
        shell.frames(),
        shell.tree().dump(Some(window))
    );
    Ok(())
}
