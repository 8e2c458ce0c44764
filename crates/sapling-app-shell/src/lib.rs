//! Frame loop driving an element tree against a surface and an event source.

mod error;
mod options;

pub use error::ShellError;
pub use options::{AppShellOptions, DEFAULT_TITLE};

use sapling_core::{Clock, Dispatch, ElementId, ElementTree, RenderedReport, Widget};
use sapling_foundation::{EventSource, Key, PlatformEvent, PointerEvent};
use sapling_render_common::RenderContext;
use sapling_runtime_std::{FrameThrottle, StdClock};
use sapling_ui::{App, Window, WindowState};
use sapling_ui_graphics::{Size, Surface};
use sapling_ui_layout::Constraints;

/// What the loop should do after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

pub struct AppShell<S, C = StdClock>
where
    S: Surface,
    C: Clock,
{
    tree: ElementTree,
    window: ElementId,
    render: RenderContext<S>,
    throttle: FrameThrottle<C>,
    options: AppShellOptions,
    title: String,
    last_report: RenderedReport,
    frames: u64,
}

impl<S: Surface> AppShell<S, StdClock> {
    /// Mounts `content` inside a [`Window`] and paces frames in real time.
    pub fn new(
        options: AppShellOptions,
        surface: S,
        content: impl Into<Widget>,
    ) -> Result<Self, ShellError> {
        Self::with_clock(options, surface, StdClock::new(), content)
    }
}

impl<S, C> AppShell<S, C>
where
    S: Surface,
    C: Clock,
{
    pub fn with_clock(
        options: AppShellOptions,
        surface: S,
        clock: C,
        content: impl Into<Widget>,
    ) -> Result<Self, ShellError> {
        let content = content.into();
        let title = resolve_title(&options, &content);
        let mut tree = ElementTree::new();
        let window = tree.mount(Window::new(options.initial_size(), content).into())?;
        let size = options.initial_size();
        log::info!(
            "starting \"{}\" at {}x{}, {} fps",
            title,
            size.width,
            size.height,
            options.fps()
        );
        Ok(Self {
            tree,
            window,
            render: RenderContext::new(surface),
            throttle: FrameThrottle::new(clock, options.fps()),
            options,
            title,
            last_report: RenderedReport::default(),
            frames: 0,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &AppShellOptions {
        &self.options
    }

    pub fn tree(&self) -> &ElementTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut ElementTree {
        &mut self.tree
    }

    /// The element of the root [`Window`].
    pub fn window(&self) -> ElementId {
        self.window
    }

    pub fn render_context(&self) -> &RenderContext<S> {
        &self.render
    }

    pub fn clock(&self) -> &C {
        self.throttle.clock()
    }

    /// Rendered aggregation computed by the most recent frame.
    pub fn last_report(&self) -> &RenderedReport {
        &self.last_report
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs one tick: rebuild, layout, rendered propagation, throttle,
    /// render, then drain pending events.
    ///
    /// Nothing is drawn for a frame whose rebuild or layout fails.
    pub fn frame(&mut self, events: &mut dyn EventSource) -> Result<FrameOutcome, ShellError> {
        self.tree.rebuild_dirty()?;
        let root = self.tree.root().ok_or(ShellError::EmptyRoot)?;
        self.tree.layout(root, Constraints::UNBOUNDED)?;
        self.last_report = self.tree.propagate_rendered();
        self.throttle.delay();
        self.render.render_frame(&mut self.tree);
        self.frames += 1;
        self.drain_events(events)
    }

    /// Repeats [`AppShell::frame`] until a quit request or the first error.
    pub fn run(&mut self, events: &mut dyn EventSource) -> Result<(), ShellError> {
        loop {
            match self.frame(events) {
                Ok(FrameOutcome::Continue) => {}
                Ok(FrameOutcome::Quit) => {
                    log::info!("quitting after {} frames", self.frames);
                    return Ok(());
                }
                Err(err) => {
                    log::error!("frame {} failed: {err}", self.frames + 1);
                    return Err(err);
                }
            }
        }
    }

    fn drain_events(&mut self, events: &mut dyn EventSource) -> Result<FrameOutcome, ShellError> {
        while let Some(event) = events.poll_event() {
            match event {
                PlatformEvent::Quit => return Ok(FrameOutcome::Quit),
                PlatformEvent::KeyDown(Key::Character(key)) if key == self.options.quit_key() => {
                    return Ok(FrameOutcome::Quit);
                }
                PlatformEvent::KeyDown(_) | PlatformEvent::PointerMoved(_) => {}
                PlatformEvent::Wheel { delta_y } => {
                    let position = events.pointer_position();
                    if let Some(event) = PointerEvent::from_wheel(delta_y, position) {
                        match self.tree.dispatch_pointer(&event) {
                            Dispatch::Handled(id) => log::trace!("wheel handled by {:?}", id),
                            outcome => log::trace!("wheel at {:?}: {:?}", position, outcome),
                        }
                    }
                }
                PlatformEvent::Resized { width, height } => {
                    log::debug!("window resized to {}x{}", width, height);
                    self.tree
                        .set_state::<WindowState, _>(self.window, |state| {
                            state.size = Size::new(width, height)
                        })?;
                }
            }
        }
        Ok(FrameOutcome::Continue)
    }
}

/// Explicit option first, then the first `App` in the declared tree.
fn resolve_title(options: &AppShellOptions, content: &Widget) -> String {
    if let Some(title) = options.title() {
        return title.to_owned();
    }
    content
        .find::<App>()
        .and_then(|app| app.downcast_ref::<App>().map(|app| app.title.clone()))
        .unwrap_or_else(|| DEFAULT_TITLE.to_owned())
}
