use sapling_ui_graphics::Size;

pub const DEFAULT_TITLE: &str = "Sapling App";

/// Options used to configure the application window and frame loop.
#[derive(Debug, Clone, PartialEq)]
pub struct AppShellOptions {
    title: Option<String>,
    initial_size: Size,
    fps: u32,
    quit_key: char,
}

impl Default for AppShellOptions {
    fn default() -> Self {
        Self {
            title: None,
            initial_size: Size::new(380.0, 600.0),
            fps: 60,
            quit_key: 'q',
        }
    }
}

impl AppShellOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title, overriding any `App` title in the widget tree.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the initial window size in logical pixels.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.initial_size = Size::new(width, height);
        self
    }

    /// Sets the target frame rate.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Sets the key that quits the application when pressed.
    pub fn with_quit_key(mut self, key: char) -> Self {
        self.quit_key = key;
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn initial_size(&self) -> Size {
        self.initial_size
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn quit_key(&self) -> char {
        self.quit_key
    }
}
