mod listener;
mod platform;
mod types;

pub use listener::*;
pub use platform::*;
pub use types::*;
