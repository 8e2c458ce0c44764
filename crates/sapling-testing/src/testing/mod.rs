mod clock;
mod events;
mod surface;

pub use clock::*;
pub use events::*;
pub use surface::*;
