//! Layout contracts for Sapling

mod constraints;

pub use constraints::*;

pub mod prelude {
    pub use crate::constraints::{Constraints, UNBOUNDED};
}
