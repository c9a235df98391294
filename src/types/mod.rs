//! Value types shared by the layout core and its consumers.

mod cell;
mod selection;

pub use cell::*;
pub use selection::*;
