//! Hole pattern generation.

mod generate;
mod layout;

pub use generate::*;
pub use layout::PatternSpec;
