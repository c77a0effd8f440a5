//! Transformations applied to hole sets before program generation.

mod tour;

pub use tour::*;
