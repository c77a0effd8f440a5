//! Program generator module.

mod operation;
mod program;
mod writer;

pub use operation::{Counterbore, Operation, Plunge, Pocket, Synthesize};
pub use program::{describe_operation, generate_program, generate_program_at, GENERATED_PREFIX};
pub use writer::{format_coord, ProgramWriter};
