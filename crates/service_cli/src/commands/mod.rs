//! CLI command implementations
//!
//! Each submodule implements a specific CLI command and writes its result to
//! the supplied writer.

pub mod bounds;
pub mod month;
pub mod next;
pub mod range;
