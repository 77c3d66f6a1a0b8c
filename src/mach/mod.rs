/*!
## Rust Machine Module

This Rust module holds a parsed script and runs it on a small machine
of per-call variable frames and process-wide registers.

*/

pub type Address = usize;

/// Most instructions a script may hold.
pub const MAX_INSTRUCTIONS: usize = 256;
/// Longest variable name in bytes.
pub const MAX_NAME_LEN: usize = 15;
/// Longest string value in bytes.
pub const MAX_STRING_LEN: usize = 63;
/// Variable slots in one frame.
pub const FRAME_SLOTS: usize = 32;
/// Number of registers, `$0` to `$9`.
pub const REGISTER_COUNT: usize = 10;
/// Nested calls allowed before `CALL STACK OVERFLOW`.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

mod operation;
mod program;
mod reg;
mod runtime;
mod stack;
mod val;
mod var;

pub use operation::Operation;
pub use program::Program;
pub use reg::Reg;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;

#[cfg(test)]
mod tests;
