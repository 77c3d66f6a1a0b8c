/*!
## Rust Language Module

This Rust module splits script lines into tokens and parses them
into typed instructions.

*/

/// Index of an instruction within a script. `None` when not yet placed.
pub type LineNumber = Option<usize>;

/// Most operand tokens a line may carry.
pub const MAX_OPERANDS: usize = 4;

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;

#[cfg(test)]
mod tests;
