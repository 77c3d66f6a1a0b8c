//! # regscript
//!
//! A tiny line-oriented scripting machine. Scripts are lists of
//! instructions with labels, call frames of named variables and ten
//! shared integer registers.
//!
//! Start the executable and you will be asked how many lines your script
//! has, then for the lines themselves. Execution always begins at
//! `label main`.
//! ```text
//! Enter number of lines: 4
//! label main
//! def x 0x2a
//! print x
//! ret
//!
//! Running script...
//! variable: 'x', value: 0x2a
//! ```
//!
//! The same script may be kept in a file and passed on the command line.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/instructions.rs"]
#[allow(non_snake_case)]
pub mod __Instructions;

pub mod lang;
pub mod mach;
