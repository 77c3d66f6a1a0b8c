//! # regscript
//!
//! Interactive front end for the regscript machine.
//!

mod term;

fn main() {
    term::main();
}
