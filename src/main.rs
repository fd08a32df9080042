//! # BASM
//!
//! Runs a BASM program from a file, then dumps non-zero memory.
//!

mod term;

fn main() {
    term::main()
}
