/*!
# Rust Language Module

This Rust module provides lexical analysis of BASM source lines.

*/

#[macro_use]
mod error;
mod instruction;
mod lex;

pub use error::Error;
pub use error::ErrorCode;
pub use instruction::Instruction;
pub use lex::lex;

/// Zero based index of a line in the program source.
/// Blank and comment lines are counted.
pub type LineNumber = usize;
