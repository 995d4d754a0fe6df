/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of formulas.

*/

pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod lex;
mod names;
mod parse;
mod segment;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::{lex, Lexer};
pub use names::{Binding, Names};
pub use parse::{parse, MAX_NESTING};
pub use segment::{split, Segment};

pub mod ast;
pub mod token;

#[cfg(test)]
mod tests;
