/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of calculator input.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;
mod source;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use lex::lex;
pub use line::Line;
pub use parse::{parse, MAX_DEPTH, MAX_OPERANDS};
pub use source::Source;

pub mod ast;
pub mod token;

/// Half-open byte range `start..end` into one line of source.
pub type Column = std::ops::Range<usize>;
