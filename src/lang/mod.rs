/*!
# Rust Language Module

This Rust module matches literals, parses, and reports errors for the
potatoes language. There is no tokenizer; every grammar rule matches
literal spellings straight off the source text.

*/

pub type LineNumber = usize;

#[macro_use]
mod error;
mod cursor;
mod parse;
mod spelling;

pub use cursor::{Cursor, Mark};
pub use error::Error;
pub use error::ErrorCode;
pub use parse::{parse, Census, Program};
pub use spelling::Counters;

pub mod ast;
