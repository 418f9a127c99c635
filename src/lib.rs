//! # potatoes
//!
//! An interpreter for potatoes, an esoteric language whose keywords are
//! borrowed from a dozen other languages and whose spellings change
//! every time they are used.
//!
//! ```text
//! $ potatoes countdown.potato
//! 321
//! ```
//!
//! The [introduction](_Introduction/index.html) walks through a first
//! program. The chapters describe spellings, expressions and each
//! statement.
//!
//! The interpreter can also be driven from Rust.
//!
//! ```
//! let source = "synchronized( 0.0f ){ proc std::ignore {(int) ++i}{ s/ nullptr //g } }";
//! let output = potatoes::run(source, std::io::empty(), Vec::new()).unwrap();
//! assert_eq!(output, b"1");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

pub mod lang;
pub mod mach;
pub mod term;

use std::io::{BufRead, Write};

/// Parses and runs `source`, reading from `input` and writing to
/// `output`. The writer is handed back once the program finishes.
pub fn run<R: BufRead, W: Write>(source: &str, input: R, output: W) -> Result<W, lang::Error> {
    let program = lang::parse(source)?;
    let mut runtime = mach::Runtime::new(input, output);
    runtime.run(&program)?;
    Ok(runtime.into_output())
}
