//! # potatoes
//!
//! Runs one program file. Set `RUST_LOG=debug` or `RUST_LOG=trace`
//! to watch the parser and the machine.
//!

use clap::Parser;
use std::path::PathBuf;

/// Interpreter for the potatoes language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Parse the program and report syntax errors without running it.
    #[arg(short, long)]
    check: bool,

    /// Program to run.
    file: PathBuf,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    std::process::exit(potatoes::term::main(&args.file, args.check));
}
