extern crate ansi_term;
extern crate ctrlc;
use crate::lang::{parse, Error};
use crate::mach::Runtime;
use ansi_term::Style;
use log::{debug, warn};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::Ordering;

/// Runs the program in `path` against stdin and stdout.
/// Returns the process exit status.
pub fn main(path: &Path, check: bool) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            report(&format!("{}: {}", path.display(), error));
            return 1;
        }
    };
    match main_loop(&source, check) {
        Ok(()) => 0,
        Err(error) => {
            report(&error.to_string());
            1
        }
    }
}

fn main_loop(source: &str, check: bool) -> Result<(), Error> {
    let program = parse(source)?;
    debug!("parsed {:?}", program.census());
    if check {
        return Ok(());
    }
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut runtime = Runtime::new(stdin.lock(), stdout.lock());
    let interrupted = runtime.interrupt_handle();
    if let Err(error) = ctrlc::set_handler(move || {
        if interrupted.swap(true, Ordering::SeqCst) {
            std::process::exit(130);
        }
    }) {
        warn!("Ctrl-C handler not installed: {}", error);
    }
    runtime.run(&program)
}

fn report(message: &str) {
    let _ = std::io::stdout().flush();
    eprintln!("{}", Style::new().bold().paint(message));
}
