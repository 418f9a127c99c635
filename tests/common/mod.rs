#![allow(dead_code)]
use potatoes::lang::parse;
use potatoes::mach::{Registers, Runtime};
use std::io::Cursor;

/// Everything the program wrote, followed by the error line if it failed.
pub fn exec(source: &str) -> String {
    exec_with_input(source, "")
}

pub fn exec_with_input(source: &str, input: &str) -> String {
    let program = match parse(source) {
        Ok(program) => program,
        Err(error) => return format!("{}\n", error),
    };
    let mut runtime = Runtime::new(Cursor::new(input.as_bytes().to_vec()), Vec::<u8>::new());
    let result = runtime.run(&program);
    let mut s = String::from_utf8_lossy(runtime.output()).into_owned();
    if let Err(error) = result {
        s.push_str(&format!("{}\n", error));
    }
    s
}

/// Register contents after a successful run.
pub fn registers(source: &str) -> Registers {
    let program = match parse(source) {
        Ok(program) => program,
        Err(error) => panic!("{}", error),
    };
    let mut runtime = Runtime::new(Cursor::new(vec![]), Vec::<u8>::new());
    if let Err(error) = runtime.run(&program) {
        panic!("{}", error);
    }
    runtime.registers()
}
