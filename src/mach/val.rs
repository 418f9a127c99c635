use crate::lang::ast::{Expression, Operator};
use std::cell::Cell;
use std::rc::Rc;

pub type Number = i64;

/// Identifies one activation of a loop statement. Break and continue
/// signals carry it so only the owning activation consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopId(pub usize);

/// What a label can hold. An unbound label has no `Val` at all.
#[derive(Debug, Clone)]
pub enum Val<'p> {
    Number(Number),
    Trigger(Trigger<'p>),
}

/// A code block bound to a label. Invoking it through family A or B
/// selects one of two behaviors fixed by the statement that made it.
#[derive(Debug, Clone)]
pub enum Trigger<'p> {
    /// A breaks, B continues.
    Loop(LoopId),
    /// A writes a character, B writes a decimal number.
    Print(&'p Expression),
    /// Private accumulator updated according to the operator.
    Accumulate(Operator, Rc<Cell<Number>>),
    /// A reads a line as an integer, B reads one character.
    Input,
    /// A pushes register A, B pops into register A.
    Stack(&'p Expression),
}

impl<'p> Val<'p> {
    pub fn number(&self) -> Option<Number> {
        match self {
            Val::Number(n) => Some(*n),
            Val::Trigger(_) => None,
        }
    }

    pub fn trigger(&self) -> Option<&Trigger<'p>> {
        match self {
            Val::Trigger(t) => Some(t),
            Val::Number(_) => None,
        }
    }
}

impl<'p> std::fmt::Display for Val<'p> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Number(n) => write!(f, "{}", n),
            Val::Trigger(Trigger::Loop(id)) => write!(f, "<loop {}>", id.0),
            Val::Trigger(Trigger::Print(_)) => write!(f, "<print>"),
            Val::Trigger(Trigger::Accumulate(op, acc)) => {
                write!(f, "<accumulate {} {}>", op, acc.get())
            }
            Val::Trigger(Trigger::Input) => write!(f, "<input>"),
            Val::Trigger(Trigger::Stack(_)) => write!(f, "<stack>"),
        }
    }
}
