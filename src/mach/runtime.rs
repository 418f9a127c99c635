use super::{LabelEnv, LoopId, Number, Trigger, Val};
use crate::error;
use crate::lang::ast::{Expression, Family, Label, Operator, Register, Statement};
use crate::lang::{Error, Program};
use log::{debug, trace};
use std::cell::Cell;
use std::convert::TryFrom;
use std::io::{BufRead, Write};
use std::ops::{Deref, DerefMut};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub a: Number,
    pub c: Number,
    pub e: Number,
}

impl Registers {
    pub fn get(&self, register: Register) -> Number {
        match register {
            Register::A => self.a,
            Register::C => self.c,
            Register::E => self.e,
        }
    }

    /// Even: (A,C,E) becomes (E,A,C). Odd: (A,C,E) becomes (C,E,A).
    pub fn rotate(&mut self, even: bool) {
        let Registers { a, c, e } = *self;
        *self = if even {
            Registers { a: e, c: a, e: c }
        } else {
            Registers { a: c, c: e, e: a }
        };
    }

    fn count_down(&mut self) -> Result<()> {
        self.c = self.c.checked_sub(1).ok_or_else(|| error!(Overflow))?;
        Ok(())
    }
}

/// How a statement or block finished. Break and continue name the
/// loop activation they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Normal,
    Break(LoopId),
    Continue(LoopId),
}

/// ## Execution environment
///
/// Three registers, three stacks and the label memory. A `Runtime`
/// borrows the `Program` it runs because triggers keep references to
/// expressions in the tree.

pub struct Runtime<'p, R, W> {
    registers: Registers,
    stacks: [Vec<Number>; 3],
    labels: LabelEnv<'p>,
    input: R,
    output: W,
    loops: usize,
    interrupted: Arc<AtomicBool>,
}

enum Restore<'p> {
    Label(Label, Option<Val<'p>>),
    RegisterE(Number),
}

/// Puts a label or register E back when dropped, however the
/// protected region was left.
struct Scope<'r, 'p, R, W> {
    runtime: &'r mut Runtime<'p, R, W>,
    restore: Option<Restore<'p>>,
}

impl<'r, 'p, R, W> Deref for Scope<'r, 'p, R, W> {
    type Target = Runtime<'p, R, W>;
    fn deref(&self) -> &Self::Target {
        self.runtime
    }
}

impl<'r, 'p, R, W> DerefMut for Scope<'r, 'p, R, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.runtime
    }
}

impl<'r, 'p, R, W> Drop for Scope<'r, 'p, R, W> {
    fn drop(&mut self) {
        match self.restore.take() {
            Some(Restore::Label(label, old)) => {
                self.runtime.labels.swap(label, old);
            }
            Some(Restore::RegisterE(e)) => self.runtime.registers.e = e,
            None => {}
        }
    }
}

impl<'p, R, W> Runtime<'p, R, W> {
    pub fn registers(&self) -> Registers {
        self.registers
    }

    pub fn stack(&self, index: usize) -> Option<&Vec<Number>> {
        self.stacks.get(index)
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Setting the flag stops the program at the next loop iteration.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    fn bind(&mut self, label: Label, value: Val<'p>) -> Scope<'_, 'p, R, W> {
        let old = self.labels.swap(label, Some(value));
        Scope {
            runtime: self,
            restore: Some(Restore::Label(label, old)),
        }
    }

    fn guard_e(&mut self) -> Scope<'_, 'p, R, W> {
        let e = self.registers.e;
        Scope {
            runtime: self,
            restore: Some(Restore::RegisterE(e)),
        }
    }

    fn check_interrupt(&self) -> Result<()> {
        if self.interrupted.swap(false, Ordering::SeqCst) {
            debug!("interrupt observed");
            return Err(error!(Break));
        }
        Ok(())
    }

    fn number_at(&self, label: Label) -> Result<Number> {
        match self.labels.fetch(label).and_then(Val::number) {
            Some(n) => Ok(n),
            None => Err(error!(SemanticError; "LABEL IS NOT A NUMERICAL VALUE")),
        }
    }

    fn evaluate(&self, expr: &Expression) -> Result<Number> {
        match expr {
            Expression::Register(register) => Ok(self.registers.get(*register)),
            Expression::Zero => Ok(0),
            Expression::Count(n) => Ok(*n),
            Expression::Label(label) => self.number_at(*label),
            Expression::Negation(expr) => self
                .evaluate(expr)?
                .checked_neg()
                .ok_or_else(|| error!(Overflow)),
        }
    }
}

impl<'p, R: BufRead, W: Write> Runtime<'p, R, W> {
    pub fn new(input: R, output: W) -> Runtime<'p, R, W> {
        Runtime {
            registers: Registers::default(),
            stacks: [vec![], vec![], vec![]],
            labels: LabelEnv::new(),
            input,
            output,
            loops: 0,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn run(&mut self, program: &'p Program) -> Result<()> {
        match self.execute(program.statement())? {
            Flow::Normal => Ok(()),
            Flow::Break(_) | Flow::Continue(_) => {
                Err(error!(InternalError; "UNCAUGHT LOOP SIGNAL"))
            }
        }
    }

    fn execute(&mut self, statement: &'p Statement) -> Result<Flow> {
        let line = statement.line_number();
        trace!("{} at line {}", statement.name(), line);
        self.statement(statement)
            .map_err(|e| e.in_line_number(line))
    }

    fn block(&mut self, body: &'p [Statement]) -> Result<Flow> {
        for statement in body {
            match self.execute(statement)? {
                Flow::Normal => {}
                flow => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }

    fn statement(&mut self, statement: &'p Statement) -> Result<Flow> {
        use Statement::*;
        match statement {
            Bind(line, label, body) => {
                let mut scope = self.bind(*label, Val::Number(*line as Number));
                scope.block(body)
            }
            Load(_, expr) => {
                self.registers.a = self.evaluate(expr)?;
                Ok(Flow::Normal)
            }
            Cycle(_, label) => {
                let n = self.number_at(*label)?;
                self.registers.rotate(n % 2 == 0);
                Ok(Flow::Normal)
            }
            Loop(_, label, body) => self.r#loop(*label, body),
            Invoke(_, family, label) => {
                let trigger = match self.labels.fetch(*label).and_then(Val::trigger) {
                    Some(trigger) => trigger.clone(),
                    None => return Err(error!(SemanticError; "LABEL IS NOT A CODE BLOCK")),
                };
                self.invoke(trigger, *family)
            }
            Print(_, label, expr, body) => {
                let mut scope = self.bind(*label, Val::Trigger(Trigger::Print(expr)));
                scope.block(body)
            }
            Accumulate(_, label, op, expr, body) => self.r#accumulate(*label, *op, expr, body),
            Input(_, label, body) => {
                let mut scope = self.bind(*label, Val::Trigger(Trigger::Input));
                scope.block(body)
            }
            Stack(_, label, expr, body) => {
                let mut scope = self.bind(*label, Val::Trigger(Trigger::Stack(expr)));
                scope.block(body)
            }
        }
    }

    fn r#loop(&mut self, label: Label, body: &'p [Statement]) -> Result<Flow> {
        self.loops += 1;
        let id = LoopId(self.loops);
        let mut scope = self.bind(label, Val::Trigger(Trigger::Loop(id)));
        while scope.registers.c > 0 {
            scope.check_interrupt()?;
            trace!("loop {} with C={}", id.0, scope.registers.c);
            match scope.block(body)? {
                Flow::Normal => {}
                Flow::Break(signal) if signal == id => break,
                Flow::Continue(signal) if signal == id => {}
                flow => return Ok(flow),
            }
            scope.registers.count_down()?;
        }
        Ok(Flow::Normal)
    }

    fn r#accumulate(
        &mut self,
        label: Label,
        op: Operator,
        expr: &'p Expression,
        body: &'p [Statement],
    ) -> Result<Flow> {
        let mut guard = self.guard_e();
        let e = guard.evaluate(expr)?;
        guard.registers.e = e;
        let acc = Rc::new(Cell::new(e));
        let mut scope = guard.bind(label, Val::Trigger(Trigger::Accumulate(op, acc.clone())));
        let flow = scope.block(body);
        trace!("accumulator {} finished at {}", op, acc.get());
        flow
    }

    fn invoke(&mut self, trigger: Trigger<'p>, family: Family) -> Result<Flow> {
        match trigger {
            Trigger::Loop(id) => {
                return Ok(match family {
                    Family::A => Flow::Break(id),
                    Family::B => Flow::Continue(id),
                });
            }
            Trigger::Print(expr) => {
                let n = self.evaluate(expr)?;
                self.print(family, n)?;
            }
            Trigger::Accumulate(op, acc) => {
                acc.set(accumulate(op, family, acc.get(), self.registers.e)?);
                trace!("accumulator {} now {}", op, acc.get());
            }
            Trigger::Input => {
                self.registers.a = match family {
                    Family::A => self.read_number()?,
                    Family::B => self.read_char()?,
                };
            }
            Trigger::Stack(expr) => {
                let index = self.evaluate(expr)?;
                match family {
                    Family::A => {
                        let index = index.rem_euclid(3) as usize;
                        self.stacks[index].push(self.registers.a);
                    }
                    Family::B => {
                        let index = if (-3..0).contains(&index) {
                            index + 3
                        } else {
                            index
                        };
                        let stack = match usize::try_from(index) {
                            Ok(index) => self.stacks.get_mut(index),
                            Err(_) => None,
                        };
                        match stack {
                            Some(stack) => self.registers.a = stack.pop().unwrap_or(0),
                            None => return Err(error!(SubscriptOutOfRange)),
                        }
                    }
                }
            }
        }
        Ok(Flow::Normal)
    }

    fn print(&mut self, family: Family, n: Number) -> Result<()> {
        match family {
            Family::A => {
                let ch = match u32::try_from(n).ok().and_then(std::char::from_u32) {
                    Some(ch) => ch,
                    None => return Err(error!(IllegalFunctionCall; "NOT A CHARACTER")),
                };
                write!(self.output, "{}", ch)?;
            }
            Family::B => write!(self.output, "{}", n)?,
        }
        self.output.flush()?;
        Ok(())
    }

    fn read_number(&mut self) -> Result<Number> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(error!(InputPastEnd));
        }
        match line.trim().parse() {
            Ok(n) => Ok(n),
            Err(_) => Err(error!(TypeMismatch; "INPUT IS NOT A NUMBER")),
        }
    }

    fn read_char(&mut self) -> Result<Number> {
        let mut buf = [0u8; 4];
        if self.input.read(&mut buf[..1])? == 0 {
            return Err(error!(InputPastEnd));
        }
        let len = match buf[0] {
            0x00..=0x7F => 1,
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return Err(error!(TypeMismatch; "INPUT IS NOT UTF-8")),
        };
        self.input.read_exact(&mut buf[1..len])?;
        match std::str::from_utf8(&buf[..len]) {
            Ok(s) => Ok(s.chars().next().map_or(0, |c| c as Number)),
            Err(_) => Err(error!(TypeMismatch; "INPUT IS NOT UTF-8")),
        }
    }
}

fn accumulate(op: Operator, family: Family, acc: Number, e: Number) -> Result<Number> {
    use Operator::*;
    let n = match (family, op) {
        (Family::A, Less) => acc.checked_add(e),
        (Family::A, Greater) => {
            if e == 0 {
                return Err(error!(DivisionByZero));
            }
            acc.checked_div(e)
        }
        (Family::A, Equal) => acc.checked_sub(1),
        (Family::B, Less) => acc.checked_sub(e),
        (Family::B, Greater) => acc.checked_mul(e),
        (Family::B, Equal) => acc.checked_add(1),
    };
    n.ok_or_else(|| error!(Overflow))
}
