use super::LineNumber;

/// ## Abstract syntax tree
///
/// Each statement carries the source line where its keyword ended.
/// Bodies are plain vectors; an empty body is legal everywhere.

#[derive(Debug, PartialEq)]
pub enum Statement {
    Bind(LineNumber, Label, Vec<Statement>),
    Load(LineNumber, Expression),
    Cycle(LineNumber, Label),
    Loop(LineNumber, Label, Vec<Statement>),
    Invoke(LineNumber, Family, Label),
    Print(LineNumber, Label, Expression, Vec<Statement>),
    Accumulate(LineNumber, Label, Operator, Expression, Vec<Statement>),
    Input(LineNumber, Label, Vec<Statement>),
    Stack(LineNumber, Label, Expression, Vec<Statement>),
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Register(Register),
    Zero,
    Count(i64),
    Label(Label),
    Negation(Box<Expression>),
}

/// A label is identified by the spelling table that matched it,
/// never by the text of the spelling.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Label {
    Named(usize),
    Anonymous,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Register {
    A,
    C,
    E,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Family {
    A,
    B,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Less,
    Greater,
    Equal,
}

impl Statement {
    pub fn name(&self) -> &'static str {
        use Statement::*;
        match self {
            Bind(..) => "BIND",
            Load(..) => "LOAD",
            Cycle(..) => "CYCLE",
            Loop(..) => "LOOP",
            Invoke(_, Family::A, _) => "INVOKE A",
            Invoke(_, Family::B, _) => "INVOKE B",
            Print(..) => "PRINT",
            Accumulate(..) => "ACCUMULATE",
            Input(..) => "INPUT",
            Stack(..) => "STACK",
        }
    }

    pub fn line_number(&self) -> LineNumber {
        use Statement::*;
        match self {
            Bind(line, ..)
            | Load(line, ..)
            | Cycle(line, ..)
            | Loop(line, ..)
            | Invoke(line, ..)
            | Print(line, ..)
            | Accumulate(line, ..)
            | Input(line, ..)
            | Stack(line, ..) => *line,
        }
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Register::A => write!(f, "A"),
            Register::C => write!(f, "C"),
            Register::E => write!(f, "E"),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Operator::Less => write!(f, "<"),
            Operator::Greater => write!(f, ">"),
            Operator::Equal => write!(f, "="),
        }
    }
}

pub trait Visitor {
    fn visit_statement(&mut self, _: &Statement) {}
    fn visit_expression(&mut self, _: &Expression) {}
    fn visit_label(&mut self, _: &Label) {}
}

pub trait AcceptVisitor {
    fn accept<V: Visitor>(&self, visitor: &mut V);
}

impl AcceptVisitor for Statement {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Statement::*;
        match self {
            Bind(_, label, body) | Loop(_, label, body) | Input(_, label, body) => {
                visitor.visit_label(label);
                body.iter().for_each(|s| s.accept(visitor));
            }
            Load(_, expr) => expr.accept(visitor),
            Cycle(_, label) | Invoke(_, _, label) => visitor.visit_label(label),
            Print(_, label, expr, body)
            | Accumulate(_, label, _, expr, body)
            | Stack(_, label, expr, body) => {
                visitor.visit_label(label);
                expr.accept(visitor);
                body.iter().for_each(|s| s.accept(visitor));
            }
        }
        visitor.visit_statement(self)
    }
}

impl AcceptVisitor for Expression {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Expression::*;
        match self {
            Register(_) | Zero | Count(_) => {}
            Label(label) => visitor.visit_label(label),
            Negation(expr) => expr.accept(visitor),
        }
        visitor.visit_expression(self)
    }
}
