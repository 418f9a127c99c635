use super::ast::*;
use super::cursor::Cursor;
use super::spelling::*;
use super::Error;
use log::debug;

type Result<T> = std::result::Result<T, Error>;

/// A parsed program: exactly one top-level statement.
#[derive(Debug, PartialEq)]
pub struct Program {
    statement: Statement,
    consumed: usize,
    trailing: usize,
}

impl Program {
    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    /// Bytes of source that were parsed.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Bytes left after the statement, not counting leading whitespace.
    /// They are never executed.
    pub fn trailing(&self) -> usize {
        self.trailing
    }

    pub fn census(&self) -> Census {
        let mut census = Census::default();
        self.statement.accept(&mut census);
        census
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct Census {
    pub statements: usize,
    pub expressions: usize,
    pub labels: usize,
}

impl Visitor for Census {
    fn visit_statement(&mut self, _: &Statement) {
        self.statements += 1;
    }
    fn visit_expression(&mut self, _: &Expression) {
        self.expressions += 1;
    }
    fn visit_label(&mut self, _: &Label) {
        self.labels += 1;
    }
}

pub fn parse(source: &str) -> Result<Program> {
    let mut parser = Parser {
        cursor: Cursor::new(source),
    };
    let statement = parser.statement()?;
    let consumed = parser.cursor.pos();
    parser.cursor.skip_whitespace();
    let trailing = parser.cursor.rest().len();
    if trailing > 0 {
        debug!(
            "ignoring {} bytes after the statement ending on line {}",
            trailing,
            parser.cursor.line()
        );
    }
    Ok(Program {
        statement,
        consumed,
        trailing,
    })
}

struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    fn go(&mut self, s: &str) -> bool {
        self.cursor.go(s)
    }

    fn expect(&mut self, s: &str, message: &'static str) -> Result<()> {
        self.cursor.expect(s, message)
    }

    fn syntax_error(&self, message: &'static str) -> Error {
        error!(SyntaxError, self.cursor.peek_line(); message)
    }

    fn statement(&mut self) -> Result<Statement> {
        match self.statement_maybe()? {
            Some(s) => Ok(s),
            None => Err(self.syntax_error("STATEMENT EXPECTED")),
        }
    }

    /// The longest run of statements; stops at the first position
    /// where no statement form matches.
    fn statements(&mut self) -> Result<Vec<Statement>> {
        let mut v: Vec<Statement> = vec![];
        while let Some(s) = self.statement_maybe()? {
            v.push(s);
        }
        Ok(v)
    }

    fn statement_maybe(&mut self) -> Result<Option<Statement>> {
        if self.go("synchronized(") {
            return self.r#bind().map(Some);
        }
        if self.go("std::cout<<") {
            return self.r#load().map(Some);
        }
        if self.go("goto") {
            return self.r#cycle().map(Some);
        }
        if self.go("(format") {
            return self.r#loop().map(Some);
        }
        if let Some(family) = self.family() {
            return self.r#invoke(family).map(Some);
        }
        if self.go("proc") {
            return self.r#print().map(Some);
        }
        if self.go("WHILE") {
            return self.r#accumulate().map(Some);
        }
        if self.go("case") {
            return self.r#input().map(Some);
        }
        if self.go("def") {
            return self.r#stack().map(Some);
        }
        Ok(None)
    }

    fn r#bind(&mut self) -> Result<Statement> {
        let line = self.cursor.line();
        let label = self.label()?;
        self.expect("){", "EXPECTED `){` AFTER LABEL")?;
        let body = self.statements()?;
        self.expect("}", "EXPECTED `}`")?;
        Ok(Statement::Bind(line, label, body))
    }

    fn r#load(&mut self) -> Result<Statement> {
        let line = self.cursor.line();
        let expr = self.expression()?;
        self.expect("<<std::endl;", "EXPECTED `<<std::endl;`")?;
        Ok(Statement::Load(line, expr))
    }

    fn r#cycle(&mut self) -> Result<Statement> {
        let line = self.cursor.line();
        let label = self.label()?;
        self.expect(";", "EXPECTED `;`")?;
        Ok(Statement::Cycle(line, label))
    }

    fn r#loop(&mut self) -> Result<Statement> {
        let line = self.cursor.line();
        let label = self.label()?;
        self.expect("\"", "EXPECTED `\"` AFTER LABEL")?;
        let body = self.statements()?;
        self.expect("\")", "EXPECTED `\")`")?;
        Ok(Statement::Loop(line, label, body))
    }

    /// Only the current delimiter pair of each family is tried.
    fn family(&mut self) -> Option<(Family, &'static str)> {
        for (family, cyclic) in [(Family::A, &FAMILY_A), (Family::B, &FAMILY_B)].iter() {
            let (before, after) = *cyclic.current(self.cursor.counters());
            if self.go(before) {
                self.cursor.counters_mut().bump(cyclic.table);
                return Some((*family, after));
            }
        }
        None
    }

    fn r#invoke(&mut self, (family, after): (Family, &'static str)) -> Result<Statement> {
        let line = self.cursor.line();
        let label = self.label()?;
        self.expect(after, "EXPECTED END OF TRIGGER")?;
        Ok(Statement::Invoke(line, family, label))
    }

    fn r#print(&mut self) -> Result<Statement> {
        let line = self.cursor.line();
        let label = self.label()?;
        self.expect("{", "EXPECTED `{` AFTER LABEL")?;
        let expr = self.expression()?;
        self.expect("}{", "EXPECTED `}{`")?;
        let body = self.statements()?;
        self.expect("}", "EXPECTED `}`")?;
        Ok(Statement::Print(line, label, expr, body))
    }

    fn r#accumulate(&mut self) -> Result<Statement> {
        let line = self.cursor.line();
        let label = self.label()?;
        let op = self.operator()?;
        let expr = self.expression()?;
        let body = self.statements()?;
        self.expect("WEND", "EXPECTED `WEND`")?;
        Ok(Statement::Accumulate(line, label, op, expr, body))
    }

    fn r#input(&mut self) -> Result<Statement> {
        let line = self.cursor.line();
        let label = self.label()?;
        self.expect("of{_->", "EXPECTED `of{_->`")?;
        let body = self.statements()?;
        self.expect("}", "EXPECTED `}`")?;
        Ok(Statement::Input(line, label, body))
    }

    fn r#stack(&mut self) -> Result<Statement> {
        let line = self.cursor.line();
        let label = self.label()?;
        self.expect("(", "EXPECTED `(` AFTER LABEL")?;
        let expr = self.expression()?;
        self.expect(")", "EXPECTED `)`")?;
        let body = self.statements()?;
        self.expect("end", "EXPECTED `end`")?;
        Ok(Statement::Stack(line, label, expr, body))
    }

    fn label(&mut self) -> Result<Label> {
        for (index, cyclic) in LABELS.iter().enumerate() {
            if self.go(cyclic.current(self.cursor.counters())) {
                self.cursor.counters_mut().bump(cyclic.table);
                return Ok(Label::Named(index));
            }
        }
        if self.go(ANONYMOUS_LABEL) {
            return Ok(Label::Anonymous);
        }
        Err(self.syntax_error("LABEL EXPECTED"))
    }

    fn operator(&mut self) -> Result<Operator> {
        for (s, op) in [
            ("<", Operator::Less),
            (">", Operator::Greater),
            ("=", Operator::Equal),
        ]
        .iter()
        {
            if self.go(s) {
                return Ok(*op);
            }
        }
        Err(self.syntax_error("OPERATOR EXPECTED"))
    }

    fn expression(&mut self) -> Result<Expression> {
        for (key, cyclic) in REGISTER_KEYS.iter() {
            if self.go(key) {
                let register = *cyclic.current(self.cursor.counters());
                self.cursor.counters_mut().bump(cyclic.table);
                return Ok(Expression::Register(register));
            }
        }
        if self.go("--help") {
            return Ok(Expression::Zero);
        }
        for (s, table) in INCREMENTS.iter() {
            if self.go(s) {
                let n = self.cursor.counters_mut().bump(*table);
                return Ok(Expression::Count(n as i64));
            }
        }
        if self.go("(int)") {
            return Ok(Expression::Label(self.label()?));
        }
        if self.go("@{[") {
            let expr = self.expression()?;
            self.expect("]}", "EXPECTED `]}`")?;
            return Ok(Expression::Negation(Box::new(expr)));
        }
        Err(self.syntax_error("EXPRESSION EXPECTED"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn parse_str(s: &str) -> Statement {
        match parse(s) {
            Ok(p) => p.statement,
            Err(e) => panic!("{} : {:?}", e, e),
        }
    }

    #[test]
    fn test_load_zero() {
        assert_eq!(
            parse_str("std::cout<<--help<<std::endl;"),
            Statement::Load(1, Expression::Zero)
        );
    }

    #[test]
    fn test_register_keys_rotate() {
        let answer = Statement::Bind(
            1,
            Label::Named(0),
            vec![
                Statement::Load(2, Expression::Register(Register::A)),
                Statement::Load(3, Expression::Register(Register::C)),
                Statement::Load(4, Expression::Register(Register::E)),
                Statement::Load(5, Expression::Register(Register::C)),
                Statement::Load(6, Expression::Register(Register::A)),
            ],
        );
        assert_eq!(
            parse_str(
                "synchronized(0.0f){
                std::cout<<STDERR<<std::endl;
                std::cout<<STDERR<<std::endl;
                std::cout<<STDERR<<std::endl;
                std::cout<<$[<<std::endl;
                std::cout<<STDERR<<std::endl;
                }"
            ),
            answer
        );
    }

    #[test]
    fn test_increments_count_per_spelling() {
        let answer = Statement::Bind(
            1,
            Label::Named(1),
            vec![
                Statement::Load(1, Expression::Count(0)),
                Statement::Load(1, Expression::Count(1)),
                Statement::Load(1, Expression::Count(0)),
                Statement::Load(1, Expression::Negation(Box::new(Expression::Count(2)))),
            ],
        );
        assert_eq!(
            parse_str(
                r#"synchronized(std::ignore){std::cout<<"Hello,world!"<<std::endl;std::cout<<"Hello,world!"<<std::endl;std::cout<<arr[:]<<std::endl;std::cout<<@{["Hello,world!"]}<<std::endl;}"#
            ),
            answer
        );
    }

    #[test]
    fn test_labels_by_table() {
        let answer = Statement::Bind(
            1,
            Label::Named(2),
            vec![
                Statement::Cycle(1, Label::Named(0)),
                Statement::Cycle(1, Label::Named(2)),
                Statement::Cycle(1, Label::Anonymous),
                Statement::Cycle(1, Label::Named(0)),
            ],
        );
        assert_eq!(
            parse_str("synchronized($ARGV){goto 0.0f; goto *read-eval*; goto t; goto ++i;}"),
            answer
        );
    }

    #[test]
    fn test_trigger_families_rotate() {
        let answer = Statement::Stack(
            1,
            Label::Named(0),
            Expression::Zero,
            vec![
                Statement::Invoke(1, Family::A, Label::Named(0)),
                Statement::Invoke(1, Family::B, Label::Named(0)),
                Statement::Invoke(2, Family::A, Label::Named(0)),
                Statement::Invoke(2, Family::B, Label::Named(0)),
            ],
        );
        assert_eq!(
            parse_str("def 0.0f(--help) usestrictqw/++i/; s/<>//g\nSETLOCAL Object OUTPUT=0.0f end"),
            answer
        );
    }

    #[test]
    fn test_accumulate_and_print() {
        let answer = Statement::Accumulate(
            1,
            Label::Named(0),
            Operator::Greater,
            Expression::Label(Label::Named(1)),
            vec![Statement::Print(
                2,
                Label::Named(2),
                Expression::Register(Register::E),
                vec![],
            )],
        );
        assert_eq!(
            parse_str("WHILE 0.0f > (int) std::ignore\nproc $ARGV {`uniq-c`}{} WEND"),
            answer
        );
    }

    #[test]
    fn test_wrong_spelling_for_occurrence() {
        let e = parse("synchronized(0.0f){goto 0.0f;}").unwrap_err();
        assert_eq!(e.code(), ErrorCode::SyntaxError);
        assert_eq!(e.text(), "LABEL EXPECTED");
    }

    #[test]
    fn test_trailing_text_is_ignored() {
        let p = parse("goto t; goto t; anything").unwrap();
        assert_eq!(p.statement(), &Statement::Cycle(1, Label::Anonymous));
        assert_eq!(p.consumed(), 7);
        assert_eq!(p.trailing(), "goto t; anything".len());
    }

    #[test]
    fn test_census() {
        let p = parse("proc t {@{[--help]}}{ usestrictqw/t/; }").unwrap();
        assert_eq!(
            p.census(),
            Census {
                statements: 2,
                expressions: 2,
                labels: 2,
            }
        );
    }

    #[test]
    fn test_statement_expected() {
        let e = parse("\n  nothing").unwrap_err();
        assert_eq!(e.to_string(), "SYNTAX ERROR IN 2; STATEMENT EXPECTED");
    }
}
