use super::spelling::Counters;
use super::{Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

fn is_newline(c: char) -> bool {
    c == '\n'
}

/// A position in the source. Matching produces one of these without
/// moving the cursor; `advance_to` commits it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mark {
    pos: usize,
    line: LineNumber,
}

/// ## Whitespace tolerant literal matcher
///
/// Every grammar rule is built from `try_literal`, `go` and `expect`.
/// Whitespace may appear before any character of a literal, so
/// `std::cout<<` also matches `std :: cout < <`.

pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    line: LineNumber,
    counters: Counters,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Cursor<'a> {
        Cursor {
            text,
            pos: 0,
            line: 1,
            counters: Counters::default(),
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn line(&self) -> LineNumber {
        self.line
    }

    /// Line of the next non-whitespace character.
    pub fn peek_line(&self) -> LineNumber {
        self.skip_from(self.mark()).line
    }

    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn counters_mut(&mut self) -> &mut Counters {
        &mut self.counters
    }

    fn skip_from(&self, mark: Mark) -> Mark {
        let mut mark = mark;
        for c in self.text[mark.pos..].chars() {
            if !c.is_whitespace() {
                break;
            }
            if is_newline(c) {
                mark.line += 1;
            }
            mark.pos += c.len_utf8();
        }
        mark
    }

    pub fn skip_whitespace(&mut self) {
        let mark = self.skip_from(self.mark());
        self.advance_to(mark);
    }

    fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
        }
    }

    /// Where `s` would end if it matched here. Never moves the cursor.
    pub fn try_literal(&self, s: &str) -> Option<Mark> {
        let mut mark = self.mark();
        for c in s.chars() {
            mark = self.skip_from(mark);
            if !self.text[mark.pos..].starts_with(c) {
                return None;
            }
            mark.pos += c.len_utf8();
        }
        Some(mark)
    }

    pub fn advance_to(&mut self, mark: Mark) {
        debug_assert!(mark.pos >= self.pos);
        self.pos = mark.pos;
        self.line = mark.line;
    }

    /// Consumes `s` when it matches.
    pub fn go(&mut self, s: &str) -> bool {
        match self.try_literal(s) {
            Some(mark) => {
                self.advance_to(mark);
                true
            }
            None => false,
        }
    }

    pub fn expect(&mut self, s: &str, message: &'static str) -> Result<()> {
        if self.go(s) {
            Ok(())
        } else {
            Err(error!(SyntaxError, self.peek_line(); message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_whitespace_between_characters() {
        let mut c = Cursor::new(" std ::\tcout <<--help");
        assert!(c.go("std::cout<<"));
        assert_eq!(c.rest(), "--help");
    }

    #[test]
    fn test_failed_match_does_not_move() {
        let mut c = Cursor::new("\n\n  goto;");
        assert!(!c.go("gone"));
        assert_eq!(c.pos(), 0);
        assert_eq!(c.line(), 1);
        assert!(c.go("goto"));
        assert_eq!(c.line(), 3);
    }

    #[test]
    fn test_no_trailing_skip() {
        let mut c = Cursor::new("def\n\n(");
        assert!(c.go("def"));
        assert_eq!(c.line(), 1);
        c.skip_whitespace();
        assert_eq!(c.line(), 3);
        assert_eq!(c.rest(), "(");
    }

    #[test]
    fn test_empty_literal_always_matches() {
        let mut c = Cursor::new("x");
        assert!(c.go(""));
        assert_eq!(c.pos(), 0);
    }

    #[test]
    fn test_expect_reports_line() {
        let mut c = Cursor::new("\n\n}");
        let e = c.expect(")", "EXPECTED `)`").unwrap_err();
        assert_eq!(e.code(), ErrorCode::SyntaxError);
        assert_eq!(e.line_number(), Some(3));
        assert_eq!(e.text(), "EXPECTED `)`");
    }
}
