use super::LineNumber;

pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: "",
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn text(&self) -> &'static str {
        self.message
    }

    /// Stamps a source line on the error unless an inner statement
    /// already did. The innermost line is the useful one.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        Error {
            line_number: self.line_number.or(Some(line)),
            ..self
        }
    }

    pub fn message(self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error { message, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError = 2,
    IllegalFunctionCall = 5,
    Overflow = 6,
    SubscriptOutOfRange = 9,
    DivisionByZero = 11,
    TypeMismatch = 13,
    SemanticError = 24,
    Break = 25,
    InternalError = 51,
    DiskIoError = 57,
    InputPastEnd = 62,
}

impl From<std::io::Error> for Error {
    fn from(_: std::io::Error) -> Self {
        error!(DiskIoError)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self.code {
            SyntaxError => "SYNTAX ERROR",
            IllegalFunctionCall => "ILLEGAL FUNCTION CALL",
            Overflow => "OVERFLOW",
            SubscriptOutOfRange => "SUBSCRIPT OUT OF RANGE",
            DivisionByZero => "DIVISION BY ZERO",
            TypeMismatch => "TYPE MISMATCH",
            SemanticError => "SEMANTIC ERROR",
            Break => "BREAK",
            InternalError => "INTERNAL ERROR",
            DiskIoError => "DISK I/O ERROR",
            InputPastEnd => "INPUT PAST END",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if suffix.is_empty() {
            write!(f, "{}", code_str)
        } else if self.line_number.is_some() {
            write!(f, "{} IN{}", code_str, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_line_and_message() {
        let e = error!(SyntaxError, 12; "LABEL EXPECTED");
        assert_eq!(e.to_string(), "SYNTAX ERROR IN 12; LABEL EXPECTED");
    }

    #[test]
    fn test_display_bare() {
        assert_eq!(error!(Break).to_string(), "BREAK");
        assert_eq!(
            error!(InputPastEnd; "NO MORE INPUT").to_string(),
            "INPUT PAST END; NO MORE INPUT"
        );
    }

    #[test]
    fn test_innermost_line_wins() {
        let e = error!(Overflow, 3).in_line_number(1);
        assert_eq!(e.line_number(), Some(3));
        assert_eq!(e.code(), ErrorCode::Overflow);
    }
}
