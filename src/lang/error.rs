use super::Column;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    column: Column,
    source: String,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            column: 0..0,
            source: String::new(),
            message: "",
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    /// One-based character offset of the offending token.
    pub fn position(&self) -> usize {
        self.column.start + 1
    }

    pub fn source_text(&self) -> &str {
        &self.source
    }

    pub fn is_compile_error(&self) -> bool {
        match self.code {
            ErrorCode::UncompiledFunction | ErrorCode::CodeDamaged | ErrorCode::WrongValueCount => {
                false
            }
            // The parser reports overly deep nesting with a column, the machine without.
            ErrorCode::StackOverflow => !self.column.is_empty(),
            _ => true,
        }
    }

    pub fn in_column(self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn in_source(self, source: &str) -> Error {
        Error {
            source: source.to_string(),
            ..self
        }
    }

    pub fn message(self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error { message, ..self }
    }

    /// The three line message shown to whoever typed the formula.
    pub fn report(&self) -> String {
        format!(
            "Error in function string: {}\nError: {}\nPosition: {}",
            self.source,
            self.code.description(),
            self.position()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    SyntaxError = 1,
    ParenExpected = 2,
    UncompiledFunction = 3,
    ExpressionExpected = 4,
    UnknownIdentifier = 5,
    OperatorExpected = 6,
    ParenNotMatch = 7,
    CodeDamaged = 8,
    StackOverflow = 9,
    TooManyConstants = 10,
    CommaExpected = 11,
    InvalidOperand = 12,
    InvalidOperator = 13,
    NoReferenceSeparator = 14,
    ReferenceNameExpected = 15,
    WrongValueCount = 16,
}

impl ErrorCode {
    pub fn description(&self) -> &'static str {
        use ErrorCode::*;
        match self {
            SyntaxError => "syntax error",
            ParenExpected => "parenthesis expected",
            UncompiledFunction => "uncompiled function",
            ExpressionExpected => "expression expected",
            UnknownIdentifier => "unknown identifier",
            OperatorExpected => "operator expected",
            ParenNotMatch => "parentheses do not match",
            CodeDamaged => "internal error: code damaged",
            StackOverflow => "stack overflow",
            TooManyConstants => "too many constants",
            CommaExpected => "comma expected",
            InvalidOperand => "invalid operand",
            InvalidOperator => "invalid operator",
            NoReferenceSeparator => "missing reference definition separator",
            ReferenceNameExpected => "reference name expected",
            WrongValueCount => "wrong number of variable values",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if self.is_compile_error() {
            suffix.push_str(&format!(" AT {}", self.position()));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(
            f,
            "{}{}",
            self.code.description().to_ascii_uppercase(),
            suffix
        )
    }
}

impl std::error::Error for Error {}
