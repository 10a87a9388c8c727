use super::Column;

pub struct Error {
    code: ErrorCode,
    column: Column,
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
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

/// The stage of the pipeline an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Parse,
    Eval,
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            column: 0..0,
            message: "",
        }
    }

    pub fn in_column(&self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            code: self.code,
            column: column.clone(),
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            column: self.column.clone(),
            message,
        }
    }

    pub fn code(&self) -> u16 {
        self.code as u16
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn kind(&self) -> ErrorKind {
        use ErrorCode::*;
        match self.code {
            UnknownSymbol => ErrorKind::Lex,
            SyntaxError | InvalidNumber | UnexpectedEnd | TooComplex => ErrorKind::Parse,
            OutOfMemory | InternalError => ErrorKind::Eval,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnknownSymbol = 1,
    SyntaxError = 2,
    InvalidNumber = 3,
    UnexpectedEnd = 4,
    TooComplex = 5,
    OutOfMemory = 7,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let mut s = match self.code {
            UnknownSymbol => "UNKNOWN SYMBOL",
            SyntaxError => "SYNTAX ERROR",
            InvalidNumber => "INVALID NUMBER",
            UnexpectedEnd => "UNEXPECTED END OF INPUT",
            TooComplex => "EXPRESSION TOO COMPLEX",
            OutOfMemory => "OUT OF MEMORY",
            InternalError => "INTERNAL ERROR",
        }
        .to_string();
        if (0..0) != self.column {
            s.push_str(&format!(" IN ({}..{})", self.column.start, self.column.end));
        }
        if !self.message.is_empty() {
            s.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}", s)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(error!(SyntaxError).to_string(), "SYNTAX ERROR");
        assert_eq!(error!(SyntaxError).code(), 2);
        assert_eq!(
            error!(SyntaxError, ..&(3..4); "EXPECTED CLOSING PARENTHESIS").to_string(),
            "SYNTAX ERROR IN (3..4); EXPECTED CLOSING PARENTHESIS"
        );
        assert_eq!(
            error!(InternalError; "UNDERFLOW").to_string(),
            "INTERNAL ERROR; UNDERFLOW"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(error!(UnknownSymbol).kind(), ErrorKind::Lex);
        assert_eq!(error!(SyntaxError).kind(), ErrorKind::Parse);
        assert_eq!(error!(InvalidNumber).kind(), ErrorKind::Parse);
        assert_eq!(error!(UnexpectedEnd).kind(), ErrorKind::Parse);
        assert_eq!(error!(TooComplex).kind(), ErrorKind::Parse);
        assert_eq!(error!(OutOfMemory).kind(), ErrorKind::Eval);
        assert_eq!(error!(InternalError).kind(), ErrorKind::Eval);
    }
}
