use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: LineNumber,
    message: String,
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
            code: code as u16,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn in_line_number(&self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            code: self.code,
            line_number: line,
            message: self.message.clone(),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line_number: self.line_number,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    SyntaxError = 2,
    UnknownInstruction = 3,
    WrongNumberOfOperands = 4,
    IllegalNumberOfLines = 5,
    UndefinedLabel = 8,
    UndefinedVariable = 9,
    DuplicateDefinition = 10,
    TooManyVariables = 11,
    NameTooLong = 12,
    TypeMismatch = 13,
    IllegalLiteral = 14,
    StringTooLong = 15,
    IllegalRegister = 16,
    EndOfScript = 17,
    CallStackOverflow = 18,
    CallFailed = 19,
    Break = 20,
    ExecutionTimeout = 21,
    InternalError = 51,
    FileNotFound = 53,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            3 => "UNKNOWN INSTRUCTION",
            4 => "WRONG NUMBER OF OPERANDS",
            5 => "ILLEGAL NUMBER OF LINES",
            8 => "UNDEFINED LABEL",
            9 => "UNDEFINED VARIABLE",
            10 => "DUPLICATE DEFINITION",
            11 => "TOO MANY VARIABLES",
            12 => "NAME TOO LONG",
            13 => "TYPE MISMATCH",
            14 => "ILLEGAL LITERAL",
            15 => "STRING TOO LONG",
            16 => "ILLEGAL REGISTER",
            17 => "END OF SCRIPT",
            18 => "CALL STACK OVERFLOW",
            19 => "CALL FAILED",
            20 => "BREAK",
            21 => "EXECUTION TIMEOUT",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "SCRIPT ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(error!(UndefinedLabel).to_string(), "UNDEFINED LABEL");
        assert_eq!(
            error!(UndefinedLabel, Some(4); "foo").to_string(),
            "UNDEFINED LABEL IN 4; foo"
        );
        assert_eq!(error!(Break, Some(0)).to_string(), "BREAK IN 0");
        assert_eq!(error!(ExecutionTimeout).to_string(), "EXECUTION TIMEOUT");
        assert_eq!(
            error!(UndefinedLabel; "main").to_string(),
            "UNDEFINED LABEL; main"
        );
    }

    #[test]
    fn test_is() {
        let e = error!(TypeMismatch; "x");
        assert!(e.is(ErrorCode::TypeMismatch));
        assert!(!e.is(ErrorCode::StringTooLong));
        assert_eq!(e.code(), 13);
    }
}
