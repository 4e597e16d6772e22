use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where the first digit is the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Invalid character in source
    E0001,
    /// Identifier too long
    E0002,
    /// String literal too long
    E0003,
    /// Unterminated string literal
    E0004,
    /// Invalid escape sequence
    E0005,
    /// Integer literal has too many digits
    E0006,
    /// Float literal has too many decimals
    E0007,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Invalid syntax
    E1002,

    // Runtime Errors (E6xxx)
    /// Non-existing variable
    E6001,
    /// Void assigned to a variable
    E6002,
    /// Non-existing attribute
    E6003,
    /// Non-existing function
    E6004,
    /// Non-existing method
    E6005,
    /// Wrong number of arguments
    E6006,
    /// Invalid type cast
    E6007,
    /// Invalid constructor arguments
    E6008,
    /// Invalid call arguments
    E6009,
    /// `break` outside of a loop
    E6010,
    /// `return` outside of a function
    E6011,
    /// List index out of range
    E6012,
    /// List index is not an int
    E6013,
    /// Loop variable name already in use
    E6014,
    /// Function defined twice
    E6015,
    /// Variable declared twice in one scope
    E6016,
    /// Division by zero
    E6017,
    /// Operand or condition of the wrong type
    E6018,
    /// Equality between different types
    E6019,
    /// Recursion limit exceeded
    E6020,
}

impl ErrorCode {
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_runtime_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E6009 => "E6009",
            ErrorCode::E6010 => "E6010",
            ErrorCode::E6011 => "E6011",
            ErrorCode::E6012 => "E6012",
            ErrorCode::E6013 => "E6013",
            ErrorCode::E6014 => "E6014",
            ErrorCode::E6015 => "E6015",
            ErrorCode::E6016 => "E6016",
            ErrorCode::E6017 => "E6017",
            ErrorCode::E6018 => "E6018",
            ErrorCode::E6019 => "E6019",
            ErrorCode::E6020 => "E6020",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
