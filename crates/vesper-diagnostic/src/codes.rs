//! Error codes for Vesper diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Reader errors (E0001 - E0099)
    UnexpectedEof,
    UnexpectedCloseParen,

    // Eval errors (E0100 - E0199)
    MalformedForm,
    UnboundSymbol,
    TypeOrArity,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Reader
            ErrorCode::UnexpectedEof => "E0001",
            ErrorCode::UnexpectedCloseParen => "E0002",

            // Eval
            ErrorCode::MalformedForm => "E0100",
            ErrorCode::UnboundSymbol => "E0101",
            ErrorCode::TypeOrArity => "E0102",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::UnexpectedEof => "input ended in the middle of a form",
            ErrorCode::UnexpectedCloseParen => "closing parenthesis with no matching opener",
            ErrorCode::MalformedForm => "special form has the wrong shape",
            ErrorCode::UnboundSymbol => "symbol has no binding in any enclosing scope",
            ErrorCode::TypeOrArity => "procedure applied to the wrong value or number of values",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::UnexpectedEof => Some("add the missing closing parenthesis"),
            ErrorCode::UnexpectedCloseParen => Some("remove the stray `)` or add an opener"),
            ErrorCode::UnboundSymbol => {
                Some("check the spelling or define the symbol before using it")
            }
            _ => None,
        }
    }
}
