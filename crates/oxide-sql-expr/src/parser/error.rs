//! Parser error types.

use crate::lexer::LexError;

/// An error produced while parsing a WHERE-clause string.
///
/// Every variant names the byte offset of the offending input so the message
/// can be shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A token other than the expected one.
    #[error("unexpected token at position {position}: expected {expected}, found {found}")]
    UnexpectedToken {
        /// What the grammar allows here.
        expected: String,
        /// Description of the token found.
        found: String,
        /// Byte offset of the token found.
        position: usize,
    },

    /// A parenthesis or function call that is never closed.
    #[error("unclosed parenthesis opened at position {position}")]
    UnclosedParen {
        /// Byte offset of the opening parenthesis.
        position: usize,
    },

    /// A function called with more than one argument.
    #[error(
        "function {name} at position {position} has more than one argument; \
         WHERE strings accept one column argument, build the expression instead"
    )]
    MultiArgumentFunction {
        /// Function name as written.
        name: String,
        /// Byte offset of the function name.
        position: usize,
    },

    /// A function name outside the supported set.
    #[error("unknown function {name} at position {position}")]
    UnknownFunction {
        /// Function name as written.
        name: String,
        /// Byte offset of the function name.
        position: usize,
    },

    /// `IN ()` with no values.
    #[error("IN list at position {position} must contain at least one value")]
    EmptyInList {
        /// Byte offset of the opening parenthesis.
        position: usize,
    },

    /// A LIKE pattern that is not a string literal.
    #[error("LIKE pattern at position {position} must be a string, found {found}")]
    NonStringPattern {
        /// Description of the token found.
        found: String,
        /// Byte offset of the pattern.
        position: usize,
    },

    /// A numeric token that is neither an integer nor a float.
    #[error("invalid number {text:?} at position {position}")]
    InvalidNumber {
        /// The token text.
        text: String,
        /// Byte offset of the token.
        position: usize,
    },

    /// Nesting beyond the parser's depth limit.
    #[error("expression nested deeper than {limit} levels at position {position}")]
    TooDeep {
        /// The depth limit.
        limit: usize,
        /// Byte offset where the limit was hit.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset of the offending input.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(err) => err.offset(),
            Self::UnexpectedToken { position, .. }
            | Self::UnclosedParen { position }
            | Self::MultiArgumentFunction { position, .. }
            | Self::UnknownFunction { position, .. }
            | Self::EmptyInList { position }
            | Self::NonStringPattern { position, .. }
            | Self::InvalidNumber { position, .. }
            | Self::TooDeep { position, .. } => *position,
        }
    }
}
