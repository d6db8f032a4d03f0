//! Lexer errors.

/// An error produced while tokenizing a WHERE-clause string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A quoted string literal had no closing quote.
    #[error("unterminated string literal starting at position {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        offset: usize,
    },

    /// A character that cannot start any token.
    #[error("unexpected character {ch:?} at position {offset}")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Byte offset of the character.
        offset: usize,
    },
}

impl LexError {
    /// Byte offset of the offending input.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnterminatedString { offset } | Self::UnexpectedCharacter { offset, .. } => {
                *offset
            }
        }
    }
}
