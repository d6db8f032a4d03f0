//! WHERE-clause lexer.
//!
//! Turns a WHERE-clause string into a flat sequence of tokens terminated by
//! [`TokenKind::Eof`].

mod error;
mod span;
mod token;
mod tokenizer;

pub use error::LexError;
pub use span::Span;
pub use token::{Keyword, Operator, Token, TokenKind};
pub use tokenizer::{tokenize, Lexer};
