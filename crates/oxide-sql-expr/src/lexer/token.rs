//! Token types for the WHERE-clause lexer.

use std::fmt;

use super::Span;

/// Keywords recognized by the WHERE-clause grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    And,
    Or,
    Not,
    In,
    Like,
    Is,
    Null,
}

impl Keyword {
    /// Matches an identifier against the keyword table (case-insensitive).
    #[must_use]
    pub fn lookup(ident: &str) -> Option<Self> {
        match ident.to_ascii_uppercase().as_str() {
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "IN" => Some(Self::In),
            "LIKE" => Some(Self::Like),
            "IS" => Some(Self::Is),
            "NULL" => Some(Self::Null),
            _ => None,
        }
    }

    /// Returns the canonical spelling of the keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::Like => "LIKE",
            Self::Is => "IS",
            Self::Null => "NULL",
        }
    }
}

/// Binary comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,
}

impl Operator {
    /// Returns the normalized operator text (`<>` is spelled `!=`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::LtEq => "<=",
        }
    }
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// End of input.
    Eof,
    /// Column or function name, possibly dotted or backtick-quoted.
    Identifier,
    /// Quoted string literal; the token text is the unescaped content.
    String,
    /// Numeric literal; the parser decides integer vs. float.
    Number,
    /// Comparison operator.
    Operator(Operator),
    LeftParen,
    RightParen,
    Comma,
    Keyword(Keyword),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eof => f.write_str("end of input"),
            Self::Identifier => f.write_str("identifier"),
            Self::String => f.write_str("string"),
            Self::Number => f.write_str("number"),
            Self::Operator(op) => write!(f, "operator `{}`", op.as_str()),
            Self::LeftParen => f.write_str("`(`"),
            Self::RightParen => f.write_str("`)`"),
            Self::Comma => f.write_str("`,`"),
            Self::Keyword(kw) => f.write_str(kw.as_str()),
        }
    }
}

/// A token with its text and location in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The token text. Identifiers keep their original casing.
    pub text: String,
    /// The source location.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Describes the token for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof
            | TokenKind::Operator(_)
            | TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::Comma => self.kind.to_string(),
            TokenKind::String => format!("string '{}'", self.text),
            _ => format!("{} `{}`", self.kind, self.text),
        }
    }
}
