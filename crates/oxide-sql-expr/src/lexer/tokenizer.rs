//! WHERE-clause tokenizer implementation.

use super::{Keyword, LexError, Operator, Span, Token, TokenKind};

/// Tokenizes `input` in one call.
///
/// # Errors
///
/// Returns a [`LexError`] on an unterminated string or an unexpected
/// character.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

/// A lexer over a WHERE-clause string.
pub struct Lexer<'a> {
    /// The input source.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.advance();
        }
    }

    fn span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Token whose text is the consumed source slice.
    fn token(&self, kind: TokenKind) -> Token {
        Token::new(kind, &self.input[self.start..self.pos], self.span())
    }

    fn operator(&self, op: Operator) -> Token {
        Token::new(TokenKind::Operator(op), op.as_str(), self.span())
    }

    /// Scans a quoted string. A backslash escapes the closing quote.
    fn scan_string(&mut self, quote: char) -> Result<Token, LexError> {
        let mut value = String::new();
        loop {
            match self.advance() {
                Some('\\') if self.peek() == Some(quote) => {
                    self.advance();
                    value.push(quote);
                }
                Some(c) if c == quote => break,
                Some(c) => value.push(c),
                None => return Err(LexError::UnterminatedString { offset: self.start }),
            }
        }
        Ok(Token::new(TokenKind::String, value, self.span()))
    }

    /// Scans a backtick-quoted identifier verbatim, quotes included.
    ///
    /// A missing closing backtick is not an error: the identifier runs to the
    /// end of the input.
    fn scan_backtick_identifier(&mut self) -> Token {
        while let Some(c) = self.advance() {
            if c == '`' {
                break;
            }
        }
        self.token(TokenKind::Identifier)
    }

    /// Scans an unquoted identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '.')
        {
            self.advance();
        }
        let text = &self.input[self.start..self.pos];
        match Keyword::lookup(text) {
            Some(kw) => self.token(TokenKind::Keyword(kw)),
            None => self.token(TokenKind::Identifier),
        }
    }

    /// Scans digits with at most one decimal point. A leading `-` has already
    /// been consumed.
    fn scan_number(&mut self) -> Token {
        let mut seen_dot = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                self.advance();
            } else {
                break;
            }
        }
        self.token(TokenKind::Number)
    }

    /// Scans the next token.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] on an unterminated string or an unexpected
    /// character.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return Ok(Token::new(TokenKind::Eof, "", Span::at(self.pos)));
        };

        let token = match c {
            '(' => self.token(TokenKind::LeftParen),
            ')' => self.token(TokenKind::RightParen),
            ',' => self.token(TokenKind::Comma),
            '=' => self.operator(Operator::Eq),
            '!' if self.peek() == Some('=') => {
                self.advance();
                self.operator(Operator::NotEq)
            }
            '>' if self.peek() == Some('=') => {
                self.advance();
                self.operator(Operator::GtEq)
            }
            '>' => self.operator(Operator::Gt),
            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    self.operator(Operator::LtEq)
                }
                Some('>') => {
                    self.advance();
                    self.operator(Operator::NotEq)
                }
                _ => self.operator(Operator::Lt),
            },
            '\'' | '"' => self.scan_string(c)?,
            '`' => self.scan_backtick_identifier(),
            '-' if self.peek().is_some_and(|n| n.is_ascii_digit()) => self.scan_number(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_alphabetic() || c == '_' => self.scan_identifier(),
            ch => {
                return Err(LexError::UnexpectedCharacter {
                    ch,
                    offset: self.start,
                })
            }
        };
        Ok(token)
    }

    /// Tokenizes the entire input. The last token is always [`TokenKind::Eof`].
    ///
    /// # Errors
    ///
    /// Returns the first [`LexError`] encountered.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }
}
