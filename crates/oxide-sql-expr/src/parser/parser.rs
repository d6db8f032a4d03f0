//! WHERE-clause parser implementation.

use tracing::{debug, trace};

use super::error::ParseError;
use crate::ast::Expr;
use crate::builder::functions;
use crate::builder::value::SqlValue;
use crate::builder::{and, not, or};
use crate::lexer::{tokenize, Keyword, Operator, Span, Token, TokenKind};

/// Maximum nesting of parentheses, NOT chains and function calls.
pub const MAX_DEPTH: usize = 64;

/// Parses a WHERE-clause string into an expression tree.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input does not tokenize or does not match
/// the WHERE grammar.
pub fn parse_where(input: &str) -> Result<Expr, ParseError> {
    trace!(input, "parsing WHERE expression");
    let result = tokenize(input)
        .map_err(ParseError::from)
        .and_then(|tokens| Parser::new(tokens).parse());
    if let Err(err) = &result {
        debug!(input, error = %err, "rejected WHERE expression");
    }
    result
}

/// WHERE-clause parser over a token sequence.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    eof: Token,
}

impl Parser {
    /// Creates a parser over `tokens`. A missing trailing end-of-input token
    /// is implied.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens.last().map_or(0, |t| t.span.end);
        Self {
            tokens,
            pos: 0,
            depth: 0,
            eof: Token::new(TokenKind::Eof, "", Span::at(end)),
        }
    }

    /// Parses the whole token sequence as one expression.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the tokens do not form a valid expression
    /// or if tokens remain after it.
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_or()?;
        if !self.current().is_eof() {
            return Err(self.unexpected("AND, OR or end of input"));
        }
        Ok(expr)
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut items = vec![self.parse_and()?];
        while self.check_keyword(Keyword::Or) {
            self.advance();
            items.push(self.parse_and()?);
        }
        Ok(collapse(items, or::<Vec<Expr>>))
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut items = vec![self.parse_not()?];
        while self.check_keyword(Keyword::And) {
            self.advance();
            items.push(self.parse_not()?);
        }
        Ok(collapse(items, and::<Vec<Expr>>))
    }

    fn parse_not(&mut self) -> Result<Expr, ParseError> {
        if !self.check_keyword(Keyword::Not) {
            return self.parse_comparison();
        }
        self.enter()?;
        self.advance();
        let inner = self.parse_not()?;
        self.leave();
        Ok(not(inner))
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        if self.check(TokenKind::LeftParen) {
            self.enter()?;
            let open = self.current().span.start;
            self.advance();
            let expr = self.parse_or()?;
            self.expect_close(open)?;
            self.leave();
            return Ok(expr);
        }

        let base = self.parse_primary()?;
        match self.current().kind {
            TokenKind::Keyword(Keyword::Is) => {
                self.advance();
                let negated = self.check_keyword(Keyword::Not);
                if negated {
                    self.advance();
                }
                if !self.check_keyword(Keyword::Null) {
                    return Err(self.unexpected("NULL"));
                }
                self.advance();
                Ok(if negated {
                    base.is_not_null()
                } else {
                    base.is_null()
                })
            }
            TokenKind::Keyword(Keyword::Not) => {
                self.advance();
                match self.current().kind {
                    TokenKind::Keyword(Keyword::In) => {
                        self.advance();
                        Ok(base.not_in_list(self.parse_value_list()?))
                    }
                    TokenKind::Keyword(Keyword::Like) => {
                        self.advance();
                        Ok(base.not_like(self.parse_pattern()?))
                    }
                    _ => Err(self.unexpected("IN or LIKE after NOT")),
                }
            }
            TokenKind::Keyword(Keyword::In) => {
                self.advance();
                Ok(base.in_list(self.parse_value_list()?))
            }
            TokenKind::Keyword(Keyword::Like) => {
                self.advance();
                Ok(base.like(self.parse_pattern()?))
            }
            TokenKind::Operator(op) => {
                self.advance();
                let value = self.parse_value()?;
                Ok(match op {
                    Operator::Eq => base.eq(value),
                    Operator::NotEq => base.not_eq(value),
                    Operator::Gt => base.gt(value),
                    Operator::GtEq => base.gt_eq(value),
                    Operator::Lt => base.lt(value),
                    Operator::LtEq => base.lt_eq(value),
                })
            }
            _ => Err(self.unexpected("comparison operator, IS, IN or LIKE")),
        }
    }

    /// Parses a column or a single-argument function call.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        if !self.check(TokenKind::Identifier) {
            return Err(self.unexpected("column or function name"));
        }
        let name = self.current().text.clone();
        let position = self.current().span.start;
        self.advance();

        if !self.check(TokenKind::LeftParen) {
            return Ok(Expr::column(&name));
        }
        if !functions::is_known(&name) {
            return Err(ParseError::UnknownFunction { name, position });
        }

        self.enter()?;
        let open = self.current().span.start;
        self.advance();
        if !self.check(TokenKind::Identifier) {
            if self.next_kind() == TokenKind::Comma {
                return Err(ParseError::MultiArgumentFunction { name, position });
            }
            return Err(self.unexpected("a single column argument"));
        }
        let arg = self.parse_primary()?;
        if self.check(TokenKind::Comma) {
            return Err(ParseError::MultiArgumentFunction { name, position });
        }
        self.expect_close(open)?;
        self.leave();

        functions::apply(&name, arg).ok_or(ParseError::UnknownFunction { name, position })
    }

    fn parse_value_list(&mut self) -> Result<Vec<SqlValue>, ParseError> {
        if !self.check(TokenKind::LeftParen) {
            return Err(self.unexpected("`(`"));
        }
        let open = self.current().span.start;
        self.advance();
        if self.check(TokenKind::RightParen) {
            return Err(ParseError::EmptyInList { position: open });
        }

        let mut values = vec![self.parse_value()?];
        while self.check(TokenKind::Comma) {
            self.advance();
            values.push(self.parse_value()?);
        }
        self.expect_close(open)?;
        Ok(values)
    }

    fn parse_pattern(&mut self) -> Result<SqlValue, ParseError> {
        let token = self.current();
        if token.kind != TokenKind::String {
            return Err(ParseError::NonStringPattern {
                found: token.describe(),
                position: token.span.start,
            });
        }
        let pattern = SqlValue::Text(token.text.clone());
        self.advance();
        Ok(pattern)
    }

    fn parse_value(&mut self) -> Result<SqlValue, ParseError> {
        let token = self.current();
        let value = match token.kind {
            TokenKind::String => SqlValue::Text(token.text.clone()),
            TokenKind::Number => parse_number(token)?,
            TokenKind::Keyword(Keyword::Null) => SqlValue::Null,
            _ => return Err(self.unexpected("string, number or NULL")),
        };
        self.advance();
        Ok(value)
    }

    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Kind of the token after the current one.
    fn next_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.check(TokenKind::Keyword(keyword))
    }

    /// Consumes the `)` matching the parenthesis opened at `open`.
    fn expect_close(&mut self, open: usize) -> Result<(), ParseError> {
        match self.current().kind {
            TokenKind::RightParen => {
                self.advance();
                Ok(())
            }
            TokenKind::Eof => Err(ParseError::UnclosedParen { position: open }),
            _ => Err(self.unexpected("`)`")),
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep {
                limit: MAX_DEPTH,
                position: self.current().span.start,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.current();
        ParseError::UnexpectedToken {
            expected: String::from(expected),
            found: token.describe(),
            position: token.span.start,
        }
    }
}

/// Returns the single item itself, or the combinator over all of them.
fn collapse(mut items: Vec<Expr>, combine: fn(Vec<Expr>) -> Expr) -> Expr {
    if items.len() == 1 {
        if let Some(only) = items.pop() {
            return only;
        }
    }
    combine(items)
}

/// Integer when the text has no decimal point and fits in `i64`, float
/// otherwise.
fn parse_number(token: &Token) -> Result<SqlValue, ParseError> {
    let text = token.text.as_str();
    if !text.contains('.') {
        if let Ok(n) = text.parse::<i64>() {
            return Ok(SqlValue::Int(n));
        }
    }
    text.parse::<f64>()
        .map(SqlValue::Float)
        .map_err(|_| ParseError::InvalidNumber {
            text: String::from(text),
            position: token.span.start,
        })
}
