//! # oxide-sql-expr
//!
//! The SQL expression engine behind WHERE, HAVING, GROUP BY and ORDER BY
//! clauses.
//!
//! This crate provides:
//! - A lexer and recursive descent parser for a WHERE-clause subset of SQL
//! - An immutable expression tree with a builder API for everything the
//!   string grammar does not cover
//! - A dialect-aware renderer that emits SQL text and the bind parameters in
//!   placeholder order, continuing the placeholder numbering across clauses
//!
//! ## Parsing a WHERE string
//!
//! ```rust
//! use oxide_sql_expr::dialect::DialectConfig;
//! use oxide_sql_expr::parse_where;
//!
//! let expr = parse_where("UPPER(TRIM(name)) = 'JOHN' AND age >= 18").unwrap();
//! let (sql, params) = expr.build_condition(&DialectConfig::mysql(), 0);
//!
//! assert_eq!(sql, "(UPPER(TRIM(`name`)) = ? AND `age` >= ?)");
//! assert_eq!(params.len(), 2);
//! ```
//!
//! ## SQL Injection Prevention
//!
//! Values are never spliced into the SQL text:
//!
//! ```rust
//! use oxide_sql_expr::builder::{col, SqlValue};
//! use oxide_sql_expr::dialect::DialectConfig;
//!
//! let user_input = "'; DROP TABLE users; --";
//! let (sql, params) = col("name").eq(user_input).build_condition(&DialectConfig::postgres(), 0);
//!
//! assert_eq!(sql, r#""name" = $1"#);
//! assert_eq!(params, vec![SqlValue::Text(String::from(user_input))]);
//! ```

pub mod ast;
pub mod builder;
pub mod dialect;
pub mod lexer;
pub mod parser;
pub mod render;

pub use ast::{Expr, ExprKind};
pub use builder::{and, col, lit, not, or, param, Conditions, EqMap, IntoCondition, SqlValue};
pub use dialect::{Dialect, DialectConfig, DialectRegistry, PlaceholderStyle};
pub use lexer::{tokenize, LexError, Token, TokenKind};
pub use parser::{parse_where, ParseError, Parser};
pub use render::{collect_parameters, Renderer};
