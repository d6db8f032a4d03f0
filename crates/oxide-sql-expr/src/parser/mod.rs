//! WHERE-clause parser.
//!
//! A hand-written recursive descent parser over the lexer's token stream.
//! Binding from loosest to tightest: `OR`, `AND`, `NOT`, comparison.
//!
//! ```text
//! expr       := or
//! or         := and (OR and)*
//! and        := not (AND not)*
//! not        := NOT not | comparison
//! comparison := '(' expr ')'
//!             | primary IS [NOT] NULL
//!             | primary [NOT] IN '(' value (',' value)* ')'
//!             | primary [NOT] LIKE value
//!             | primary operator value
//! primary    := IDENT | IDENT '(' primary ')'
//! value      := STRING | NUMBER | NULL
//! ```

mod error;
#[allow(clippy::module_inception)]
mod parser;

pub use error::ParseError;
pub use parser::{parse_where, Parser, MAX_DEPTH};
