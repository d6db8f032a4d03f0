//! # oxide-sql-filter
//!
//! JSON filter documents compiled to `oxide-sql-expr` expression trees.
//!
//! A filter document is a tree of `and` / `or` / `not` nodes over field
//! predicates. Converting it yields an [`Expr`] that renders and collects
//! parameters like any hand-built expression. An absent or empty document
//! yields no expression, so it can be handed to a WHERE composition without
//! adding a clause.
//!
//! ```rust
//! use oxide_sql_expr::{Conditions, DialectConfig};
//! use oxide_sql_filter::parse_filter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let document = r#"{"or": [
//!     {"field": "status", "op": "in", "value": ["new", "open"]},
//!     {"field": "email", "fn": "lower", "op": "like", "value": "%@example.com"}
//! ]}"#;
//!
//! let mut conditions = Conditions::new();
//! conditions.push("deleted_at IS NULL")?;
//! conditions.push(parse_filter(document)?)?;
//! conditions.push(parse_filter("{}")?)?;
//!
//! let expr = conditions.into_expr().ok_or("no conditions")?;
//! let (sql, params) = expr.build_condition(&DialectConfig::postgres(), 0);
//! assert_eq!(
//!     sql,
//!     r#"("deleted_at" IS NULL AND ("status" IN ($1, $2) OR LOWER("email") LIKE $3))"#
//! );
//! assert_eq!(params.len(), 3);
//! # Ok(())
//! # }
//! ```

mod error;
mod filter;

use oxide_sql_expr::Expr;
use tracing::debug;

pub use error::{FilterError, Result};
pub use filter::{AllOf, AnyOf, Empty, Filter, Negation, Op, Predicate};

/// Parses a JSON filter document into an expression.
///
/// A blank string, `null`, `{}` and combinators without non-empty children
/// all yield `Ok(None)`.
///
/// # Errors
///
/// Returns [`FilterError::Json`] if the text is not a filter document, or
/// another [`FilterError`] if a predicate cannot be converted.
pub fn parse_filter(json: &str) -> Result<Option<Expr>> {
    if json.trim().is_empty() {
        return Ok(None);
    }
    let result = serde_json::from_str::<Option<Filter>>(json)
        .map_err(FilterError::from)
        .and_then(convert);
    log_outcome(&result);
    result
}

/// Converts an already-parsed JSON value into an expression.
///
/// # Errors
///
/// See [`parse_filter`].
pub fn filter_from_value(value: serde_json::Value) -> Result<Option<Expr>> {
    let result = serde_json::from_value::<Option<Filter>>(value)
        .map_err(FilterError::from)
        .and_then(convert);
    log_outcome(&result);
    result
}

fn convert(filter: Option<Filter>) -> Result<Option<Expr>> {
    filter.map_or(Ok(None), Filter::into_expr)
}

fn log_outcome(result: &Result<Option<Expr>>) {
    match result {
        Ok(Some(_)) => debug!("converted filter document"),
        Ok(None) => debug!("filter document is empty"),
        Err(err) => debug!(error = %err, "rejected filter document"),
    }
}
