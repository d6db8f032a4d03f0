//! Expression builder API.
//!
//! Trees built here render exactly like trees produced by
//! [`parse_where`](crate::parse_where), and also reach the parts of SQL the
//! string grammar does not cover (multi-argument functions, BETWEEN, CAST).
//!
//! # Example
//!
//! ```rust
//! use oxide_sql_expr::builder::{and, col};
//! use oxide_sql_expr::dialect::DialectConfig;
//!
//! let expr = and([col("active").eq(true), col("price").round_n(2).gt(10)]);
//! let (sql, params) = expr.build_condition(&DialectConfig::postgres(), 0);
//!
//! assert_eq!(sql, r#"("active" = $1 AND ROUND("price", 2) > $2)"#);
//! assert_eq!(params.len(), 2);
//! ```

mod conditions;
mod eq_map;
mod expr;
pub mod functions;
pub mod value;

pub use conditions::{Conditions, IntoCondition};
pub use eq_map::EqMap;
pub use expr::{and, col, lit, not, or, param};
pub use value::{SqlValue, ToSqlValue};
