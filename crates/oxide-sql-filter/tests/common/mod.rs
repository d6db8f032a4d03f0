#![allow(dead_code)]

use oxide_sql_expr::{DialectConfig, Expr, SqlValue};
use oxide_sql_filter::{parse_filter, FilterError};

pub fn expr(json: &str) -> Expr {
    parse_filter(json)
        .unwrap_or_else(|e| panic!("Failed to convert: {json}\nError: {e}"))
        .unwrap_or_else(|| panic!("Filter is empty: {json}"))
}

pub fn filter_err(json: &str) -> FilterError {
    parse_filter(json).expect_err(&format!("Expected filter error for: {json}"))
}

pub fn render_pg(json: &str) -> (String, Vec<SqlValue>) {
    expr(json).build_condition(&DialectConfig::postgres(), 0)
}

pub fn text(s: &str) -> SqlValue {
    SqlValue::Text(String::from(s))
}
