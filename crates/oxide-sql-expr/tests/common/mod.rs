#![allow(dead_code)]

use oxide_sql_expr::{parse_where, DialectConfig, Expr, ParseError, SqlValue};

pub fn parse(sql: &str) -> Expr {
    parse_where(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    parse_where(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn mysql() -> DialectConfig {
    DialectConfig::mysql()
}

pub fn postgres() -> DialectConfig {
    DialectConfig::postgres()
}

/// Parses `sql` and renders it as a MySQL condition.
pub fn where_mysql(sql: &str) -> (String, Vec<SqlValue>) {
    parse(sql).build_condition(&mysql(), 0)
}

pub fn text(s: &str) -> SqlValue {
    SqlValue::Text(String::from(s))
}

/// Extracts the numbers of all `prefix<N>` placeholders in `sql`, in order.
pub fn placeholder_numbers(sql: &str, prefix: &str) -> Vec<usize> {
    let mut numbers = Vec::new();
    let mut rest = sql;
    while let Some(idx) = rest.find(prefix) {
        rest = &rest[idx + prefix.len()..];
        let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
        if let Ok(n) = digits.parse() {
            numbers.push(n);
        }
        rest = &rest[digits.len()..];
    }
    numbers
}
