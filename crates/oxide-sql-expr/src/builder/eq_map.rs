//! Equality-map shorthand: `{column: value, ...}` as an AND of equalities.

use std::collections::HashMap;

use super::expr::and;
use super::value::{SqlValue, ToSqlValue};
use crate::ast::Expr;

/// An unordered column-to-value mapping.
///
/// Converting to an expression sorts the columns, so two maps with the same
/// entries always render the same SQL and the same parameter order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EqMap {
    entries: HashMap<String, SqlValue>,
}

impl EqMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the value for `column`.
    #[must_use]
    pub fn with<T: ToSqlValue>(mut self, column: &str, value: T) -> Self {
        self.insert(column, value);
        self
    }

    /// Adds or replaces the value for `column`.
    pub fn insert<T: ToSqlValue>(&mut self, column: &str, value: T) -> Option<SqlValue> {
        self.entries
            .insert(String::from(column), value.to_sql_value())
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts the map into an expression.
    ///
    /// One entry yields a single equality, several yield an AND of
    /// equalities in column order, and an empty map yields `None`.
    #[must_use]
    pub fn into_expr(self) -> Option<Expr> {
        let mut entries: Vec<(String, SqlValue)> = self.entries.into_iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        let mut conditions: Vec<Expr> = entries
            .into_iter()
            .map(|(column, value)| Expr::column(&column).eq(value))
            .collect();
        match conditions.len() {
            0 => None,
            1 => conditions.pop(),
            _ => Some(and(conditions)),
        }
    }
}

impl<K: Into<String>, V: ToSqlValue> FromIterator<(K, V)> for EqMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_sql_value()))
                .collect(),
        }
    }
}

impl From<HashMap<String, SqlValue>> for EqMap {
    fn from(entries: HashMap<String, SqlValue>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::col;

    #[test]
    fn test_empty_map_is_no_expression() {
        assert!(EqMap::new().is_empty());
        assert_eq!(EqMap::new().into_expr(), None);
    }

    #[test]
    fn test_single_entry_is_plain_equality() {
        let expr = EqMap::new().with("status", "active").into_expr();
        assert_eq!(expr, Some(col("status").eq("active")));
    }

    #[test]
    fn test_entries_sorted_by_column() {
        let forward: EqMap = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        let backward: EqMap = [("c", 3), ("b", 2), ("a", 1)].into_iter().collect();
        let expected = and([col("a").eq(1), col("b").eq(2), col("c").eq(3)]);
        assert_eq!(forward.into_expr(), Some(expected.clone()));
        assert_eq!(backward.into_expr(), Some(expected));
    }

    #[test]
    fn test_insert_replaces() {
        let mut map = EqMap::new();
        assert_eq!(map.insert("a", 1), None);
        assert_eq!(map.insert("a", 2), Some(SqlValue::Int(1)));
        assert_eq!(map.len(), 1);
    }
}
