//! WHERE/HAVING composition from mixed inputs.
//!
//! Query builders accept a condition as a WHERE string, a built expression or
//! an equality map. [`IntoCondition`] normalizes all of them; inputs that
//! describe no condition (a blank string, an empty map) are skipped rather
//! than rejected.

use tracing::trace;

use super::eq_map::EqMap;
use super::expr::and;
use crate::ast::Expr;
use crate::parser::{parse_where, ParseError};

/// Conversion into an optional condition.
pub trait IntoCondition {
    /// Returns the condition, or `None` when the input is empty.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when a WHERE string does not parse.
    fn into_condition(self) -> Result<Option<Expr>, ParseError>;
}

impl IntoCondition for Expr {
    fn into_condition(self) -> Result<Option<Expr>, ParseError> {
        Ok(Some(self))
    }
}

impl IntoCondition for Option<Expr> {
    fn into_condition(self) -> Result<Option<Expr>, ParseError> {
        Ok(self)
    }
}

impl IntoCondition for EqMap {
    fn into_condition(self) -> Result<Option<Expr>, ParseError> {
        Ok(self.into_expr())
    }
}

impl IntoCondition for &str {
    fn into_condition(self) -> Result<Option<Expr>, ParseError> {
        if self.trim().is_empty() {
            return Ok(None);
        }
        parse_where(self).map(Some)
    }
}

impl IntoCondition for String {
    fn into_condition(self) -> Result<Option<Expr>, ParseError> {
        self.as_str().into_condition()
    }
}

/// An ordered list of conditions joined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conditions {
    exprs: Vec<Expr>,
}

impl Conditions {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a condition. Empty inputs leave the list unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for an invalid WHERE string; the list is not
    /// modified in that case.
    pub fn push<C: IntoCondition>(&mut self, condition: C) -> Result<&mut Self, ParseError> {
        match condition.into_condition()? {
            Some(expr) => self.exprs.push(expr),
            None => trace!("skipping empty condition"),
        }
        Ok(self)
    }

    /// Returns the number of conditions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    /// Returns true if no condition has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Combines the conditions: `None` when empty, the condition itself when
    /// there is one, an AND otherwise.
    #[must_use]
    pub fn into_expr(mut self) -> Option<Expr> {
        match self.exprs.len() {
            0 => None,
            1 => self.exprs.pop(),
            _ => Some(and(self.exprs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::col;

    #[test]
    fn test_empty_inputs_are_skipped() {
        let mut conditions = Conditions::new();
        conditions
            .push(EqMap::new())
            .unwrap()
            .push("   ")
            .unwrap()
            .push(None::<Expr>)
            .unwrap();
        assert!(conditions.is_empty());
        assert_eq!(conditions.into_expr(), None);
    }

    #[test]
    fn test_mixed_inputs() {
        let mut conditions = Conditions::new();
        conditions
            .push("age > 18")
            .unwrap()
            .push(col("active").eq(true))
            .unwrap()
            .push(EqMap::new().with("role", "admin"))
            .unwrap();
        assert_eq!(conditions.len(), 3);
        assert_eq!(
            conditions.into_expr(),
            Some(and([
                col("age").gt(18),
                col("active").eq(true),
                col("role").eq("admin"),
            ]))
        );
    }

    #[test]
    fn test_single_condition_not_wrapped() {
        let mut conditions = Conditions::new();
        conditions.push(String::from("id = 1")).unwrap();
        assert_eq!(conditions.into_expr(), Some(col("id").eq(1)));
    }

    #[test]
    fn test_parse_error_leaves_list_unchanged() {
        let mut conditions = Conditions::new();
        conditions.push("a = 1").unwrap();
        assert!(conditions.push("a = ").is_err());
        assert_eq!(conditions.len(), 1);
    }
}
