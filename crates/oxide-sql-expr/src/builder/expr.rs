//! Column, literal, parameter, comparison and combinator builders.

use super::value::{SqlValue, ToSqlValue};
use crate::ast::{Combinator, CompareOp, Condition, Direction, Expr, ExprKind, Verb};

/// Creates a column reference.
#[must_use]
pub fn col(name: &str) -> Expr {
    Expr::column(name)
}

/// Creates a raw literal emitted verbatim.
///
/// **Warning**: the text is not escaped; never pass user input.
#[must_use]
pub fn lit(text: &str) -> Expr {
    Expr::literal(text)
}

/// Creates a bind parameter.
#[must_use]
pub fn param<T: ToSqlValue>(value: T) -> Expr {
    Expr::param(value)
}

/// Combines expressions with AND.
#[must_use]
pub fn and<I: IntoIterator<Item = Expr>>(exprs: I) -> Expr {
    Expr::bare(ExprKind::Combinator(Combinator::And(
        exprs.into_iter().collect(),
    )))
}

/// Combines expressions with OR.
#[must_use]
pub fn or<I: IntoIterator<Item = Expr>>(exprs: I) -> Expr {
    Expr::bare(ExprKind::Combinator(Combinator::Or(
        exprs.into_iter().collect(),
    )))
}

/// Negates an expression. `not(None::<Expr>)` renders as nothing.
#[must_use]
pub fn not(expr: impl Into<Option<Expr>>) -> Expr {
    Expr::bare(ExprKind::Combinator(Combinator::Not(
        expr.into().map(Box::new),
    )))
}

impl Expr {
    /// Creates a column reference.
    #[must_use]
    pub fn column(name: &str) -> Self {
        Self::bare(ExprKind::Column(String::from(name)))
    }

    /// Creates a raw literal emitted verbatim.
    #[must_use]
    pub fn literal(text: &str) -> Self {
        Self::bare(ExprKind::Literal(String::from(text)))
    }

    /// Creates a bind parameter.
    #[must_use]
    pub fn param<T: ToSqlValue>(value: T) -> Self {
        Self::bare(ExprKind::Param(value.to_sql_value()))
    }

    /// Anchors `verb` to this node. An existing condition is replaced rather
    /// than nested, and alias and direction are dropped.
    fn condition(self, verb: Verb) -> Self {
        let base = match self.kind {
            ExprKind::Condition(existing) => *existing.base,
            kind => Self::bare(kind),
        };
        Self::bare(ExprKind::Condition(Condition {
            base: Box::new(base),
            verb,
        }))
    }

    fn compare<T: ToSqlValue>(self, op: CompareOp, value: T) -> Self {
        self.condition(Verb::Compare(op, value.to_sql_value()))
    }

    /// Creates an equality condition.
    #[must_use]
    pub fn eq<T: ToSqlValue>(self, value: T) -> Self {
        self.compare(CompareOp::Eq, value)
    }

    /// Creates an inequality condition.
    #[must_use]
    pub fn not_eq<T: ToSqlValue>(self, value: T) -> Self {
        self.compare(CompareOp::NotEq, value)
    }

    /// Creates a greater-than condition.
    #[must_use]
    pub fn gt<T: ToSqlValue>(self, value: T) -> Self {
        self.compare(CompareOp::Gt, value)
    }

    /// Creates a greater-than-or-equal condition.
    #[must_use]
    pub fn gt_eq<T: ToSqlValue>(self, value: T) -> Self {
        self.compare(CompareOp::GtEq, value)
    }

    /// Creates a less-than condition.
    #[must_use]
    pub fn lt<T: ToSqlValue>(self, value: T) -> Self {
        self.compare(CompareOp::Lt, value)
    }

    /// Creates a less-than-or-equal condition.
    #[must_use]
    pub fn lt_eq<T: ToSqlValue>(self, value: T) -> Self {
        self.compare(CompareOp::LtEq, value)
    }

    /// Creates a LIKE condition.
    #[must_use]
    pub fn like<T: ToSqlValue>(self, pattern: T) -> Self {
        self.compare(CompareOp::Like, pattern)
    }

    /// Creates a NOT LIKE condition.
    #[must_use]
    pub fn not_like<T: ToSqlValue>(self, pattern: T) -> Self {
        self.compare(CompareOp::NotLike, pattern)
    }

    /// Creates an IN condition with one placeholder per value.
    #[must_use]
    pub fn in_list<T: ToSqlValue, I: IntoIterator<Item = T>>(self, values: I) -> Self {
        let values = values.into_iter().map(ToSqlValue::to_sql_value).collect();
        self.condition(Verb::In {
            negated: false,
            values,
        })
    }

    /// Creates a NOT IN condition.
    #[must_use]
    pub fn not_in_list<T: ToSqlValue, I: IntoIterator<Item = T>>(self, values: I) -> Self {
        let values = values.into_iter().map(ToSqlValue::to_sql_value).collect();
        self.condition(Verb::In {
            negated: true,
            values,
        })
    }

    /// Creates an IS NULL condition.
    #[must_use]
    pub fn is_null(self) -> Self {
        self.condition(Verb::IsNull { negated: false })
    }

    /// Creates an IS NOT NULL condition.
    #[must_use]
    pub fn is_not_null(self) -> Self {
        self.condition(Verb::IsNull { negated: true })
    }

    /// Creates a BETWEEN condition.
    #[must_use]
    pub fn between<T: ToSqlValue, U: ToSqlValue>(self, low: T, high: U) -> Self {
        self.condition(Verb::Between {
            negated: false,
            low: low.to_sql_value(),
            high: high.to_sql_value(),
        })
    }

    /// Creates a NOT BETWEEN condition.
    #[must_use]
    pub fn not_between<T: ToSqlValue, U: ToSqlValue>(self, low: T, high: U) -> Self {
        self.condition(Verb::Between {
            negated: true,
            low: low.to_sql_value(),
            high: high.to_sql_value(),
        })
    }

    /// Combines this expression and `other` with AND.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        and([self, other])
    }

    /// Combines this expression and `other` with OR.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        or([self, other])
    }

    /// Negates this expression.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        not(self)
    }

    /// Sets the alias used by value rendering.
    #[must_use]
    pub fn alias(mut self, alias: &str) -> Self {
        self.alias = Some(String::from(alias));
        self
    }

    /// Marks the expression for ascending order.
    #[must_use]
    pub fn asc(mut self) -> Self {
        self.direction = Some(Direction::Asc);
        self
    }

    /// Marks the expression for descending order.
    #[must_use]
    pub fn desc(mut self) -> Self {
        self.direction = Some(Direction::Desc);
        self
    }
}

impl From<SqlValue> for Expr {
    fn from(value: SqlValue) -> Self {
        Self::bare(ExprKind::Param(value))
    }
}
