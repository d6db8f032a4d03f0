//! The filter document and its conversion into an expression tree.

use std::fmt;

use oxide_sql_expr::builder::{and, col, functions, or};
use oxide_sql_expr::{Expr, SqlValue};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{FilterError, Result};

/// Predicate operators, spelled in snake case in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    NotIn,
    Like,
    NotLike,
    IsNull,
    IsNotNull,
    Between,
    NotBetween,
}

impl Op {
    /// Returns the document spelling of the operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::In => "in",
            Self::NotIn => "not_in",
            Self::Like => "like",
            Self::NotLike => "not_like",
            Self::IsNull => "is_null",
            Self::IsNotNull => "is_not_null",
            Self::Between => "between",
            Self::NotBetween => "not_between",
        }
    }

    /// Returns true for operators that take no value.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::IsNull | Self::IsNotNull)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of a filter document.
///
/// ```json
/// {"and": [
///     {"field": "status", "op": "eq", "value": "active"},
///     {"or": [
///         {"field": "name", "fn": "lower", "op": "like", "value": "j%"},
///         {"not": {"field": "age", "op": "between", "value": [13, 19]}}
///     ]}
/// ]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Filter {
    /// All children must hold.
    And(AllOf),
    /// At least one child must hold.
    Or(AnyOf),
    /// The child must not hold.
    Not(Negation),
    /// A single field test.
    Predicate(Predicate),
    /// `{}`: no condition.
    Empty(Empty),
}

/// `{"and": [...]}`. No other key may appear next to `and`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AllOf {
    pub and: Vec<Filter>,
}

/// `{"or": [...]}`. No other key may appear next to `or`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnyOf {
    pub or: Vec<Filter>,
}

/// `{"not": {...}}`. No other key may appear next to `not`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Negation {
    pub not: Box<Filter>,
}

/// The empty document `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Empty {}

/// A field test such as `{"field": "age", "op": "gte", "value": 18}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Predicate {
    /// Column name, possibly qualified (`users.id`).
    pub field: String,
    /// The operator.
    pub op: Op,
    /// The operand. Absent and `null` are distinct: `null` binds SQL NULL.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
    /// Optional single-argument function applied to the column first.
    #[serde(default, rename = "fn", skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl Filter {
    /// Converts the document into an expression.
    ///
    /// Returns `None` for `{}` and for combinators whose children are all
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns a [`FilterError`] for unknown functions, missing values and
    /// values of the wrong shape.
    pub fn into_expr(self) -> Result<Option<Expr>> {
        match self {
            Self::And(AllOf { and: children }) => combine(children, and::<Vec<Expr>>),
            Self::Or(AnyOf { or: children }) => combine(children, or::<Vec<Expr>>),
            Self::Not(Negation { not: child }) => Ok(child.into_expr()?.map(Expr::not)),
            Self::Predicate(predicate) => predicate.into_expr().map(Some),
            Self::Empty(_) => Ok(None),
        }
    }
}

fn combine(children: Vec<Filter>, join: fn(Vec<Expr>) -> Expr) -> Result<Option<Expr>> {
    let mut exprs = Vec::with_capacity(children.len());
    for child in children {
        if let Some(expr) = child.into_expr()? {
            exprs.push(expr);
        }
    }
    Ok(match exprs.len() {
        0 => None,
        1 => exprs.pop(),
        _ => Some(join(exprs)),
    })
}

impl Predicate {
    /// Converts the predicate into a condition node.
    ///
    /// # Errors
    ///
    /// See [`Filter::into_expr`].
    pub fn into_expr(self) -> Result<Expr> {
        let Self {
            field,
            op,
            value,
            function,
        } = self;

        if !valid_field(&field) {
            return Err(FilterError::InvalidField(field));
        }
        let mut base = col(&field);
        if let Some(name) = function {
            base = functions::apply(&name, base).ok_or(FilterError::UnknownFunction(name))?;
        }

        let value = match value {
            Some(value) => value,
            None if op.is_unary() => Value::Null,
            None => return Err(FilterError::MissingValue { field, op }),
        };

        Ok(match op {
            Op::IsNull => base.is_null(),
            Op::IsNotNull => base.is_not_null(),
            Op::Eq => base.eq(scalar(&field, value)?),
            Op::Ne => base.not_eq(scalar(&field, value)?),
            Op::Gt => base.gt(scalar(&field, value)?),
            Op::Gte => base.gt_eq(scalar(&field, value)?),
            Op::Lt => base.lt(scalar(&field, value)?),
            Op::Lte => base.lt_eq(scalar(&field, value)?),
            Op::Like => base.like(pattern(&field, value)?),
            Op::NotLike => base.not_like(pattern(&field, value)?),
            Op::In => base.in_list(list(&field, op, value)?),
            Op::NotIn => base.not_in_list(list(&field, op, value)?),
            Op::Between => {
                let (low, high) = range(&field, op, value)?;
                base.between(low, high)
            }
            Op::NotBetween => {
                let (low, high) = range(&field, op, value)?;
                base.not_between(low, high)
            }
        })
    }
}

/// Plain identifiers (`[A-Za-z_][A-Za-z0-9_]*`), optionally dot-qualified.
///
/// Quoted names and JSON paths pass through the dialect unquoted, so they
/// are not accepted from documents.
fn valid_field(field: &str) -> bool {
    field.split('.').all(|segment| {
        let mut chars = segment.chars();
        chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn unsupported(field: &str, value: &Value) -> FilterError {
    FilterError::UnsupportedValue {
        field: String::from(field),
        found: json_type(value),
    }
}

/// Integers that fit in `i64` stay integers; other numbers become floats.
fn scalar(field: &str, value: Value) -> Result<SqlValue> {
    match value {
        Value::Null => Ok(SqlValue::Null),
        Value::Bool(b) => Ok(SqlValue::Bool(b)),
        Value::String(s) => Ok(SqlValue::Text(s)),
        Value::Number(ref n) => n
            .as_i64()
            .map(SqlValue::Int)
            .or_else(|| n.as_f64().map(SqlValue::Float))
            .ok_or_else(|| unsupported(field, &value)),
        Value::Array(_) | Value::Object(_) => Err(unsupported(field, &value)),
    }
}

fn pattern(field: &str, value: Value) -> Result<SqlValue> {
    match value {
        Value::String(s) => Ok(SqlValue::Text(s)),
        other => Err(unsupported(field, &other)),
    }
}

fn list(field: &str, op: Op, value: Value) -> Result<Vec<SqlValue>> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(unsupported(field, &other)),
    };
    if items.is_empty() {
        return Err(FilterError::Arity {
            field: String::from(field),
            op,
            expected: "at least one value",
            found: 0,
        });
    }
    items.into_iter().map(|item| scalar(field, item)).collect()
}

fn range(field: &str, op: Op, value: Value) -> Result<(SqlValue, SqlValue)> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(unsupported(field, &other)),
    };
    let found = items.len();
    let mut items = items.into_iter();
    match (items.next(), items.next(), items.next()) {
        (Some(low), Some(high), None) => Ok((scalar(field, low)?, scalar(field, high)?)),
        _ => Err(FilterError::Arity {
            field: String::from(field),
            op,
            expected: "exactly two values",
            found,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxide_sql_expr::builder::not;
    use serde_json::json;

    fn filter(value: Value) -> Filter {
        serde_json::from_value(value).expect("valid filter document")
    }

    #[test]
    fn test_deserialize_shapes() {
        assert_eq!(filter(json!({})), Filter::Empty(Empty {}));
        assert!(matches!(filter(json!({"and": []})), Filter::And(_)));
        assert!(matches!(filter(json!({"or": [{}]})), Filter::Or(_)));
        assert!(matches!(filter(json!({"not": {}})), Filter::Not(_)));
        assert_eq!(
            filter(json!({"field": "age", "op": "gte", "value": 18})),
            Filter::Predicate(Predicate {
                field: String::from("age"),
                op: Op::Gte,
                value: Some(json!(18)),
                function: None,
            })
        );
    }

    #[test]
    fn test_null_value_is_present() {
        let Filter::Predicate(p) = filter(json!({"field": "a", "op": "eq", "value": null})) else {
            panic!("expected predicate");
        };
        assert_eq!(p.value, Some(Value::Null));

        let Filter::Predicate(p) = filter(json!({"field": "a", "op": "is_null"})) else {
            panic!("expected predicate");
        };
        assert_eq!(p.value, None);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: serde_json::Result<Filter> =
            serde_json::from_value(json!({"field": "a", "op": "eq", "value": 1, "extra": 2}));
        assert!(result.is_err());
        let result: serde_json::Result<Filter> = serde_json::from_value(json!({"bogus": 1}));
        assert!(result.is_err());
        let result: serde_json::Result<Filter> =
            serde_json::from_value(json!({"field": "a", "op": "regex", "value": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_combinators_reject_extra_keys() {
        let documents = [
            json!({"and": [{"field": "a", "op": "eq", "value": 1}], "or": [{"field": "owner", "op": "eq", "value": 7}]}),
            json!({"or": [], "not": {}}),
            json!({"not": {"field": "a", "op": "eq", "value": 1}, "field": "tenant", "op": "eq", "value": 3}),
            json!({"and": [], "comment": "x"}),
        ];
        for document in documents {
            let result: serde_json::Result<Filter> = serde_json::from_value(document.clone());
            assert!(result.is_err(), "{document}");
        }
    }

    #[test]
    fn test_field_names_validated() {
        for field in ["a", "_x1", "users.email", "s.t.c"] {
            assert!(valid_field(field), "{field}");
        }
        for field in [
            "",
            ".a",
            "a.",
            "a..b",
            "1a",
            "\"x\" = 1 OR 1=1 --",
            "`x`",
            "a->'$' OR 1=1 --",
            "a b",
            "*",
        ] {
            assert!(!valid_field(field), "{field}");
        }
    }

    #[test]
    fn test_invalid_field_rejected_before_rendering() {
        let err = filter(json!({"field": "a->'$' OR 1=1 --", "op": "eq", "value": 1}))
            .into_expr()
            .unwrap_err();
        assert!(matches!(err, FilterError::InvalidField(ref f) if f == "a->'$' OR 1=1 --"));
    }

    #[test]
    fn test_op_spelling_round_trips() {
        for op in [Op::NotIn, Op::IsNotNull, Op::NotBetween, Op::Gte] {
            let json = serde_json::to_value(op).unwrap();
            assert_eq!(json, Value::String(op.to_string()));
            assert_eq!(serde_json::from_value::<Op>(json).unwrap(), op);
        }
    }

    #[test]
    fn test_predicate_conversion() {
        let cases = [
            (json!({"field": "a", "op": "eq", "value": 1}), col("a").eq(1)),
            (json!({"field": "a", "op": "ne", "value": "x"}), col("a").not_eq("x")),
            (json!({"field": "a", "op": "gt", "value": 1.5}), col("a").gt(1.5)),
            (json!({"field": "a", "op": "lte", "value": true}), col("a").lt_eq(true)),
            (json!({"field": "a", "op": "like", "value": "j%"}), col("a").like("j%")),
            (
                json!({"field": "a", "op": "not_in", "value": [1, 2]}),
                col("a").not_in_list([1, 2]),
            ),
            (
                json!({"field": "a", "op": "between", "value": [1, 9]}),
                col("a").between(1, 9),
            ),
            (json!({"field": "a", "op": "is_not_null"}), col("a").is_not_null()),
            (
                json!({"field": "a", "op": "eq", "value": null}),
                col("a").eq(SqlValue::Null),
            ),
        ];
        for (document, expected) in cases {
            assert_eq!(filter(document).into_expr().unwrap(), Some(expected));
        }
    }

    #[test]
    fn test_function_applied_before_operator() {
        let expr = filter(json!({"field": "name", "fn": "Upper", "op": "eq", "value": "BOB"}))
            .into_expr()
            .unwrap();
        assert_eq!(expr, Some(col("name").upper().eq("BOB")));
    }

    #[test]
    fn test_empty_combinators_collapse() {
        assert_eq!(filter(json!({})).into_expr().unwrap(), None);
        assert_eq!(filter(json!({"and": []})).into_expr().unwrap(), None);
        assert_eq!(
            filter(json!({"or": [{}, {"and": [{}]}]})).into_expr().unwrap(),
            None
        );
        assert_eq!(filter(json!({"not": {}})).into_expr().unwrap(), None);
    }

    #[test]
    fn test_single_child_unwraps() {
        let expr = filter(json!({"and": [{}, {"field": "a", "op": "eq", "value": 1}]}))
            .into_expr()
            .unwrap();
        assert_eq!(expr, Some(col("a").eq(1)));
    }

    #[test]
    fn test_not_wraps_child() {
        let expr = filter(json!({"not": {"field": "a", "op": "is_null"}}))
            .into_expr()
            .unwrap();
        assert_eq!(expr, Some(not(col("a").is_null())));
    }

    #[test]
    fn test_errors() {
        let err = filter(json!({"field": "a", "op": "eq"})).into_expr().unwrap_err();
        assert!(matches!(err, FilterError::MissingValue { op: Op::Eq, .. }));

        let err = filter(json!({"field": "a", "op": "eq", "value": [1]}))
            .into_expr()
            .unwrap_err();
        assert!(matches!(err, FilterError::UnsupportedValue { found: "array", .. }));

        let err = filter(json!({"field": "a", "op": "in", "value": []}))
            .into_expr()
            .unwrap_err();
        assert!(matches!(err, FilterError::Arity { found: 0, .. }));

        let err = filter(json!({"field": "a", "op": "between", "value": [1, 2, 3]}))
            .into_expr()
            .unwrap_err();
        assert!(matches!(err, FilterError::Arity { found: 3, .. }));
        assert_eq!(
            err.to_string(),
            "operator between on field a expects exactly two values, got 3"
        );

        let err = filter(json!({"field": "a", "op": "like", "value": 3}))
            .into_expr()
            .unwrap_err();
        assert!(matches!(err, FilterError::UnsupportedValue { found: "number", .. }));

        let err = filter(json!({"field": "a", "fn": "now", "op": "is_null"}))
            .into_expr()
            .unwrap_err();
        assert!(matches!(err, FilterError::UnknownFunction(ref name) if name == "now"));
    }

    #[test]
    fn test_error_inside_combinator_propagates() {
        let err = filter(json!({"or": [
            {"field": "a", "op": "eq", "value": 1},
            {"field": "b", "op": "in", "value": {"x": 1}},
        ]}))
        .into_expr()
        .unwrap_err();
        assert!(matches!(err, FilterError::UnsupportedValue { found: "object", .. }));
    }
}
