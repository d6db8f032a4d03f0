//! Expression AST types.
//!
//! Nodes are immutable: every builder method consumes a node and returns a
//! new one. Payload fields are crate-private so that the only way to obtain a
//! condition or function node is through the builders, which keep operand
//! counts consistent with the verb.

use crate::builder::value::SqlValue;

/// A SQL value or boolean condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub(crate) kind: ExprKind,
    pub(crate) alias: Option<String>,
    pub(crate) direction: Option<Direction>,
}

/// The variants of an expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Column reference, possibly `table.column` or `column->'$.path'`.
    Column(String),
    /// Raw SQL text emitted as-is.
    Literal(String),
    /// Bind parameter.
    Param(SqlValue),
    /// Function application.
    Function(Function),
    /// Leaf comparison anchored to a base expression.
    Condition(Condition),
    /// AND / OR / NOT over sub-expressions.
    Combinator(Combinator),
}

/// Sort direction for ORDER BY rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A function call.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub(crate) name: String,
    pub(crate) args: FunctionArgs,
}

/// Function arguments in one of the two supported shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionArgs {
    /// Sub-expressions, rendered recursively with their own parameters.
    Exprs(Vec<Expr>),
    /// A raw column name followed by literal arguments, e.g. `ROUND(col, 2)`.
    Inline {
        /// Column name, quoted at render time.
        column: String,
        /// Literal arguments emitted verbatim after the column.
        args: Vec<String>,
    },
}

impl Function {
    /// Returns the upper-cased function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the arguments.
    #[must_use]
    pub const fn args(&self) -> &FunctionArgs {
        &self.args
    }
}

/// Binary comparison operators taking a single right-hand value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,
    Like,
    NotLike,
}

impl CompareOp {
    /// Returns the SQL spelling of the operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
        }
    }
}

/// The comparison verb of a condition together with its right-hand values.
#[derive(Debug, Clone, PartialEq)]
pub enum Verb {
    /// `base OP ?`
    Compare(CompareOp, SqlValue),
    /// `base [NOT] IN (?, ...)`
    In {
        negated: bool,
        values: Vec<SqlValue>,
    },
    /// `base [NOT] BETWEEN ? AND ?`
    Between {
        negated: bool,
        low: SqlValue,
        high: SqlValue,
    },
    /// `base IS [NOT] NULL`
    IsNull { negated: bool },
}

impl Verb {
    /// Returns the verb keyword, e.g. `"NOT IN"` or `">="`.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Compare(op, _) => op.as_str(),
            Self::In { negated: false, .. } => "IN",
            Self::In { negated: true, .. } => "NOT IN",
            Self::Between { negated: false, .. } => "BETWEEN",
            Self::Between { negated: true, .. } => "NOT BETWEEN",
            Self::IsNull { negated: false } => "IS NULL",
            Self::IsNull { negated: true } => "IS NOT NULL",
        }
    }

    /// Returns the right-hand values in placeholder order.
    #[must_use]
    pub fn values(&self) -> Vec<&SqlValue> {
        match self {
            Self::Compare(_, value) => vec![value],
            Self::In { values, .. } => values.iter().collect(),
            Self::Between { low, high, .. } => vec![low, high],
            Self::IsNull { .. } => vec![],
        }
    }
}

/// A leaf comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub(crate) base: Box<Expr>,
    pub(crate) verb: Verb,
}

impl Condition {
    /// Returns the left-hand expression.
    #[must_use]
    pub fn base(&self) -> &Expr {
        &self.base
    }

    /// Returns the verb and its values.
    #[must_use]
    pub const fn verb(&self) -> &Verb {
        &self.verb
    }
}

/// Boolean combinators.
#[derive(Debug, Clone, PartialEq)]
pub enum Combinator {
    And(Vec<Expr>),
    Or(Vec<Expr>),
    /// `NOT (child)`; without a child it renders as nothing.
    Not(Option<Box<Expr>>),
}

impl Expr {
    pub(crate) const fn bare(kind: ExprKind) -> Self {
        Self {
            kind,
            alias: None,
            direction: None,
        }
    }

    /// Returns the node variant.
    #[must_use]
    pub const fn kind(&self) -> &ExprKind {
        &self.kind
    }

    /// Returns the alias, if set.
    #[must_use]
    pub fn alias_name(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Returns the sort direction, if set.
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Returns true for condition and combinator nodes, which render through
    /// the condition path.
    #[must_use]
    pub const fn is_condition(&self) -> bool {
        matches!(self.kind, ExprKind::Condition(_) | ExprKind::Combinator(_))
    }

    /// Returns true for a function node.
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self.kind, ExprKind::Function(_))
    }
}
