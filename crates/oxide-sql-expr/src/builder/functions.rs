//! SQL function builders.
//!
//! Wrapping a plain column produces the compact inline form `NAME(col, ...)`.
//! Wrapping anything else (a function, a combinator, a literal) nests the
//! whole node as the first argument, so `col("name").upper().trim()` renders
//! as `TRIM(UPPER(name))`.

use super::value::ToSqlValue;
use crate::ast::{Expr, ExprKind, Function, FunctionArgs};

/// Single-argument functions accepted by name, as `(NAME, builder)` pairs.
const NAMED: &[(&str, fn(Expr) -> Expr)] = &[
    ("UPPER", Expr::upper),
    ("LOWER", Expr::lower),
    ("TRIM", Expr::trim),
    ("LTRIM", Expr::ltrim),
    ("RTRIM", Expr::rtrim),
    ("REVERSE", Expr::reverse),
    ("LENGTH", Expr::length),
    ("CHAR_LENGTH", Expr::char_length),
    ("ABS", Expr::abs),
    ("CEIL", Expr::ceil),
    ("FLOOR", Expr::floor),
    ("ROUND", Expr::round),
    ("SQRT", Expr::sqrt),
    ("SIGN", Expr::sign),
    ("COUNT", Expr::count),
    ("SUM", Expr::sum),
    ("AVG", Expr::avg),
    ("MIN", Expr::min),
    ("MAX", Expr::max),
];

fn lookup(name: &str) -> Option<fn(Expr) -> Expr> {
    NAMED
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, f)| *f)
}

/// Returns true if `name` is a supported single-argument function.
#[must_use]
pub fn is_known(name: &str) -> bool {
    lookup(name).is_some()
}

/// Applies the single-argument function `name` (case-insensitive) to `expr`.
///
/// Returns `None` for unsupported names.
#[must_use]
pub fn apply(name: &str, expr: Expr) -> Option<Expr> {
    lookup(name).map(|f| f(expr))
}

impl Expr {
    /// Wraps this node in function `name`, appending `inline_args` after it.
    fn wrap_with(self, name: &str, inline_args: Vec<String>) -> Self {
        let Self {
            kind,
            alias,
            direction,
        } = self;
        let args = match kind {
            ExprKind::Column(column) => FunctionArgs::Inline {
                column,
                args: inline_args,
            },
            other => {
                let mut args = vec![Self::bare(other)];
                args.extend(inline_args.iter().map(|a| Self::literal(a)));
                FunctionArgs::Exprs(args)
            }
        };
        Self {
            kind: ExprKind::Function(Function {
                name: name.to_ascii_uppercase(),
                args,
            }),
            alias,
            direction,
        }
    }

    /// Builds function `name` whose argument list is produced from this node
    /// with its alias and direction stripped; those move to the new node.
    fn nest_in(self, name: &str, args: impl FnOnce(Self) -> Vec<Self>) -> Self {
        let Self {
            kind,
            alias,
            direction,
        } = self;
        let mut function = Self::function(name, args(Self::bare(kind)));
        function.alias = alias;
        function.direction = direction;
        function
    }

    /// Wraps this node in a single-argument function call.
    #[must_use]
    pub fn wrap(self, name: &str) -> Self {
        self.wrap_with(name, Vec::new())
    }

    /// Creates a function call over arbitrary sub-expressions. Bind parameters
    /// inside `args` are rendered and collected in order.
    #[must_use]
    pub fn function<I: IntoIterator<Item = Self>>(name: &str, args: I) -> Self {
        Self::bare(ExprKind::Function(Function {
            name: name.to_ascii_uppercase(),
            args: FunctionArgs::Exprs(args.into_iter().collect()),
        }))
    }

    /// `CAST(expr AS data_type)`.
    #[must_use]
    pub fn cast(self, data_type: &str) -> Self {
        let target = Self::literal(&format!("AS {data_type}"));
        self.nest_in("CAST", |inner| vec![inner, target])
    }

    /// `UPPER(expr)`
    #[must_use]
    pub fn upper(self) -> Self {
        self.wrap("UPPER")
    }

    /// `LOWER(expr)`
    #[must_use]
    pub fn lower(self) -> Self {
        self.wrap("LOWER")
    }

    /// `TRIM(expr)`
    #[must_use]
    pub fn trim(self) -> Self {
        self.wrap("TRIM")
    }

    /// `LTRIM(expr)`
    #[must_use]
    pub fn ltrim(self) -> Self {
        self.wrap("LTRIM")
    }

    /// `RTRIM(expr)`
    #[must_use]
    pub fn rtrim(self) -> Self {
        self.wrap("RTRIM")
    }

    /// `REVERSE(expr)`
    #[must_use]
    pub fn reverse(self) -> Self {
        self.wrap("REVERSE")
    }

    /// `LENGTH(expr)`
    #[must_use]
    pub fn length(self) -> Self {
        self.wrap("LENGTH")
    }

    /// `CHAR_LENGTH(expr)`
    #[must_use]
    pub fn char_length(self) -> Self {
        self.wrap("CHAR_LENGTH")
    }

    /// `ABS(expr)`
    #[must_use]
    pub fn abs(self) -> Self {
        self.wrap("ABS")
    }

    /// `CEIL(expr)`
    #[must_use]
    pub fn ceil(self) -> Self {
        self.wrap("CEIL")
    }

    /// `FLOOR(expr)`
    #[must_use]
    pub fn floor(self) -> Self {
        self.wrap("FLOOR")
    }

    /// `ROUND(expr)`
    #[must_use]
    pub fn round(self) -> Self {
        self.wrap("ROUND")
    }

    /// `ROUND(expr, precision)`
    #[must_use]
    pub fn round_n(self, precision: i32) -> Self {
        self.wrap_with("ROUND", vec![precision.to_string()])
    }

    /// `SQRT(expr)`
    #[must_use]
    pub fn sqrt(self) -> Self {
        self.wrap("SQRT")
    }

    /// `SIGN(expr)`
    #[must_use]
    pub fn sign(self) -> Self {
        self.wrap("SIGN")
    }

    /// `COUNT(expr)`
    #[must_use]
    pub fn count(self) -> Self {
        self.wrap("COUNT")
    }

    /// `COUNT(*)`
    #[must_use]
    pub fn count_star() -> Self {
        Self::column("*").count()
    }

    /// `SUM(expr)`
    #[must_use]
    pub fn sum(self) -> Self {
        self.wrap("SUM")
    }

    /// `AVG(expr)`
    #[must_use]
    pub fn avg(self) -> Self {
        self.wrap("AVG")
    }

    /// `MIN(expr)`
    #[must_use]
    pub fn min(self) -> Self {
        self.wrap("MIN")
    }

    /// `MAX(expr)`
    #[must_use]
    pub fn max(self) -> Self {
        self.wrap("MAX")
    }

    /// `SUBSTRING(expr, pos, len)`
    #[must_use]
    pub fn substring(self, pos: i64, len: i64) -> Self {
        self.wrap_with("SUBSTRING", vec![pos.to_string(), len.to_string()])
    }

    /// `LOCATE(needle, expr)`; the needle is inlined as an escaped literal.
    #[must_use]
    pub fn locate(self, needle: &str) -> Self {
        let needle = needle.to_sql_value().to_sql_inline();
        if matches!(self.kind, ExprKind::Column(_)) {
            self.wrap_with("LOCATE", vec![needle])
        } else {
            self.nest_in("LOCATE", |inner| vec![Self::literal(&needle), inner])
        }
    }

    /// `COALESCE(expr, ?)` with `default` bound as a parameter.
    #[must_use]
    pub fn coalesce<T: ToSqlValue>(self, default: T) -> Self {
        let default = Self::param(default);
        self.nest_in("COALESCE", |inner| vec![inner, default])
    }

    /// `CONCAT(expr, others...)`
    #[must_use]
    pub fn concat<I: IntoIterator<Item = Self>>(self, others: I) -> Self {
        self.nest_in("CONCAT", |inner| std::iter::once(inner).chain(others).collect())
    }
}
