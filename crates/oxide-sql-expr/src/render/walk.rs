//! The single traversal behind both SQL rendering and parameter collection.
//!
//! Every placeholder is produced by [`Sink::bind`], so a sink that records
//! bound values sees them in exactly the order a rendering sink writes
//! placeholders.

use crate::ast::{Combinator, Condition, Expr, ExprKind, Function, FunctionArgs, Verb};
use crate::builder::value::SqlValue;

/// Receives the pieces of a rendered expression.
pub(crate) trait Sink {
    /// Raw SQL text.
    fn text(&mut self, text: &str);
    /// A column name to be quoted by the dialect.
    fn identifier(&mut self, name: &str);
    /// A bind parameter.
    fn bind(&mut self, value: &SqlValue);
}

/// Value rendering, used for projections, GROUP BY and ORDER BY.
pub(crate) fn value<S: Sink>(expr: &Expr, out: &mut S) {
    match &expr.kind {
        ExprKind::Condition(_) | ExprKind::Combinator(_) => {
            condition(expr, out);
            alias(expr, out);
            return;
        }
        ExprKind::Param(v) => out.bind(v),
        ExprKind::Literal(text) => out.text(text),
        ExprKind::Column(name) => out.identifier(name),
        ExprKind::Function(function) => self::function(function, out),
    }
    alias(expr, out);
    if let Some(direction) = expr.direction {
        out.text(" ");
        out.text(direction.as_str());
    }
}

/// Condition rendering, used for WHERE and HAVING.
pub(crate) fn condition<S: Sink>(expr: &Expr, out: &mut S) {
    match &expr.kind {
        ExprKind::Combinator(Combinator::And(children)) => join(children, " AND ", out),
        ExprKind::Combinator(Combinator::Or(children)) => join(children, " OR ", out),
        ExprKind::Combinator(Combinator::Not(Some(child))) => {
            out.text("NOT (");
            condition(child, out);
            out.text(")");
        }
        ExprKind::Combinator(Combinator::Not(None)) => {}
        ExprKind::Condition(cond) => leaf(cond, out),
        _ => value(expr, out),
    }
}

fn alias<S: Sink>(expr: &Expr, out: &mut S) {
    if let Some(alias) = &expr.alias {
        out.text(" AS ");
        out.text(alias);
    }
}

fn join<S: Sink>(children: &[Expr], separator: &str, out: &mut S) {
    match children {
        [] => {}
        [only] => condition(only, out),
        _ => {
            out.text("(");
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    out.text(separator);
                }
                condition(child, out);
            }
            out.text(")");
        }
    }
}

fn leaf<S: Sink>(cond: &Condition, out: &mut S) {
    value(&cond.base, out);
    out.text(" ");
    out.text(cond.verb.keyword());
    match &cond.verb {
        Verb::IsNull { .. } => {}
        Verb::Compare(_, v) => {
            out.text(" ");
            out.bind(v);
        }
        Verb::In { values, .. } => {
            out.text(" (");
            for (i, v) in values.iter().enumerate() {
                if i > 0 {
                    out.text(", ");
                }
                out.bind(v);
            }
            out.text(")");
        }
        Verb::Between { low, high, .. } => {
            out.text(" ");
            out.bind(low);
            out.text(" AND ");
            out.bind(high);
        }
    }
}

fn function<S: Sink>(function: &Function, out: &mut S) {
    out.text(&function.name);
    out.text("(");
    match &function.args {
        FunctionArgs::Exprs(args) => {
            let separator = if function.name == "CAST" { " " } else { ", " };
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    out.text(separator);
                }
                value(arg, out);
            }
        }
        FunctionArgs::Inline { column, args } => match args.as_slice() {
            [needle] if function.name == "LOCATE" => {
                out.text(needle);
                out.text(", ");
                out.identifier(column);
            }
            _ => {
                out.identifier(column);
                for arg in args {
                    out.text(", ");
                    out.text(arg);
                }
            }
        },
    }
    out.text(")");
}
