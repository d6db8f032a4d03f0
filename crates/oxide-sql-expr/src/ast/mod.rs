//! Expression tree types.
//!
//! Construction lives in [`crate::builder`]; serialization lives in
//! [`crate::render`].

mod expression;

pub use expression::{
    Combinator, CompareOp, Condition, Direction, Expr, ExprKind, Function, FunctionArgs, Verb,
};
