//! Dialect-aware SQL rendering and parameter collection.
//!
//! A [`Renderer`] keeps a running placeholder index across calls, so a query
//! builder can render WHERE, HAVING and LIMIT one after another and get one
//! continuous `$1, $2, ...` sequence together with the matching parameter
//! list.
//!
//! ```rust
//! use oxide_sql_expr::builder::{col, param};
//! use oxide_sql_expr::dialect::DialectConfig;
//! use oxide_sql_expr::render::Renderer;
//!
//! let pg = DialectConfig::postgres();
//! let mut renderer = Renderer::new(&pg);
//! let where_sql = renderer.condition(&col("a").eq(1).and(col("b").eq(2)));
//! let having_sql = renderer.condition(&col("total").sum().gt(100));
//! let limit_sql = renderer.value(&param(10));
//!
//! assert_eq!(where_sql, r#"("a" = $1 AND "b" = $2)"#);
//! assert_eq!(having_sql, r#"SUM("total") > $3"#);
//! assert_eq!(limit_sql, "$4");
//! assert_eq!(renderer.into_params().len(), 4);
//! ```

mod walk;

use tracing::trace;

use self::walk::Sink;
use crate::ast::Expr;
use crate::builder::value::SqlValue;
use crate::dialect::Dialect;

/// Renders expressions for one statement.
pub struct Renderer<'d, D: Dialect + ?Sized> {
    dialect: &'d D,
    next_index: usize,
    params: Vec<SqlValue>,
    sql: String,
}

impl<'d, D: Dialect + ?Sized> Renderer<'d, D> {
    /// Creates a renderer whose first placeholder has index 0.
    #[must_use]
    pub fn new(dialect: &'d D) -> Self {
        Self::starting_at(dialect, 0)
    }

    /// Creates a renderer whose first placeholder has the zero-based index
    /// `start`, for continuing a statement rendered elsewhere.
    #[must_use]
    pub fn starting_at(dialect: &'d D, start: usize) -> Self {
        Self {
            dialect,
            next_index: start,
            params: Vec::new(),
            sql: String::new(),
        }
    }

    /// Renders `expr` as a value (projection, GROUP BY, ORDER BY).
    pub fn value(&mut self, expr: &Expr) -> String {
        walk::value(expr, self);
        self.finish()
    }

    /// Renders `expr` as a condition (WHERE, HAVING).
    pub fn condition(&mut self, expr: &Expr) -> String {
        walk::condition(expr, self);
        self.finish()
    }

    /// Returns the index the next placeholder will get.
    #[must_use]
    pub const fn next_index(&self) -> usize {
        self.next_index
    }

    /// Returns the parameters bound so far.
    #[must_use]
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// Consumes the renderer and returns the bound parameters.
    #[must_use]
    pub fn into_params(self) -> Vec<SqlValue> {
        self.params
    }

    fn finish(&mut self) -> String {
        let sql = std::mem::take(&mut self.sql);
        trace!(
            dialect = self.dialect.name(),
            sql = %sql,
            params = self.params.len(),
            "rendered expression"
        );
        sql
    }
}

impl<D: Dialect + ?Sized> Sink for Renderer<'_, D> {
    fn text(&mut self, text: &str) {
        self.sql.push_str(text);
    }

    fn identifier(&mut self, name: &str) {
        let quoted = self.dialect.quote_identifier(name);
        self.sql.push_str(&quoted);
    }

    fn bind(&mut self, value: &SqlValue) {
        let placeholder = self.dialect.placeholder(self.next_index);
        self.sql.push_str(&placeholder);
        self.next_index += 1;
        self.params.push(value.clone());
    }
}

/// Records bound values and ignores everything else.
struct ParamCollector(Vec<SqlValue>);

impl Sink for ParamCollector {
    fn text(&mut self, _: &str) {}

    fn identifier(&mut self, _: &str) {}

    fn bind(&mut self, value: &SqlValue) {
        self.0.push(value.clone());
    }
}

/// Collects the bind parameters of `expr` in placeholder order.
#[must_use]
pub fn collect_parameters(expr: &Expr) -> Vec<SqlValue> {
    let mut collector = ParamCollector(Vec::new());
    walk::value(expr, &mut collector);
    collector.0
}

impl Expr {
    /// Renders this expression as a value.
    #[must_use]
    pub fn to_sql<D: Dialect + ?Sized>(&self, dialect: &D) -> String {
        Renderer::new(dialect).value(self)
    }

    /// Renders this expression as a condition.
    #[must_use]
    pub fn to_condition_sql<D: Dialect + ?Sized>(&self, dialect: &D) -> String {
        Renderer::new(dialect).condition(self)
    }

    /// Renders this expression as a condition whose first placeholder has the
    /// zero-based index `start`, returning the SQL and its parameters.
    #[must_use]
    pub fn build_condition<D: Dialect + ?Sized>(
        &self,
        dialect: &D,
        start: usize,
    ) -> (String, Vec<SqlValue>) {
        let mut renderer = Renderer::starting_at(dialect, start);
        let sql = renderer.condition(self);
        (sql, renderer.into_params())
    }

    /// Returns the bind parameters in placeholder order.
    #[must_use]
    pub fn parameters(&self) -> Vec<SqlValue> {
        collect_parameters(self)
    }
}
