//! SQL dialect support.
//!
//! A dialect decides how identifiers are quoted and how the Nth bind
//! parameter is spelled. Dialects are passed to the renderer explicitly;
//! there is no process-wide default.

mod config;
mod registry;

pub use config::{DialectConfig, PlaceholderStyle};
pub use registry::DialectRegistry;

/// Trait for SQL dialect-specific rendering behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &str;

    /// Returns the identifier quote character (`"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Returns the placeholder numbering style.
    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Question
    }

    /// Returns the struct field tag used to map record fields to columns.
    fn field_tag(&self) -> &str {
        "db"
    }

    /// Returns the placeholder for the zero-based parameter `index`.
    fn placeholder(&self, index: usize) -> String {
        self.placeholder_style().placeholder(index)
    }

    /// Quotes a column name.
    ///
    /// `*` and names already starting with the quote character are left
    /// alone. A `->` JSON path suffix is kept verbatim after the quoted column,
    /// and each segment of a dotted name is quoted on its own.
    fn quote_identifier(&self, name: &str) -> String {
        quote_identifier(name, self.identifier_quote())
    }
}

impl<D: Dialect + ?Sized> Dialect for &D {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn identifier_quote(&self) -> char {
        (**self).identifier_quote()
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        (**self).placeholder_style()
    }

    fn field_tag(&self) -> &str {
        (**self).field_tag()
    }

    fn placeholder(&self, index: usize) -> String {
        (**self).placeholder(index)
    }

    fn quote_identifier(&self, name: &str) -> String {
        (**self).quote_identifier(name)
    }
}

fn quote_identifier(name: &str, quote: char) -> String {
    if name == "*" || name.starts_with(quote) {
        return String::from(name);
    }
    if let Some(idx) = name.find("->") {
        let (column, json_path) = name.split_at(idx);
        return format!("{}{json_path}", quote_identifier(column.trim_end(), quote));
    }
    name.split('.')
        .map(|segment| {
            if segment == "*" || segment.starts_with(quote) {
                String::from(segment)
            } else {
                format!("{quote}{segment}{quote}")
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain_and_star() {
        let mysql = DialectConfig::mysql();
        assert_eq!(mysql.quote_identifier("name"), "`name`");
        assert_eq!(mysql.quote_identifier("*"), "*");
    }

    #[test]
    fn test_quote_already_quoted_passthrough() {
        let mysql = DialectConfig::mysql();
        assert_eq!(mysql.quote_identifier("`order date`"), "`order date`");
        let pg = DialectConfig::postgres();
        assert_eq!(pg.quote_identifier("\"Name\""), "\"Name\"");
    }

    #[test]
    fn test_quote_dotted() {
        let mysql = DialectConfig::mysql();
        assert_eq!(mysql.quote_identifier("users.id"), "`users`.`id`");
        assert_eq!(mysql.quote_identifier("users.*"), "`users`.*");
        assert_eq!(
            DialectConfig::postgres().quote_identifier("s.t.c"),
            "\"s\".\"t\".\"c\""
        );
    }

    #[test]
    fn test_quote_json_path() {
        let mysql = DialectConfig::mysql();
        assert_eq!(mysql.quote_identifier("attrs->'$.color'"), "`attrs`->'$.color'");
        assert_eq!(
            mysql.quote_identifier("p.attrs->>'$.size'"),
            "`p`.`attrs`->>'$.size'"
        );
    }

    #[test]
    fn test_dialect_through_reference() {
        let pg = DialectConfig::postgres();
        let by_ref: &dyn Dialect = &pg;
        assert_eq!(by_ref.placeholder(0), "$1");
        assert_eq!((&by_ref).quote_identifier("a"), "\"a\"");
    }

    /// Named `:p0` parameters and bracket quoting.
    struct Bracketed;

    impl Dialect for Bracketed {
        fn name(&self) -> &str {
            "bracketed"
        }

        fn placeholder(&self, index: usize) -> String {
            format!(":p{index}")
        }

        fn quote_identifier(&self, name: &str) -> String {
            format!("[{name}]")
        }
    }

    #[test]
    fn test_custom_overrides_survive_references() {
        use crate::builder::col;

        let dialect = Bracketed;
        let expr = col("a").eq(1).and(col("b").eq(2));
        let direct = expr.to_condition_sql(&dialect);
        assert_eq!(direct, "([a] = :p0 AND [b] = :p1)");

        let as_dyn: &dyn Dialect = &dialect;
        assert_eq!(expr.to_condition_sql(&as_dyn), direct);
        assert_eq!(expr.to_condition_sql(&&dialect), direct);
        assert_eq!((&as_dyn).placeholder(3), ":p3");
        assert_eq!((&as_dyn).quote_identifier("x.y"), "[x.y]");
    }
}
