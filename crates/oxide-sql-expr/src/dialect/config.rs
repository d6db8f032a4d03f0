//! Dialect configuration values.

use serde::{Deserialize, Serialize};

use super::Dialect;

/// How bind parameters are spelled in SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderStyle {
    /// `?` for every parameter (MySQL, SQLite).
    #[default]
    Question,
    /// `$1`, `$2`, ... (PostgreSQL).
    Dollar,
    /// `:1`, `:2`, ... (Oracle).
    Colon,
    /// `@p1`, `@p2`, ... (SQL Server).
    AtP,
}

impl PlaceholderStyle {
    /// Returns the placeholder for the zero-based parameter `index`.
    #[must_use]
    pub fn placeholder(self, index: usize) -> String {
        let n = index + 1;
        match self {
            Self::Question => String::from("?"),
            Self::Dollar => format!("${n}"),
            Self::Colon => format!(":{n}"),
            Self::AtP => format!("@p{n}"),
        }
    }
}

/// A dialect described as plain data.
///
/// Deserializable so it can live in a host application's config file;
/// missing fields fall back to ANSI defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialectConfig {
    /// Dialect name.
    pub name: String,
    /// Identifier quote character.
    pub identifier_quote: char,
    /// Placeholder numbering style.
    pub placeholder: PlaceholderStyle,
    /// Struct field tag name for record-to-column mapping.
    pub field_tag: String,
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self::new("generic", '"', PlaceholderStyle::Question)
    }
}

impl DialectConfig {
    /// Creates a dialect with the default `db` field tag.
    #[must_use]
    pub fn new(name: &str, identifier_quote: char, placeholder: PlaceholderStyle) -> Self {
        Self {
            name: String::from(name),
            identifier_quote,
            placeholder,
            field_tag: String::from("db"),
        }
    }

    /// Overrides the field tag name.
    #[must_use]
    pub fn with_field_tag(mut self, tag: &str) -> Self {
        self.field_tag = String::from(tag);
        self
    }

    /// MySQL / MariaDB: backtick quoting, `?` placeholders.
    #[must_use]
    pub fn mysql() -> Self {
        Self::new("mysql", '`', PlaceholderStyle::Question)
    }

    /// PostgreSQL: double-quote quoting, `$N` placeholders.
    #[must_use]
    pub fn postgres() -> Self {
        Self::new("postgres", '"', PlaceholderStyle::Dollar)
    }

    /// SQLite: double-quote quoting, `?` placeholders.
    #[must_use]
    pub fn sqlite() -> Self {
        Self::new("sqlite", '"', PlaceholderStyle::Question)
    }

    /// Oracle: double-quote quoting, `:N` placeholders.
    #[must_use]
    pub fn oracle() -> Self {
        Self::new("oracle", '"', PlaceholderStyle::Colon)
    }

    /// SQL Server: double-quote quoting, `@pN` placeholders.
    #[must_use]
    pub fn sqlserver() -> Self {
        Self::new("sqlserver", '"', PlaceholderStyle::AtP)
    }
}

impl Dialect for DialectConfig {
    fn name(&self) -> &str {
        &self.name
    }

    fn identifier_quote(&self) -> char {
        self.identifier_quote
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        self.placeholder
    }

    fn field_tag(&self) -> &str {
        &self.field_tag
    }
}
