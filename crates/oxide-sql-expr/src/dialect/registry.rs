//! Explicit name-to-dialect table.

use std::collections::HashMap;

use tracing::debug;

use super::DialectConfig;

/// Maps driver names to dialect configurations.
///
/// Built once at startup and handed to whoever needs a lookup. Names are
/// matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct DialectRegistry {
    dialects: HashMap<String, DialectConfig>,
}

impl DialectRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in presets.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for config in [
            DialectConfig::mysql(),
            DialectConfig::postgres(),
            DialectConfig::sqlite(),
            DialectConfig::oracle(),
            DialectConfig::sqlserver(),
        ] {
            let name = config.name.clone();
            registry.register(&name, config);
        }
        registry.register("mariadb", DialectConfig::mysql());
        registry.register("pgx", DialectConfig::postgres());
        registry
    }

    /// Registers `config` under `name`, returning the entry it replaced.
    pub fn register(&mut self, name: &str, config: DialectConfig) -> Option<DialectConfig> {
        debug!(name, dialect = %config.name, "registering dialect");
        self.dialects.insert(name.to_ascii_lowercase(), config)
    }

    /// Looks up a dialect by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DialectConfig> {
        self.dialects.get(&name.to_ascii_lowercase())
    }

    /// Returns the registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.dialects.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Extend<(String, DialectConfig)> for DialectRegistry {
    fn extend<T: IntoIterator<Item = (String, DialectConfig)>>(&mut self, iter: T) {
        for (name, config) in iter {
            self.register(&name, config);
        }
    }
}
