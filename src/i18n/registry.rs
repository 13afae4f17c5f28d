//! Language registry: single source of truth for the selectable languages.
//!
//! Records store a two-letter abbreviation while the edit form works with the
//! full (Spanish) language name. The registry owns the fixed table and the
//! lookup indexes in both directions. It uses a singleton pattern with
//! `OnceLock` so the indexes are built once, on first access.

use std::collections::HashMap;
use std::sync::OnceLock;

/// One row of the language table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageConfig {
    /// Two-letter storage abbreviation (e.g., "EN", "ES")
    pub code: &'static str,

    /// Full display name used by the edit form (e.g., "Inglés", "Español")
    pub name: &'static str,
}

/// Global language registry singleton.
///
/// Holds the table in selection order plus a name index and a code index so
/// both directions of the mapping are hash lookups.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
    by_name: HashMap<&'static str, usize>,
    by_code: HashMap<&'static str, usize>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry::from_table(default_languages()))
    }

    fn from_table(languages: Vec<LanguageConfig>) -> Self {
        let by_name = languages
            .iter()
            .enumerate()
            .map(|(i, lang)| (lang.name, i))
            .collect();
        let by_code = languages
            .iter()
            .enumerate()
            .map(|(i, lang)| (lang.code, i))
            .collect();

        Self {
            languages,
            by_name,
            by_code,
        }
    }

    /// Get a language by its two-letter abbreviation.
    ///
    /// Matching is exact: `"en"` does not find `"EN"`.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.by_code.get(code).map(|&i| &self.languages[i])
    }

    /// Get a language by its full display name.
    pub fn get_by_name(&self, name: &str) -> Option<&LanguageConfig> {
        self.by_name.get(name).map(|&i| &self.languages[i])
    }

    /// All languages in selection order.
    pub fn list_all(&self) -> &[LanguageConfig] {
        &self.languages
    }
}

/// The fixed language table, alphabetical by full name.
fn default_languages() -> Vec<LanguageConfig> {
    const TABLE: [(&str, &str); 24] = [
        ("Árabe", "AR"),
        ("Bengalí", "BN"),
        ("Chino", "ZH"),
        ("Danés", "DA"),
        ("Español", "ES"),
        ("Francés", "FR"),
        ("Griego", "EL"),
        ("Hebreo", "HE"),
        ("Hindi", "HI"),
        ("Inglés", "EN"),
        ("Italiano", "IT"),
        ("Japonés", "JA"),
        ("Jemer", "KM"),
        ("Koreano", "KO"),
        ("Latín", "LA"),
        ("Neerlandés", "NL"),
        ("Persa", "FA"),
        ("Polaco", "PL"),
        ("Portugués", "PT"),
        ("Ruso", "RU"),
        ("Sueco", "SV"),
        ("Turco", "TR"),
        ("Ucraniano", "UK"),
        ("Vietnamita", "VI"),
    ];

    TABLE
        .iter()
        .map(|&(name, code)| LanguageConfig { code, name })
        .collect()
}
