//! Conversion between stored abbreviations and editable full names.
//!
//! Both directions are total: anything outside the table maps to `""`.
//! Callers treat an empty result as "no name available" and must not write
//! it back over a stored abbreviation unless that is the intent.

use crate::i18n::LanguageRegistry;

/// Stateless view over the language table.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageCodec;

impl LanguageCodec {
    /// Full name → two-letter code, or `""` if the name is unknown.
    pub fn abbreviate(full_name: &str) -> &'static str {
        LanguageRegistry::get()
            .get_by_name(full_name)
            .map(|lang| lang.code)
            .unwrap_or("")
    }

    /// Two-letter code → full name, or `""` if the code is unknown.
    pub fn expand(code: &str) -> &'static str {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|lang| lang.name)
            .unwrap_or("")
    }

    /// Full names in selection order, for the form's language pickers.
    pub fn languages() -> Vec<&'static str> {
        LanguageRegistry::get()
            .list_all()
            .iter()
            .map(|lang| lang.name)
            .collect()
    }
}
