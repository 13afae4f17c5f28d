use serde::{Deserialize, Deserializer, Serialize};

/// A translation entry as exchanged with the backend.
///
/// `from_language`/`to_language` hold abbreviations ("EN") when stored and
/// full names ("Inglés") while the record sits in an open edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationRecord {
    pub id: i64,
    #[serde(deserialize_with = "null_as_empty")]
    pub original_text: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub translated_text: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub from_language: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub to_language: String,
}

impl TranslationRecord {
    /// The empty record used for a new, unsaved entry.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the backend already assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

// The backend sends `null` for text it has not computed yet
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
