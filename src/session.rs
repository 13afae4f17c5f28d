//! State of the add/edit form.
//!
//! While the form is open the language fields hold full names ("Inglés").
//! They are converted back to abbreviations only when a [`Submission`] is
//! built, and the session's own copy keeps the full names so a failed save
//! leaves the form exactly as the user left it.
//!
//! A stored code with no entry in the language table expands to an empty
//! name. If the user leaves that field alone, the stored code is submitted
//! unchanged rather than overwritten with an empty one.

use tracing::{debug, warn};

use crate::i18n::LanguageCodec;
use crate::record::TranslationRecord;

/// What a save request should do with the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Record already has an id: `update(id, record)`
    Update { id: i64, record: TranslationRecord },
    /// New record: `translate(record)` with an empty translated text
    Create(TranslationRecord),
}

#[derive(Debug, Default)]
pub struct EditSession {
    selected: TranslationRecord,
    show_form: bool,
    // Codes of the record being edited, as stored by the backend
    stored_from: String,
    stored_to: String,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_add(&mut self) {
        self.selected = TranslationRecord::empty();
        self.stored_from.clear();
        self.stored_to.clear();
        self.show_form = true;
    }

    pub fn begin_edit(&mut self, record: &TranslationRecord) {
        debug!("Editing translation {}", record.id);
        self.selected = TranslationRecord {
            from_language: LanguageCodec::expand(&record.from_language).to_string(),
            to_language: LanguageCodec::expand(&record.to_language).to_string(),
            ..record.clone()
        };
        self.stored_from = record.from_language.clone();
        self.stored_to = record.to_language.clone();
        self.show_form = true;
    }

    pub fn cancel(&mut self) {
        self.selected = TranslationRecord::empty();
        self.stored_from.clear();
        self.stored_to.clear();
        self.show_form = false;
    }

    /// Hide the form without touching the record (after a successful save).
    pub fn close(&mut self) {
        self.show_form = false;
    }

    pub fn selected(&self) -> &TranslationRecord {
        &self.selected
    }

    pub fn show_form(&self) -> bool {
        self.show_form
    }

    // ==================== Form Fields ====================

    pub fn set_original_text(&mut self, text: impl Into<String>) {
        self.selected.original_text = text.into();
    }

    pub fn set_translated_text(&mut self, text: impl Into<String>) {
        self.selected.translated_text = text.into();
    }

    /// Takes the full language name, as picked from the language list.
    pub fn set_from_language(&mut self, name: impl Into<String>) {
        self.selected.from_language = name.into();
    }

    /// Takes the full language name, as picked from the language list.
    pub fn set_to_language(&mut self, name: impl Into<String>) {
        self.selected.to_language = name.into();
    }

    /// Store text the backend computed for a newly created record.
    pub fn merge_translated_text(&mut self, text: impl Into<String>) {
        self.selected.translated_text = text.into();
    }

    // ==================== Submission ====================

    /// Build the request for the current form contents.
    ///
    /// An unknown language name becomes an empty abbreviation instead of
    /// being rejected. An untouched field of an edited record whose stored
    /// code is not in the table keeps that code.
    pub fn submission(&self) -> Submission {
        let mut record = self.selected.clone();
        record.from_language = submitted_code(&self.selected.from_language, &self.stored_from);
        record.to_language = submitted_code(&self.selected.to_language, &self.stored_to);

        if record.is_persisted() {
            Submission::Update {
                id: record.id,
                record,
            }
        } else {
            record.translated_text.clear();
            Submission::Create(record)
        }
    }
}

fn submitted_code(name: &str, stored: &str) -> String {
    if name.is_empty() && !stored.is_empty() && LanguageCodec::expand(stored).is_empty() {
        debug!("Keeping stored language code {:?}", stored);
        return stored.to_string();
    }
    abbreviate_or_warn(name)
}

fn abbreviate_or_warn(name: &str) -> String {
    let code = LanguageCodec::abbreviate(name);
    if code.is_empty() {
        warn!("No abbreviation for language {:?}; submitting it empty", name);
    }
    code.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(id: i64, from: &str, to: &str) -> TranslationRecord {
        TranslationRecord {
            id,
            original_text: "Hello".to_string(),
            translated_text: "Hola".to_string(),
            from_language: from.to_string(),
            to_language: to.to_string(),
        }
    }

    // ==================== Lifecycle Tests ====================

    #[test]
    fn test_begin_add_opens_empty_form() {
        let mut session = EditSession::new();
        session.begin_edit(&stored(5, "EN", "ES"));

        session.begin_add();

        assert!(session.show_form());
        assert_eq!(session.selected(), &TranslationRecord::empty());
    }

    #[test]
    fn test_begin_edit_expands_languages() {
        let mut session = EditSession::new();

        session.begin_edit(&stored(5, "EN", "ES"));

        assert!(session.show_form());
        assert_eq!(session.selected().id, 5);
        assert_eq!(session.selected().from_language, "Inglés");
        assert_eq!(session.selected().to_language, "Español");
        assert_eq!(session.selected().original_text, "Hello");
    }

    #[test]
    fn test_begin_edit_unknown_code_shows_no_name() {
        let mut session = EditSession::new();
        session.begin_edit(&stored(5, "QQ", "ES"));
        assert_eq!(session.selected().from_language, "");
    }

    #[test]
    fn test_cancel_resets_and_hides() {
        let mut session = EditSession::new();
        session.begin_edit(&stored(5, "EN", "ES"));

        session.cancel();

        assert!(!session.show_form());
        assert_eq!(session.selected(), &TranslationRecord::empty());
    }

    #[test]
    fn test_close_keeps_record() {
        let mut session = EditSession::new();
        session.begin_edit(&stored(5, "EN", "ES"));

        session.close();

        assert!(!session.show_form());
        assert_eq!(session.selected().id, 5);
    }

    // ==================== Submission Tests ====================

    #[test]
    fn test_submission_for_new_record_is_create_with_codes() {
        let mut session = EditSession::new();
        session.begin_add();
        session.set_original_text("Bonjour");
        session.set_translated_text("typed by the user");
        session.set_from_language("Francés");
        session.set_to_language("Inglés");

        let submission = session.submission();

        assert_eq!(
            submission,
            Submission::Create(TranslationRecord {
                id: 0,
                original_text: "Bonjour".to_string(),
                translated_text: String::new(),
                from_language: "FR".to_string(),
                to_language: "EN".to_string(),
            })
        );
    }

    #[test]
    fn test_submission_for_existing_record_is_update() {
        let mut session = EditSession::new();
        session.begin_edit(&stored(7, "EN", "ES"));
        session.set_to_language("Italiano");

        match session.submission() {
            Submission::Update { id, record } => {
                assert_eq!(id, 7);
                assert_eq!(record.from_language, "EN");
                assert_eq!(record.to_language, "IT");
                assert_eq!(record.translated_text, "Hola");
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_submission_does_not_touch_form_state() {
        let mut session = EditSession::new();
        session.begin_edit(&stored(7, "EN", "ES"));

        let _ = session.submission();

        assert_eq!(session.selected().from_language, "Inglés");
        assert!(session.show_form());
    }

    #[test]
    fn test_unknown_language_name_submits_empty_code() {
        // Known tolerated edge case: the name is not rejected
        let mut session = EditSession::new();
        session.begin_add();
        session.set_from_language("Klingon");
        session.set_to_language("Inglés");

        match session.submission() {
            Submission::Create(record) => {
                assert_eq!(record.from_language, "");
                assert_eq!(record.to_language, "EN");
            }
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[test]
    fn test_unlisted_stored_code_survives_edit() {
        let mut session = EditSession::new();
        session.begin_edit(&stored(9, "DE", "ES"));
        session.set_original_text("Guten Morgen");

        match session.submission() {
            Submission::Update { id, record } => {
                assert_eq!(id, 9);
                assert_eq!(record.from_language, "DE");
                assert_eq!(record.to_language, "ES");
                assert_eq!(record.original_text, "Guten Morgen");
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_unlisted_stored_code_replaced_when_user_picks_language() {
        let mut session = EditSession::new();
        session.begin_edit(&stored(9, "DE", "ES"));
        session.set_from_language("Inglés");

        match session.submission() {
            Submission::Update { record, .. } => assert_eq!(record.from_language, "EN"),
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_stored_codes_forgotten_after_cancel() {
        let mut session = EditSession::new();
        session.begin_edit(&stored(9, "DE", "ES"));
        session.cancel();
        session.begin_add();

        match session.submission() {
            Submission::Create(record) => assert_eq!(record.from_language, ""),
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[test]
    fn test_merge_translated_text() {
        let mut session = EditSession::new();
        session.begin_add();
        session.merge_translated_text("Hello");
        assert_eq!(session.selected().translated_text, "Hello");
    }
}
