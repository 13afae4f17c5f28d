//! Search filter and page window over the record set.
//!
//! Both functions are pure. The displayed page is always
//! `page(&filter(all, query), current_page, ITEMS_PER_PAGE)`.

use crate::i18n::LanguageCodec;
use crate::record::TranslationRecord;

/// Fixed page size of the list view.
pub const ITEMS_PER_PAGE: usize = 9;

/// Whether `record` matches an already-lowercased query.
fn matches(record: &TranslationRecord, needle: &str) -> bool {
    [
        record.original_text.as_str(),
        record.translated_text.as_str(),
        LanguageCodec::expand(&record.from_language),
        LanguageCodec::expand(&record.to_language),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Records whose text or expanded language names contain `query`,
/// case-insensitively, in their original order.
pub fn filter<'a>(records: &'a [TranslationRecord], query: &str) -> Vec<&'a TranslationRecord> {
    let needle = query.to_lowercase();
    records.iter().filter(|r| matches(r, &needle)).collect()
}

/// The `page_number`-th window (1-based) of `page_size` items.
///
/// Page 0 and pages past the end are empty rather than an error.
pub fn page<T: Clone>(filtered: &[T], page_number: usize, page_size: usize) -> Vec<T> {
    if page_number == 0 || page_size == 0 {
        return Vec::new();
    }

    let start = (page_number - 1).saturating_mul(page_size);
    if start >= filtered.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(filtered.len());
    filtered[start..end].to_vec()
}

/// Number of pages needed to show `len` items; zero items is zero pages.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}
