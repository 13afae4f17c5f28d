//! The translation list view: search, paging, add/edit form and delete.
//!
//! Every user action is one `async fn` on [`TranslationListController`].
//! Gateway failures are handled here: they become an alert through the
//! [`NotificationPort`] plus an outcome value, and the view stays usable.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::flash::FlashMessage;
use crate::gateway::{GatewayError, TranslationGateway};
use crate::i18n::{LanguageCodec, ViewStrings};
use crate::notify::{AlertKind, Confirmation, NotificationPort};
use crate::pager::{self, ITEMS_PER_PAGE};
use crate::record::TranslationRecord;
use crate::session::{EditSession, Submission};
use crate::store::RecordStore;

/// Result of (re)loading the record set.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(usize),
    Failed(GatewayError),
}

/// Result of saving the edit form.
#[derive(Debug)]
pub enum SubmitOutcome {
    Updated(TranslationRecord),
    Created { translated_text: String },
    Failed(GatewayError),
}

/// Result of a delete request.
#[derive(Debug)]
pub enum DeleteOutcome {
    Deleted,
    Failed(GatewayError),
    /// The user did not confirm; nothing was sent
    Declined(Confirmation),
}

pub struct TranslationListController {
    gateway: Arc<dyn TranslationGateway>,
    notifier: Arc<dyn NotificationPort>,
    store: RecordStore,
    session: EditSession,
    flash: FlashMessage,
    search_query: String,
    current_page: usize,
    displayed: Vec<TranslationRecord>,
}

impl TranslationListController {
    pub fn new(gateway: Arc<dyn TranslationGateway>, notifier: Arc<dyn NotificationPort>) -> Self {
        Self {
            gateway,
            notifier,
            store: RecordStore::new(),
            session: EditSession::new(),
            flash: FlashMessage::default(),
            search_query: String::new(),
            current_page: 1,
            displayed: Vec::new(),
        }
    }

    /// First activation of the view: load everything and show page 1 unfiltered.
    pub async fn activate(&mut self) -> LoadOutcome {
        info!("Activating translation list");
        self.search_query.clear();
        self.current_page = 1;
        self.reload().await
    }

    /// Refetch the record set and recompute the displayed page.
    pub async fn reload(&mut self) -> LoadOutcome {
        let outcome = match self.store.load(self.gateway.as_ref()).await {
            Ok(count) => LoadOutcome::Loaded(count),
            Err(e) => {
                let strings = ViewStrings::get();
                self.notifier
                    .alert(AlertKind::Error, strings.error_title, strings.load_failed)
                    .await;
                self.current_page = 1;
                LoadOutcome::Failed(e)
            }
        };

        self.refresh_display();
        outcome
    }

    // ==================== Search & Paging ====================

    /// Filter by `query`. The current page number is kept as is.
    pub fn search(&mut self, query: &str) {
        self.search_query = query.to_string();
        self.refresh_display();
        info!(
            "Search {:?} shows {} of {} translations",
            self.search_query,
            self.displayed.len(),
            self.store.len()
        );
    }

    /// Pages are 1-based; page 0 is ignored, pages past the end show nothing.
    pub fn go_to_page(&mut self, page_number: usize) {
        if page_number == 0 {
            warn!("Ignoring navigation to page 0");
            return;
        }
        self.current_page = page_number;
        self.refresh_display();
    }

    fn refresh_display(&mut self) {
        let filtered = pager::filter(self.store.all(), &self.search_query);
        self.displayed = pager::page(&filtered, self.current_page, ITEMS_PER_PAGE)
            .into_iter()
            .cloned()
            .collect();
    }

    // ==================== Edit Form ====================

    pub fn begin_add(&mut self) {
        self.session.begin_add();
    }

    pub fn begin_edit(&mut self, record: &TranslationRecord) {
        self.session.begin_edit(record);
    }

    /// Start editing the loaded record with `id`, if there is one.
    pub fn begin_edit_by_id(&mut self, id: i64) -> bool {
        match self.store.find(id).cloned() {
            Some(record) => {
                self.session.begin_edit(&record);
                true
            }
            None => false,
        }
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Mutable access to the form fields.
    pub fn form(&mut self) -> &mut EditSession {
        &mut self.session
    }

    /// Save the form: update an existing record or create a new one.
    ///
    /// On failure the form stays open with the user's input untouched.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let strings = ViewStrings::get();

        match self.session.submission() {
            Submission::Update { id, record } => {
                match self.gateway.update(id, &record).await {
                    Ok(updated) => {
                        info!("Translation {} updated", id);
                        self.reload().await;
                        self.session.close();
                        self.flash.show(strings.updated);
                        SubmitOutcome::Updated(updated)
                    }
                    Err(e) => {
                        error!("Error updating translation {}: {}", id, e);
                        self.notifier
                            .alert(AlertKind::Error, strings.error_title, strings.update_failed)
                            .await;
                        SubmitOutcome::Failed(e)
                    }
                }
            }
            Submission::Create(record) => match self.gateway.translate(&record).await {
                Ok(translated_text) => {
                    info!("Translation created");
                    self.session.merge_translated_text(translated_text.clone());
                    self.reload().await;
                    self.session.close();
                    self.flash.show(strings.created);
                    SubmitOutcome::Created { translated_text }
                }
                Err(e) => {
                    error!("Error adding translation: {}", e);
                    self.notifier
                        .alert(AlertKind::Error, strings.error_title, strings.create_failed)
                        .await;
                    SubmitOutcome::Failed(e)
                }
            },
        }
    }

    // ==================== Delete ====================

    /// Ask for confirmation, then delete. Never deletes without a confirmed answer.
    pub async fn delete_record(&mut self, id: i64) -> DeleteOutcome {
        let strings = ViewStrings::get();

        let answer = self
            .notifier
            .confirm(strings.confirm_delete_title, strings.confirm_delete_message)
            .await;

        if !answer.is_confirmed() {
            info!("Deletion of translation {} declined ({:?})", id, answer);
            self.notifier
                .alert(
                    AlertKind::Info,
                    strings.delete_cancelled_title,
                    strings.delete_cancelled,
                )
                .await;
            return DeleteOutcome::Declined(answer);
        }

        match self.gateway.delete(id).await {
            Ok(()) => {
                info!("Translation {} deleted", id);
                self.reload().await;
                self.notifier
                    .alert(AlertKind::Success, strings.deleted_title, strings.deleted)
                    .await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                error!("Error deleting translation {}: {}", id, e);
                self.notifier
                    .alert(AlertKind::Error, strings.error_title, strings.delete_failed)
                    .await;
                DeleteOutcome::Failed(e)
            }
        }
    }

    // ==================== Single Record ====================

    /// Fetch one record straight from the backend, bypassing the snapshot.
    pub async fn fetch_record(&self, id: i64) -> Option<TranslationRecord> {
        match self.gateway.get(id).await {
            Ok(record) => Some(record),
            Err(e) => {
                error!("Error fetching translation {}: {}", id, e);
                let strings = ViewStrings::get();
                self.notifier
                    .alert(AlertKind::Error, strings.error_title, strings.fetch_failed)
                    .await;
                None
            }
        }
    }

    // ==================== Rendering State ====================

    pub fn displayed_translations(&self) -> &[TranslationRecord] {
        &self.displayed
    }

    pub fn languages(&self) -> Vec<&'static str> {
        LanguageCodec::languages()
    }

    pub fn selected_translation(&self) -> &TranslationRecord {
        self.session.selected()
    }

    pub fn show_form(&self) -> bool {
        self.session.show_form()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.flash.current()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Pages available for the current search.
    pub fn page_count(&self) -> usize {
        let matching = pager::filter(self.store.all(), &self.search_query).len();
        pager::page_count(matching, ITEMS_PER_PAGE)
    }

    pub fn total_records(&self) -> usize {
        self.store.len()
    }
}
