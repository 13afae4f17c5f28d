//! Admin view over a translation backend: a searchable, paginated record list
//! with an add/edit form whose languages are edited by full name and stored
//! as two-letter codes.

pub mod config;
pub mod console;
pub mod controller;
pub mod flash;
pub mod gateway;
pub mod i18n;
pub mod navigation;
pub mod notify;
pub mod pager;
pub mod record;
pub mod session;
pub mod store;

pub use controller::{DeleteOutcome, LoadOutcome, SubmitOutcome, TranslationListController};
pub use gateway::{GatewayError, HttpTranslationGateway, TranslationGateway};
pub use notify::{AlertKind, Confirmation, NotificationPort};
pub use record::TranslationRecord;
