//! Language handling for the translation list view.
//!
//! # Architecture
//!
//! - `registry`: the fixed table of languages and its lookup indexes
//! - `codec`: abbreviation ⇄ full-name conversion used by the edit form and search
//! - `strings`: user-facing text of the view
//!
//! # Example
//!
//! ```rust
//! use translation_admin::i18n::LanguageCodec;
//!
//! assert_eq!(LanguageCodec::abbreviate("Francés"), "FR");
//! assert_eq!(LanguageCodec::expand("EN"), "Inglés");
//! assert_eq!(LanguageCodec::expand("??"), "");
//! ```

mod codec;
mod registry;
mod strings;

pub use codec::LanguageCodec;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::ViewStrings;
