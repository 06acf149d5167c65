//! Internationalization (i18n) module: translations and their validation.
//!
//! # Architecture
//!
//! - `record`: Localized strings and metadata for one language
//! - `store`: Ordered set of every language, loaded once from the translations file
//! - `validator`: Checks on translations, the template and assembled pages
//!
//! # Example
//!
//! ```rust,ignore
//! use landing_page_builder::i18n::TranslationStore;
//!
//! let store = TranslationStore::load(Path::new("translations.json"))?;
//! for entry in store.iter() {
//!     println!("{} -> {}", entry.code, entry.record.path);
//! }
//! ```

mod record;
mod store;
mod validator;

pub use record::TranslationRecord;
pub use store::{LanguageEntry, TranslationStore, SCHEMA_KEY};
pub use validator::{PageValidator, ValidationReport};
