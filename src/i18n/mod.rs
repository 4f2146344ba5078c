//! Translation lookup for user-facing strings.
//!
//! Catalogs are JSON trees keyed by dotted paths such as
//! `requestStatus.IN_PROGRESS`. Lookups fall back to English and finally to
//! the raw key, and positional `{N}` placeholders are substituted from the
//! supplied arguments.
//!
//! # Example
//!
//! ```
//! use jetcare::i18n::{Language, Translator};
//!
//! let translator = Translator::embedded().expect("bundled catalogs parse");
//! assert_eq!(
//!     translator.translate(Language::Nl, "dashboard.welcome", &["John"]),
//!     "Welkom terug, John!"
//! );
//! assert_eq!(translator.translate(Language::De, "missing.key", &[]), "missing.key");
//! ```

mod catalog;
mod language;

pub use catalog::{CatalogError, Translator};
pub use language::{Language, ParseLanguageError};
