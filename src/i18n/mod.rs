//! Internationalization (i18n) module for localized error messages.
//!
//! All language-related logic and localized strings live here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: The closed `Language` enum and code validation
//! - `list`: Enumerations with a localized conjunction ("a, b or c")
//! - `date`: Long-form localized dates
//! - `strings`: One translation table per language
//! - `validator`: Checks that every table renders every kind correctly
//!
//! # Example
//!
//! ```rust
//! use error_i18n::i18n::{join, Language};
//!
//! let norwegian = Language::from_code("no").unwrap();
//! assert_eq!(join(&["a", "b"], norwegian.conjunction()), "a eller b");
//! ```

mod date;
mod language;
mod list;
mod registry;
mod strings;
mod validator;

pub use date::format_long_date;
pub use language::Language;
pub use list::join;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{Translations, ENGLISH, NORWEGIAN};
pub use validator::{TranslationValidator, ValidationReport};
