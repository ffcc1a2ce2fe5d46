//! Localized rendering of tagged application errors.
//!
//! An [`ErrorVariant`] carries a closed set of error kinds and their payloads.
//! [`render`] picks the translation table for a [`Language`] and produces the
//! user-facing message, joining lists and formatting dates the way that
//! language expects.
//!
//! ```rust
//! use error_i18n::{render, ErrorVariant, Language};
//!
//! let message = render(Language::Norwegian, &ErrorVariant::GeneralError);
//! assert_eq!(message, "En feil har oppstått");
//! ```

pub mod config;
pub mod error;
pub mod i18n;
pub mod kind;
pub mod render;

pub use error::LocalizeError;
pub use i18n::{Language, LanguageRegistry};
pub use kind::{ErrorKind, ErrorVariant};
pub use render::{render, render_all, render_json};
