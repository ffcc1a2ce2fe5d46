//! The closed set of languages with a translation table.

use crate::error::LocalizeError;
use crate::i18n::{LanguageConfig, LanguageRegistry};
use std::fmt;
use tracing::warn;

/// A supported language.
///
/// Every value has a translation table, so rendering with a `Language` never
/// fails. Untrusted codes go through [`Language::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Norwegian,
}

impl Language {
    /// Every language, English first.
    pub const ALL: [Language; 2] = [Language::English, Language::Norwegian];

    /// Resolve an ISO 639-1 code such as "en" or "no".
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered and enabled
    /// * `Err(UnsupportedLanguage)` otherwise
    pub fn from_code(code: &str) -> Result<Language, LocalizeError> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(config.language),
            _ => {
                warn!(code, "Rejecting unsupported language code");
                Err(LocalizeError::UnsupportedLanguage {
                    code: code.to_string(),
                })
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Norwegian => "no",
        }
    }

    /// The word placed before the last item of an enumeration.
    pub fn conjunction(&self) -> &'static str {
        match self {
            Language::English => "or",
            Language::Norwegian => "eller",
        }
    }

    /// Registry metadata for this language.
    ///
    /// # Panics
    /// Panics if the registry has no entry for this value, which the registry
    /// tests rule out.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_language(*self)
            .expect("Every language should be registered")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
