//! Registry of the languages that can be selected by code.
//!
//! Built once into a `OnceLock` and only read afterwards. A language may have a
//! translation table but stay unreachable from codes while `enabled` is off.

use crate::i18n::Language;
use std::sync::OnceLock;

/// Metadata for one language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    pub language: Language,

    /// ISO 639-1 code accepted by [`Language::from_code`] (e.g., "en", "no")
    pub code: &'static str,

    /// English name (e.g., "Norwegian")
    pub name: &'static str,

    /// Name in the language itself (e.g., "Norsk")
    pub native_name: &'static str,

    /// Whether the code resolves at all
    pub enabled: bool,
}

pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Look up a code, enabled or not.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    pub fn get_by_language(&self, language: Language) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.language == language)
    }

    /// Enabled languages in registry order.
    pub fn list_enabled(&self) -> Vec<Language> {
        self.languages
            .iter()
            .filter(|lang| lang.enabled)
            .map(|lang| lang.language)
            .collect()
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            language: Language::English,
            code: "en",
            name: "English",
            native_name: "English",
            enabled: true,
        },
        LanguageConfig {
            language: Language::Norwegian,
            code: "no",
            name: "Norwegian",
            native_name: "Norsk",
            enabled: true,
        },
    ]
}
