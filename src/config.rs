//! Environment settings for the `preview` binary.

use crate::i18n::{Language, LanguageRegistry};
use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Settings for the `preview` binary. The library itself reads no environment.
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Languages to render, in the order given
    pub languages: Vec<Language>,

    /// Date used for the date-bearing error kinds
    pub date: NaiveDate,
}

impl PreviewConfig {
    pub fn from_env() -> Result<Self> {
        let languages = match std::env::var("PREVIEW_LANGUAGES") {
            Ok(raw) => parse_languages(&raw).context("PREVIEW_LANGUAGES is invalid")?,
            Err(_) => LanguageRegistry::get().list_enabled(),
        };

        let date = match std::env::var("PREVIEW_DATE") {
            Ok(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .with_context(|| format!("PREVIEW_DATE '{}' is not a YYYY-MM-DD date", raw))?,
            Err(_) => default_date(),
        };

        Ok(Self { languages, date })
    }
}

/// Comma-separated language codes, e.g. `en,no`. Blank entries are skipped.
fn parse_languages(raw: &str) -> Result<Vec<Language>> {
    let languages = raw
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(|code| Language::from_code(code).with_context(|| format!("bad code '{}'", code)))
        .collect::<Result<Vec<_>>>()?;

    if languages.is_empty() {
        anyhow::bail!("no language codes given");
    }
    Ok(languages)
}

fn default_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default()
}
