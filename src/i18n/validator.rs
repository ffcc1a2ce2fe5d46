//! Translation table validation.
//!
//! Renders a fixture of every error kind in one language and checks that the
//! payload survives into the message (weekday, email, each domain) and that no
//! template placeholder was left unfilled.

use crate::i18n::Language;
use crate::kind::{ErrorKind, ErrorVariant};
use crate::render::render;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Messages that are broken for users
    pub errors: Vec<String>,

    /// Messages that render but look off
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation tables.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

const FIXTURE_WEEKDAY: &str = "Caturday";
const FIXTURE_EMAIL: &str = "someone@example.invalid";
const FIXTURE_DOMAINS: [&str; 3] = ["first.example", "second.example", "third.example"];

impl TranslationValidator {
    /// Validate every message of `language` against a fixture payload.
    pub fn validate(language: Language) -> ValidationReport {
        let mut report = ValidationReport::new();

        for kind in ErrorKind::ALL {
            let error = Self::fixture(kind);
            let message = render(language, &error);
            Self::check_message(kind, &error, &message, &mut report);
        }

        report
    }

    /// Check one rendered message against the payload it was rendered from.
    pub fn check_message(
        kind: ErrorKind,
        error: &ErrorVariant,
        message: &str,
        report: &mut ValidationReport,
    ) {
        if message.trim().is_empty() {
            report
                .errors
                .push(format!("{}: rendered message is empty", kind.tag()));
            return;
        }

        let unresolved = Self::extract_placeholders(&Self::strip_payload(error, message));
        if !unresolved.is_empty() {
            report.errors.push(format!(
                "{}: unresolved placeholders {:?}",
                kind.tag(),
                unresolved
            ));
        }

        match error {
            ErrorVariant::GeneralError => {}
            ErrorVariant::InvalidWeekday { weekday } => {
                if !message.contains(weekday.as_str()) {
                    report
                        .errors
                        .push(format!("{}: weekday '{}' missing", kind.tag(), weekday));
                } else if !message.contains(&format!("\"{}\"", weekday)) {
                    report
                        .warnings
                        .push(format!("{}: weekday '{}' is not quoted", kind.tag(), weekday));
                }
            }
            ErrorVariant::InvalidEmailDomain {
                email,
                valid_domains,
            } => {
                if !message.contains(email.as_str()) {
                    report
                        .errors
                        .push(format!("{}: email '{}' missing", kind.tag(), email));
                }
                for domain in valid_domains {
                    if !message.contains(domain.as_str()) {
                        report
                            .errors
                            .push(format!("{}: domain '{}' missing", kind.tag(), domain));
                    }
                }
            }
            ErrorVariant::TooLateToAppologize { date } => {
                let year = date.year().to_string();
                if !message.contains(&year) {
                    report
                        .errors
                        .push(format!("{}: year {} missing", kind.tag(), year));
                }
            }
        }
    }

    /// The message with every payload value cut out, leaving template text only.
    fn strip_payload(error: &ErrorVariant, message: &str) -> String {
        let values: Vec<&str> = match error {
            ErrorVariant::GeneralError | ErrorVariant::TooLateToAppologize { .. } => Vec::new(),
            ErrorVariant::InvalidWeekday { weekday } => vec![weekday.as_str()],
            ErrorVariant::InvalidEmailDomain {
                email,
                valid_domains,
            } => std::iter::once(email.as_str())
                .chain(valid_domains.iter().map(String::as_str))
                .collect(),
        };

        values
            .into_iter()
            .filter(|value| !value.is_empty())
            .fold(message.to_string(), |text, value| text.replace(value, ""))
    }

    /// Leftover `{name}` template tokens.
    pub fn extract_placeholders(text: &str) -> Vec<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| {
            Regex::new(r"\{[A-Za-z_][A-Za-z0-9_]*\}").expect("Invalid placeholder regex")
        });
        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn fixture(kind: ErrorKind) -> ErrorVariant {
        match kind {
            ErrorKind::GeneralError => ErrorVariant::GeneralError,
            ErrorKind::InvalidWeekday => ErrorVariant::InvalidWeekday {
                weekday: FIXTURE_WEEKDAY.to_string(),
            },
            ErrorKind::InvalidEmailDomain => ErrorVariant::InvalidEmailDomain {
                email: FIXTURE_EMAIL.to_string(),
                valid_domains: FIXTURE_DOMAINS.iter().map(|d| d.to_string()).collect(),
            },
            ErrorKind::TooLateToAppologize => ErrorVariant::TooLateToAppologize {
                date: NaiveDate::from_ymd_opt(2023, 11, 22).unwrap_or_default(),
            },
        }
    }
}
