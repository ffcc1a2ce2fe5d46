//! Translation tables: one message renderer per error kind and language.

use crate::i18n::date::format_long_date;
use crate::i18n::list::join;
use crate::i18n::Language;
use chrono::NaiveDate;

/// Every user-facing error message for one language.
///
/// Kinds without payload are plain strings; the rest are renderers over the
/// kind's payload. A new error kind needs a new field here, which makes every
/// language table below fail to compile until it is filled in.
#[derive(Clone, Copy)]
pub struct Translations {
    /// Shown for `generalError`
    pub general_error: &'static str,

    /// Renders `invalidWeekday` from the weekday string
    pub invalid_weekday: fn(&str) -> String,

    /// Renders `invalidEmailDomain` from the email and allowed domains
    pub invalid_email_domain: fn(&str, &[String]) -> String,

    /// Renders `tooLateToAppologize` from the date
    pub too_late_to_appologize: fn(NaiveDate) -> String,
}

impl Translations {
    /// The table for a language. Total over [`Language`].
    pub fn for_language(language: Language) -> &'static Translations {
        match language {
            Language::English => &ENGLISH,
            Language::Norwegian => &NORWEGIAN,
        }
    }
}

// ==================== English Strings ====================

/// English messages (canonical)
pub static ENGLISH: Translations = Translations {
    general_error: "An error has occurred",
    invalid_weekday: english_invalid_weekday,
    invalid_email_domain: english_invalid_email_domain,
    too_late_to_appologize: english_too_late_to_appologize,
};

fn english_invalid_weekday(weekday: &str) -> String {
    format!("\"{}\" is not a valid weekday", weekday)
}

fn english_invalid_email_domain(email: &str, valid_domains: &[String]) -> String {
    format!(
        "The email address {} must have domain {}",
        email,
        join(valid_domains, Language::English.conjunction())
    )
}

fn english_too_late_to_appologize(date: NaiveDate) -> String {
    format!(
        "It's too late to appologize on {}",
        format_long_date(date, Language::English)
    )
}

// ==================== Norwegian Strings ====================

pub static NORWEGIAN: Translations = Translations {
    general_error: "En feil har oppstått",
    invalid_weekday: norwegian_invalid_weekday,
    invalid_email_domain: norwegian_invalid_email_domain,
    too_late_to_appologize: norwegian_too_late_to_appologize,
};

fn norwegian_invalid_weekday(weekday: &str) -> String {
    format!("\"{}\" er ikke en gyldig ukedag", weekday)
}

fn norwegian_invalid_email_domain(email: &str, valid_domains: &[String]) -> String {
    format!(
        "E-postadressen {} må ha domenet {}",
        email,
        join(valid_domains, Language::Norwegian.conjunction())
    )
}

fn norwegian_too_late_to_appologize(date: NaiveDate) -> String {
    format!(
        "Det er for sent å beklage på {}",
        format_long_date(date, Language::Norwegian)
    )
}
