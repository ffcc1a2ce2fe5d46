//! Dispatch from (language, error) to the localized message.

use crate::error::LocalizeError;
use crate::i18n::{Language, Translations};
use crate::kind::ErrorVariant;

/// Render `error` as a user-facing message in `language`.
///
/// The match is exhaustive over [`ErrorVariant`], so every (language, kind)
/// pair has a message. The error is only borrowed; the returned string is new.
pub fn render(language: Language, error: &ErrorVariant) -> String {
    let table = Translations::for_language(language);

    match error {
        ErrorVariant::GeneralError => table.general_error.to_string(),
        ErrorVariant::InvalidWeekday { weekday } => (table.invalid_weekday)(weekday),
        ErrorVariant::InvalidEmailDomain {
            email,
            valid_domains,
        } => (table.invalid_email_domain)(email, valid_domains),
        ErrorVariant::TooLateToAppologize { date } => (table.too_late_to_appologize)(*date),
    }
}

/// Render an error given as raw language code and JSON payload.
///
/// # Returns
/// * `Err(UnsupportedLanguage)` if `code` has no translation table
/// * `Err(UnknownErrorKind)` / `Err(InvalidPayload)` if the payload does not decode
pub fn render_json(code: &str, json: &str) -> Result<String, LocalizeError> {
    let language = Language::from_code(code)?;
    let error = ErrorVariant::from_json(json)?;
    Ok(render(language, &error))
}

/// Render one error in every supported language.
pub fn render_all(error: &ErrorVariant) -> Vec<(Language, String)> {
    Language::ALL
        .into_iter()
        .map(|language| (language, render(language, error)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_year_2020() -> ErrorVariant {
        ErrorVariant::TooLateToAppologize {
            date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        }
    }

    // ==================== render Tests ====================

    #[test]
    fn test_render_general_error() {
        assert_eq!(
            render(Language::English, &ErrorVariant::GeneralError),
            "An error has occurred"
        );
        assert_eq!(
            render(Language::Norwegian, &ErrorVariant::GeneralError),
            "En feil har oppstått"
        );
    }

    #[test]
    fn test_render_weekday() {
        let error = ErrorVariant::InvalidWeekday {
            weekday: "Caturday".to_string(),
        };
        assert_eq!(
            render(Language::Norwegian, &error),
            "\"Caturday\" er ikke en gyldig ukedag"
        );
    }

    #[test]
    fn test_render_date() {
        assert_eq!(
            render(Language::English, &new_year_2020()),
            "It's too late to appologize on January 1st, 2020"
        );
    }

    #[test]
    fn test_render_does_not_consume_error() {
        let error = new_year_2020();
        let first = render(Language::English, &error);
        let second = render(Language::English, &error);
        assert_eq!(first, second);
        assert_eq!(error, new_year_2020());
    }

    // ==================== render_json Tests ====================

    #[test]
    fn test_render_json_email() {
        let message = render_json(
            "en",
            r#"{"kind":"invalidEmailDomain","email":"test@invalid.now","validDomains":["valid.com","valid.no"]}"#,
        )
        .unwrap();
        assert_eq!(
            message,
            "The email address test@invalid.now must have domain valid.com or valid.no"
        );
    }

    #[test]
    fn test_render_json_unsupported_language() {
        let result = render_json("fr", r#"{"kind":"generalError"}"#);
        assert!(matches!(
            result,
            Err(LocalizeError::UnsupportedLanguage { .. })
        ));
    }

    #[test]
    fn test_render_json_unknown_kind() {
        let result = render_json("no", r#"{"kind":"somethingElse"}"#);
        assert!(matches!(result, Err(LocalizeError::UnknownErrorKind { .. })));
    }

    #[test]
    fn test_render_json_checks_language_first() {
        let result = render_json("xx", r#"{"kind":"somethingElse"}"#);
        assert!(matches!(
            result,
            Err(LocalizeError::UnsupportedLanguage { .. })
        ));
    }

    // ==================== render_all Tests ====================

    #[test]
    fn test_render_all_covers_every_language() {
        let rendered = render_all(&ErrorVariant::GeneralError);
        assert_eq!(rendered.len(), Language::ALL.len());
        assert_eq!(rendered[0], (Language::English, "An error has occurred".to_string()));
        assert_eq!(rendered[1], (Language::Norwegian, "En feil har oppstått".to_string()));
    }
}
