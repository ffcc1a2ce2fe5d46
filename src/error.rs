use thiserror::Error;

/// Failures on the dynamic (string/JSON) rendering path.
///
/// The typed path through [`crate::render`] cannot fail: both the language and
/// the error kind are closed enums there. These variants only surface when a
/// caller hands in raw codes or JSON that has not been validated yet.
#[derive(Debug, Error)]
pub enum LocalizeError {
    /// No translation table exists for the requested language code
    #[error("unsupported language: '{code}'")]
    UnsupportedLanguage { code: String },

    /// The `kind` tag does not name a known error kind
    #[error("unknown error kind: '{kind}'")]
    UnknownErrorKind { kind: String },

    /// The payload has no string `kind` tag at all
    #[error("error payload is missing a 'kind' tag")]
    MissingKind,

    /// The tag is known but its payload fields are malformed
    #[error("invalid payload for '{kind}': {reason}")]
    InvalidPayload { kind: String, reason: String },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_display() {
        let err = LocalizeError::UnsupportedLanguage {
            code: "fr".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported language: 'fr'");
    }

    #[test]
    fn test_unknown_error_kind_display() {
        let err = LocalizeError::UnknownErrorKind {
            kind: "outOfCoffee".to_string(),
        };
        assert_eq!(err.to_string(), "unknown error kind: 'outOfCoffee'");
    }

    #[test]
    fn test_invalid_payload_display() {
        let err = LocalizeError::InvalidPayload {
            kind: "invalidWeekday".to_string(),
            reason: "missing field `weekday`".to_string(),
        };
        assert!(err.to_string().contains("invalidWeekday"));
        assert!(err.to_string().contains("weekday"));
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LocalizeError = json_err.into();
        assert!(matches!(err, LocalizeError::Json(_)));
    }
}
