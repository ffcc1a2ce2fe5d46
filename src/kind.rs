//! The closed error taxonomy and its payloads.
//!
//! Every kind is a variant of [`ErrorVariant`]; adding one forces every
//! translation table in [`crate::i18n`] to grow a matching entry, because the
//! dispatcher matches exhaustively.

use crate::error::LocalizeError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// A tagged application error, serialized with an internal `kind` tag.
///
/// ```json
/// {"kind": "invalidEmailDomain", "email": "a@b.c", "validDomains": ["x.com"]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ErrorVariant {
    GeneralError,

    /// The weekday string is carried as given; it is not checked against
    /// real weekday names.
    InvalidWeekday { weekday: String },

    #[serde(rename_all = "camelCase")]
    InvalidEmailDomain {
        email: String,
        valid_domains: Vec<String>,
    },

    TooLateToAppologize {
        #[serde(with = "calendar_date")]
        date: NaiveDate,
    },
}

/// Payload-free discriminant of [`ErrorVariant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    GeneralError,
    InvalidWeekday,
    InvalidEmailDomain,
    TooLateToAppologize,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 4] = [
        ErrorKind::GeneralError,
        ErrorKind::InvalidWeekday,
        ErrorKind::InvalidEmailDomain,
        ErrorKind::TooLateToAppologize,
    ];

    /// The wire tag used in the `kind` field.
    pub fn tag(&self) -> &'static str {
        match self {
            ErrorKind::GeneralError => "generalError",
            ErrorKind::InvalidWeekday => "invalidWeekday",
            ErrorKind::InvalidEmailDomain => "invalidEmailDomain",
            ErrorKind::TooLateToAppologize => "tooLateToAppologize",
        }
    }

    pub fn from_tag(tag: &str) -> Option<ErrorKind> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl ErrorVariant {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorVariant::GeneralError => ErrorKind::GeneralError,
            ErrorVariant::InvalidWeekday { .. } => ErrorKind::InvalidWeekday,
            ErrorVariant::InvalidEmailDomain { .. } => ErrorKind::InvalidEmailDomain,
            ErrorVariant::TooLateToAppologize { .. } => ErrorKind::TooLateToAppologize,
        }
    }

    /// Decode an error from its JSON form.
    ///
    /// # Returns
    /// * `Err(MissingKind)` if there is no string `kind` field
    /// * `Err(UnknownErrorKind)` if the tag names no known kind
    /// * `Err(InvalidPayload)` if fields are missing, mistyped, or `validDomains` is empty
    pub fn from_json(json: &str) -> Result<ErrorVariant, LocalizeError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<ErrorVariant, LocalizeError> {
        let tag = value
            .get("kind")
            .and_then(Value::as_str)
            .ok_or(LocalizeError::MissingKind)?;

        let kind = match ErrorKind::from_tag(tag) {
            Some(kind) => kind,
            None => {
                warn!(kind = tag, "Rejecting error payload with unknown kind");
                return Err(LocalizeError::UnknownErrorKind {
                    kind: tag.to_string(),
                });
            }
        };

        let variant: ErrorVariant =
            serde_json::from_value(value).map_err(|e| LocalizeError::InvalidPayload {
                kind: kind.tag().to_string(),
                reason: e.to_string(),
            })?;

        if let ErrorVariant::InvalidEmailDomain { valid_domains, .. } = &variant {
            if valid_domains.is_empty() {
                return Err(LocalizeError::InvalidPayload {
                    kind: kind.tag().to_string(),
                    reason: "validDomains must not be empty".to_string(),
                });
            }
        }

        debug!(kind = kind.tag(), "Decoded error payload");
        Ok(variant)
    }
}

/// Calendar dates on the wire: `2020-01-01`, or an RFC 3339 timestamp whose
/// calendar fields are taken in its own offset.
mod calendar_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: '{}'", raw)))
    }

    pub(super) fn parse(raw: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw, FORMAT)
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    }
}
