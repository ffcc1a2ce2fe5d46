//! Long-form calendar dates per language.
//!
//! Dates are rendered from their calendar fields only; no time zone or clock
//! is consulted.

use crate::i18n::Language;
use chrono::{Datelike, NaiveDate};

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const NORWEGIAN_MONTHS: [&str; 12] = [
    "januar",
    "februar",
    "mars",
    "april",
    "mai",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "desember",
];

/// Render `date` the way `language` writes a long date.
///
/// * English: `January 1st, 2020`
/// * Norwegian: `1. januar 2020`
pub fn format_long_date(date: NaiveDate, language: Language) -> String {
    let month = date.month0() as usize;
    match language {
        Language::English => format!(
            "{} {}{}, {}",
            ENGLISH_MONTHS[month],
            date.day(),
            english_ordinal_suffix(date.day()),
            date.year()
        ),
        Language::Norwegian => {
            format!("{}. {} {}", date.day(), NORWEGIAN_MONTHS[month], date.year())
        }
    }
}

/// 1st, 2nd, 3rd, 4th ... 11th, 12th, 13th ... 21st, 22nd, 23rd ...
fn english_ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // ==================== English Tests ====================

    #[test]
    fn test_english_new_year() {
        assert_eq!(
            format_long_date(ymd(2020, 1, 1), Language::English),
            "January 1st, 2020"
        );
    }

    #[test]
    fn test_english_ordinals() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (23, "23rd"),
            (30, "30th"),
            (31, "31st"),
        ];
        for (day, expected) in cases {
            let rendered = format_long_date(ymd(2021, 3, day), Language::English);
            assert_eq!(rendered, format!("March {}, 2021", expected));
        }
    }

    #[test]
    fn test_english_december() {
        assert_eq!(
            format_long_date(ymd(1999, 12, 24), Language::English),
            "December 24th, 1999"
        );
    }

    // ==================== Norwegian Tests ====================

    #[test]
    fn test_norwegian_new_year() {
        assert_eq!(
            format_long_date(ymd(2020, 1, 1), Language::Norwegian),
            "1. januar 2020"
        );
    }

    #[test]
    fn test_norwegian_lowercase_months() {
        assert_eq!(
            format_long_date(ymd(2022, 5, 17), Language::Norwegian),
            "17. mai 2022"
        );
        assert_eq!(
            format_long_date(ymd(2022, 12, 31), Language::Norwegian),
            "31. desember 2022"
        );
    }

    // ==================== Table Tests ====================

    #[test]
    fn test_every_month_has_a_name() {
        for month in 1..=12 {
            let date = ymd(2020, month, 1);
            for language in Language::ALL {
                let rendered = format_long_date(date, language);
                assert!(rendered.contains("2020"));
            }
        }
        assert!(ENGLISH_MONTHS.iter().all(|m| !m.is_empty()));
        assert!(NORWEGIAN_MONTHS.iter().all(|m| !m.is_empty()));
    }
}
