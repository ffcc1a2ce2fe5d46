//! Enumerations with a localized conjunction.

/// Join items into a spoken enumeration: `a`, `a or b`, `a, b or c`.
///
/// No Oxford comma is inserted. The input slice is only read. An empty slice
/// yields an empty string.
pub fn join<S: AsRef<str>>(items: &[S], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} {} {}", head, conjunction, last.as_ref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_single() {
        assert_eq!(join(&["valid.com"], "or"), "valid.com");
    }

    #[test]
    fn test_join_two() {
        assert_eq!(join(&["valid.com", "valid.no"], "or"), "valid.com or valid.no");
    }

    #[test]
    fn test_join_three_has_no_oxford_comma() {
        assert_eq!(
            join(&["valid.com", "valid.no", "also.valid.com"], "or"),
            "valid.com, valid.no or also.valid.com"
        );
    }

    #[test]
    fn test_join_norwegian_conjunction() {
        assert_eq!(join(&["a", "b", "c", "d"], "eller"), "a, b, c eller d");
    }

    #[test]
    fn test_join_empty() {
        let items: [&str; 0] = [];
        assert_eq!(join(&items, "or"), "");
    }

    #[test]
    fn test_join_owned_strings_untouched() {
        let items = vec!["x".to_string(), "y".to_string()];
        let first = join(&items, "or");
        let second = join(&items, "or");
        assert_eq!(first, second);
        assert_eq!(items, vec!["x".to_string(), "y".to_string()]);
    }
}
