//! Input classification: ZIP code, "City, Region" query, or invalid.

use super::region::convert_region;
use regex::Regex;
use std::sync::LazyLock;

static ZIP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+$").unwrap_or_else(|e| unreachable!("static ZIP pattern is valid: {e}"))
});

/// Arguments that ask for the usage text instead of a lookup.
pub const HELP_TRIGGERS: &[&str] = &["help", "--help", "-h", "-H", "HELP"];

/// What a raw location string turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedLocation {
    /// ASCII-digit postal code, passed through verbatim.
    Zip(String),
    /// Free-text query for the direct geocoding endpoint.
    City(String),
    /// Too short, or non-numeric without a comma.
    Invalid,
}

/// Decide which lookup a raw location string should go through.
///
/// Region-code expansion only happens when the whole input is exactly two
/// characters long and contains a comma (",X" and the like). Longer inputs
/// such as "Denver, CO" go to the geocoder untouched.
pub fn classify(raw: &str) -> ClassifiedLocation {
    let len = raw.chars().count();
    if len < 2 {
        return ClassifiedLocation::Invalid;
    }
    if ZIP_PATTERN.is_match(raw) {
        return ClassifiedLocation::Zip(raw.to_string());
    }
    if !raw.contains(',') {
        return ClassifiedLocation::Invalid;
    }
    if len == 2 {
        return ClassifiedLocation::City(convert_region(raw));
    }
    ClassifiedLocation::City(raw.to_string())
}

/// True when `arg` is one of the help triggers, ignoring ASCII case.
pub fn is_help_trigger(arg: &str) -> bool {
    HELP_TRIGGERS
        .iter()
        .any(|trigger| trigger.eq_ignore_ascii_case(arg))
}

/// True when the argument list is empty or contains a help trigger.
pub fn needs_help<S: AsRef<str>>(args: &[S]) -> bool {
    args.is_empty() || args.iter().any(|arg| is_help_trigger(arg.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_passthrough() {
        for zip in ["10001", "94103", "00", "123456789"] {
            assert_eq!(classify(zip), ClassifiedLocation::Zip(zip.to_string()));
        }
    }

    #[test]
    fn test_short_input_invalid() {
        assert_eq!(classify("a"), ClassifiedLocation::Invalid);
        assert_eq!(classify("7"), ClassifiedLocation::Invalid);
        assert_eq!(classify(""), ClassifiedLocation::Invalid);
    }

    #[test]
    fn test_length_counts_chars() {
        // one char, two bytes
        assert_eq!(classify("é"), ClassifiedLocation::Invalid);
    }

    #[test]
    fn test_non_ascii_digits_are_not_zip() {
        assert_eq!(classify("١٢٣٤٥"), ClassifiedLocation::Invalid);
        assert_eq!(classify("１２３"), ClassifiedLocation::Invalid);
        assert_eq!(
            classify("١٢٣,٤"),
            ClassifiedLocation::City("١٢٣,٤".to_string())
        );
    }

    #[test]
    fn test_city_without_comma_invalid() {
        assert_eq!(classify("Denver"), ClassifiedLocation::Invalid);
        assert_eq!(classify("10001a"), ClassifiedLocation::Invalid);
    }

    #[test]
    fn test_city_passed_through_unchanged() {
        assert_eq!(
            classify("Denver, CO"),
            ClassifiedLocation::City("Denver, CO".to_string())
        );
        assert_eq!(
            classify(" Miami , FL "),
            ClassifiedLocation::City(" Miami , FL ".to_string())
        );
    }

    #[test]
    fn test_two_char_comma_input_is_expanded() {
        assert_eq!(classify(",x"), ClassifiedLocation::City(",X".to_string()));
        assert_eq!(classify("a,"), ClassifiedLocation::City("a,".to_string()));
    }

    #[test]
    fn test_digits_with_comma_is_city() {
        assert_eq!(
            classify("10001,US"),
            ClassifiedLocation::City("10001,US".to_string())
        );
    }

    #[test]
    fn test_needs_help_with_trigger() {
        assert!(needs_help(&["Boulder, CO", "--help"]));
        assert!(needs_help(&["Boulder, CO", "-h"]));
        assert!(needs_help(&["Austin, TX", "-H"]));
        assert!(needs_help(&["90210", "Los Angeles, CA", "help"]));
    }

    #[test]
    fn test_needs_help_case_insensitive() {
        assert!(needs_help(&["Chicago, IL", "HELP"]));
        assert!(needs_help(&["Chicago, IL", "--HeLp"]));
    }

    #[test]
    fn test_needs_help_without_trigger() {
        assert!(!needs_help(&["Denver, CO"]));
        assert!(!needs_help(&["New York, NY", "10001"]));
        assert!(!needs_help(&["helpful, MT"]));
    }

    #[test]
    fn test_is_help_trigger() {
        assert!(is_help_trigger("-h"));
        assert!(is_help_trigger("Help"));
        assert!(!is_help_trigger("--format"));
        assert!(!is_help_trigger("helps"));
    }

    #[test]
    fn test_needs_help_empty() {
        let empty: [&str; 0] = [];
        assert!(needs_help(&empty));
    }
}
