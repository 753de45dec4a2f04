//! Common utility functions for lens modules
//!
//! Shared helpers for turning field names into labels and deciding which
//! fields are shown as ordinary rows.

use crate::lens::record::{QUERY_KEY, STATUS_KEY};

/// Capitalize a field name for display
///
/// The first character is uppercased and the rest lowercased, so camel-case
/// service names collapse into one word.
///
/// # Examples
///
/// ```
/// use whatsip::lens::utils::capitalize_field;
///
/// assert_eq!(capitalize_field("city"), "City");
/// assert_eq!(capitalize_field("countryCode"), "Countrycode");
/// ```
pub fn capitalize_field(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Whether `field` is metadata rather than a data row
///
/// `status` drives the error path and `query` is surfaced as the subject,
/// so neither is rendered as a `Name: Value` row.
pub fn is_metadata_field(field: &str) -> bool {
    field == STATUS_KEY || field == QUERY_KEY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_field() {
        assert_eq!(capitalize_field("isp"), "Isp");
        assert_eq!(capitalize_field("regionName"), "Regionname");
        assert_eq!(capitalize_field("AS"), "As");
        assert_eq!(capitalize_field(""), "");
    }

    #[test]
    fn test_capitalize_field_unicode() {
        assert_eq!(capitalize_field("ärger"), "Ärger");
    }

    #[test]
    fn test_is_metadata_field() {
        assert!(is_metadata_field("status"));
        assert!(is_metadata_field("query"));
        assert!(!is_metadata_field("country"));
        assert!(!is_metadata_field("message"));
    }
}
