//! Field selection
//!
//! Resolves what the user asked for into the ordered field list a theme or
//! the exporter works from. Console rendering and file export both go
//! through [`FieldSelection::resolve`], so the two never disagree.

use crate::lens::record::{Record, MESSAGE_KEY, STATUS_KEY};

/// Wildcard meaning "every field the record has"
pub const ALL_MARKER: &str = "all";

/// What the user asked to see
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldSelection {
    /// Nothing given; use the configured defaults
    #[default]
    Defaults,
    /// Every field present in the record except `status`
    All,
    /// Explicit list in caller order, duplicates kept
    Explicit(Vec<String>),
}

impl FieldSelection {
    /// Build a selection from a raw list such as `-f city,isp`.
    ///
    /// An empty list means defaults; the `all` marker anywhere in the list
    /// selects everything.
    pub fn from_list<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields: Vec<String> = fields
            .into_iter()
            .map(|f| f.as_ref().trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();

        if fields.is_empty() {
            FieldSelection::Defaults
        } else if fields.iter().any(|f| f == ALL_MARKER) {
            FieldSelection::All
        } else {
            FieldSelection::Explicit(fields)
        }
    }

    /// Parse a comma-separated list
    pub fn parse(list: &str) -> Self {
        Self::from_list(list.split(','))
    }

    /// Resolve the fields to display or export for `record`.
    ///
    /// Explicit lists are returned verbatim; fields missing from the record
    /// are skipped later by whoever renders them.
    pub fn resolve(&self, defaults: &[String], record: &Record) -> Vec<String> {
        match self {
            FieldSelection::Defaults => defaults.to_vec(),
            FieldSelection::All => record
                .keys()
                .filter(|key| *key != STATUS_KEY)
                .map(str::to_string)
                .collect(),
            FieldSelection::Explicit(fields) => fields.clone(),
        }
    }

    /// Fields to request from the lookup service.
    ///
    /// `status` and `message` are stripped; the client re-adds them itself.
    pub fn requested_fields(&self, defaults: &[String], all_known: &[String]) -> Vec<String> {
        let base = match self {
            FieldSelection::Defaults => defaults,
            FieldSelection::All => all_known,
            FieldSelection::Explicit(fields) => fields.as_slice(),
        };
        base.iter()
            .filter(|f| f.as_str() != STATUS_KEY && f.as_str() != MESSAGE_KEY)
            .cloned()
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> Record {
        let fields = json!({
            "status": "success",
            "country": "United States",
            "city": "Mountain View",
            "isp": "Google LLC",
            "query": "8.8.8.8"
        });
        Record::new(fields.as_object().cloned().unwrap())
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_list() {
        assert_eq!(FieldSelection::from_list(Vec::<String>::new()), FieldSelection::Defaults);
        assert_eq!(FieldSelection::parse(""), FieldSelection::Defaults);
        assert_eq!(FieldSelection::parse("city,all"), FieldSelection::All);
        assert_eq!(
            FieldSelection::parse(" city , isp,city"),
            FieldSelection::Explicit(strings(&["city", "isp", "city"]))
        );
    }

    #[test]
    fn test_resolve_defaults() {
        let defaults = strings(&["country", "zip"]);
        let resolved = FieldSelection::Defaults.resolve(&defaults, &record());
        assert_eq!(resolved, defaults);
    }

    #[test]
    fn test_resolve_all_uses_record_order_without_status() {
        let resolved = FieldSelection::All.resolve(&[], &record());
        assert_eq!(resolved, strings(&["country", "city", "isp", "query"]));
    }

    #[test]
    fn test_resolve_all_includes_display_ip() {
        let fields = json!({"status": "success", "city": "Sydney", "query": "1.1.1.1"});
        let record = Record::from_response(Some("1.1.1.1"), fields.as_object().cloned().unwrap());
        let resolved = FieldSelection::All.resolve(&[], &record);
        assert_eq!(resolved, strings(&["city", "query", "display_ip"]));
    }

    #[test]
    fn test_resolve_explicit_is_verbatim() {
        let selection = FieldSelection::Explicit(strings(&["zip", "isp", "made_up", "isp"]));
        let resolved = selection.resolve(&[], &record());
        assert_eq!(resolved, strings(&["zip", "isp", "made_up", "isp"]));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let defaults = strings(&["country"]);
        for selection in [
            FieldSelection::Defaults,
            FieldSelection::All,
            FieldSelection::parse("isp,country"),
        ] {
            let first = selection.resolve(&defaults, &record());
            let second = selection.resolve(&defaults, &record());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_requested_fields() {
        let defaults = strings(&["country", "query"]);
        let all = strings(&["country", "city", "query"]);
        assert_eq!(FieldSelection::Defaults.requested_fields(&defaults, &all), defaults);
        assert_eq!(FieldSelection::All.requested_fields(&defaults, &all), all);
        assert_eq!(
            FieldSelection::parse("status,isp,message").requested_fields(&defaults, &all),
            strings(&["isp"])
        );
    }
}
