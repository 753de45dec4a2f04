//! Lookup record
//!
//! A [`Record`] is one subject's metadata exactly as the lookup service
//! returned it: an ordered map of field name to scalar value, including the
//! reserved `status` and `message` keys. The `display_ip` derived when the
//! record was fetched is stored as the last key of the same map, so `All`
//! selections and JSON projections carry it like any other field.

use serde_json::{Map, Value};

/// Reserved key carrying `"success"` or `"fail"`
pub const STATUS_KEY: &str = "status";
/// Reserved key carrying the failure reason
pub const MESSAGE_KEY: &str = "message";
/// Key holding the address the service resolved
pub const QUERY_KEY: &str = "query";
/// Key holding the subject address shown in titles
pub const DISPLAY_IP_KEY: &str = "display_ip";

/// Message surfaced when a failed record carries none
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Outcome reported by the lookup service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    Success,
    Fail,
}

/// One subject's fetched metadata
///
/// Records are immutable once built; every accessor borrows.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Build a record from the service response for `requested_ip`.
    ///
    /// `display_ip` is the requested address when one was given, otherwise
    /// the `query` the service resolved, or `"Unknown"` if there is none.
    pub fn from_response(requested_ip: Option<&str>, fields: Map<String, Value>) -> Self {
        let display_ip = match requested_ip.filter(|ip| !ip.is_empty()) {
            Some(ip) => ip.to_string(),
            None => fields
                .get(QUERY_KEY)
                .map(value_to_string)
                .unwrap_or_else(|| "Unknown".to_string()),
        };

        Self { fields }.with_display_ip(display_ip)
    }

    /// Build a record from raw fields without deriving a display address.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Set the subject address shown by every theme
    pub fn with_display_ip(mut self, ip: impl Into<String>) -> Self {
        self.fields
            .insert(DISPLAY_IP_KEY.to_string(), Value::String(ip.into()));
        self
    }

    /// Status reported by the service; a missing `status` counts as success.
    pub fn status(&self) -> RecordStatus {
        match self.fields.get(STATUS_KEY).and_then(Value::as_str) {
            Some("fail") => RecordStatus::Fail,
            _ => RecordStatus::Success,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status() == RecordStatus::Success
    }

    /// Failure message, falling back to [`UNKNOWN_ERROR`]
    pub fn message(&self) -> String {
        self.fields
            .get(MESSAGE_KEY)
            .map(value_to_string)
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
    }

    /// The address this record is about, or `N/A` when none was derived
    pub fn display_ip(&self) -> &str {
        self.fields
            .get(DISPLAY_IP_KEY)
            .and_then(Value::as_str)
            .unwrap_or("N/A")
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names in the order the service returned them
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Value of `field` as display text, if present
    pub fn value_text(&self, field: &str) -> Option<String> {
        self.fields.get(field).map(value_to_string)
    }

    /// Project the record onto `fields`, skipping absent fields and `status`.
    ///
    /// This is the shape shared by the JSON theme and JSON export.
    pub fn project(&self, fields: &[String]) -> Map<String, Value> {
        let mut projected = Map::new();
        for field in fields {
            if field == STATUS_KEY {
                continue;
            }
            if let Some(value) = self.fields.get(field) {
                projected.insert(field.clone(), value.clone());
            }
        }
        projected
    }
}

/// Render a scalar the way it is shown to users: strings without quotes,
/// `null` as an empty string, everything else as its JSON text.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_display_ip_prefers_requested_address() {
        let record = Record::from_response(
            Some("1.1.1.1"),
            map(json!({"status": "success", "query": "1.1.1.1"})),
        );
        assert_eq!(record.display_ip(), "1.1.1.1");
    }

    #[test]
    fn test_display_ip_own_address_uses_query() {
        let record = Record::from_response(
            None,
            map(json!({"status": "success", "query": "203.0.113.7"})),
        );
        assert_eq!(record.display_ip(), "203.0.113.7");

        let record = Record::from_response(Some(""), map(json!({"query": "203.0.113.7"})));
        assert_eq!(record.display_ip(), "203.0.113.7");
    }

    #[test]
    fn test_display_ip_own_address_failed() {
        let record = Record::from_response(
            None,
            map(json!({"status": "fail", "message": "reserved range", "query": "10.0.0.1"})),
        );
        assert_eq!(record.display_ip(), "10.0.0.1");
        assert_eq!(record.status(), RecordStatus::Fail);

        let record = Record::from_response(None, map(json!({"status": "fail"})));
        assert_eq!(record.display_ip(), "Unknown");
        assert_eq!(record.message(), "reserved range");
    }

    #[test]
    fn test_display_ip_is_last_key() {
        let record = Record::from_response(
            Some("8.8.8.8"),
            map(json!({"status": "success", "city": "Mountain View", "query": "8.8.8.8"})),
        );
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["status", "city", "query", "display_ip"]);
        assert_eq!(record.value_text("display_ip").unwrap(), "8.8.8.8");

        let projected = record.project(&["display_ip".to_string(), "city".to_string()]);
        assert_eq!(projected["display_ip"], "8.8.8.8");
    }

    #[test]
    fn test_null_renders_empty() {
        let record = Record::new(map(json!({"zip": null})));
        assert_eq!(record.value_text("zip").unwrap(), "");
    }

    #[test]
    fn test_missing_message_falls_back() {
        let record = Record::new(map(json!({"status": "fail"})));
        assert_eq!(record.message(), UNKNOWN_ERROR);
        assert_eq!(record.display_ip(), "N/A");
    }

    #[test]
    fn test_keys_keep_service_order() {
        let record = Record::new(map(json!({"status": "success", "zip": "1", "city": "X", "as": "AS1"})));
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["status", "zip", "city", "as"]);
    }

    #[test]
    fn test_value_text() {
        let record = Record::new(map(json!({"lat": 37.422, "mobile": false, "city": "Mountain View"})));
        assert_eq!(record.value_text("lat").unwrap(), "37.422");
        assert_eq!(record.value_text("mobile").unwrap(), "false");
        assert_eq!(record.value_text("city").unwrap(), "Mountain View");
        assert!(record.value_text("isp").is_none());
    }

    #[test]
    fn test_project_skips_status_and_absent() {
        let record = Record::new(map(json!({"status": "success", "country": "US", "isp": "Google LLC"})));
        let fields = vec![
            "status".to_string(),
            "isp".to_string(),
            "city".to_string(),
            "country".to_string(),
        ];
        let projected = record.project(&fields);
        let keys: Vec<&String> = projected.keys().collect();
        assert_eq!(keys, vec!["isp", "country"]);
    }
}
