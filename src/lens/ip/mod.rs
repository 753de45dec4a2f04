//! IP information lookup lens
//!
//! Fetches geolocation and network metadata for an address from the
//! ip-api.com JSON endpoint and turns the response into a [`Record`].
//! Lookups are blocking; callers run them one after another.

use crate::config::WhatsipConfig;
use crate::lens::record::{Record, MESSAGE_KEY, STATUS_KEY};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

// =============================================================================
// Types
// =============================================================================

/// Errors that can occur during a lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The service did not answer within the configured timeout
    Timeout,
    /// The service answered with a non-success HTTP status
    Http(u16),
    /// Connection, DNS or other transport failure
    Transport(String),
    /// The response body was not a JSON object
    Decode(String),
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::Timeout => write!(f, "The API did not respond in time."),
            LookupError::Http(code) => write!(f, "HTTP status {}", code),
            LookupError::Transport(e) => write!(f, "{}", e),
            LookupError::Decode(e) => write!(f, "Invalid response: {}", e),
        }
    }
}

impl std::error::Error for LookupError {}

impl From<ureq::Error> for LookupError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(code) => LookupError::Http(code),
            ureq::Error::Timeout(_) => LookupError::Timeout,
            ureq::Error::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => {
                LookupError::Timeout
            }
            other => LookupError::Transport(other.to_string()),
        }
    }
}

// =============================================================================
// Args
// =============================================================================

/// Arguments for IP lookup operations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IpLookupArgs {
    /// Address to look up; `None` looks up the caller's own address
    pub ip: Option<String>,

    /// Fields to ask the service for; empty means the service default
    #[serde(default)]
    pub fields: Vec<String>,
}

impl IpLookupArgs {
    /// Create new args for a specific address
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: Some(ip.into()),
            fields: vec![],
        }
    }

    /// Create args for public IP lookup
    pub fn public_ip() -> Self {
        Self::default()
    }

    /// Set the fields to request
    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    /// Address to put in the URL, empty for the caller's own address
    fn target(&self) -> &str {
        self.ip.as_deref().unwrap_or("")
    }

    /// Value of the `fields` query parameter, if any.
    ///
    /// `status` and `message` always ride along so failures are reported
    /// even when the caller did not ask for them.
    fn fields_param(&self) -> Option<String> {
        let mut fields: Vec<&str> = self
            .fields
            .iter()
            .map(String::as_str)
            .filter(|f| *f != STATUS_KEY && *f != MESSAGE_KEY)
            .collect();
        if fields.is_empty() {
            return None;
        }
        fields.push(STATUS_KEY);
        fields.push(MESSAGE_KEY);
        Some(fields.join(","))
    }
}

// =============================================================================
// Lens
// =============================================================================

/// Default lookup endpoint
pub const IP_INFO_API: &str = "http://ip-api.com/json/";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 6;

/// IP information lookup lens
///
/// # Example
///
/// ```rust,ignore
/// use whatsip::lens::ip::{IpLens, IpLookupArgs};
///
/// let lens = IpLens::new();
/// let record = lens.lookup(&IpLookupArgs::new("8.8.8.8"))?;
/// println!("{}", record.display_ip());
/// ```
pub struct IpLens {
    api_url: String,
    agent: ureq::Agent,
}

impl IpLens {
    /// Create a new IP lens with the default endpoint and timeout
    pub fn new() -> Self {
        Self::with_settings(IP_INFO_API, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a lens for a custom endpoint and timeout
    pub fn with_settings(api_url: &str, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            api_url: api_url.to_string(),
            agent,
        }
    }

    /// Create a lens from the `api_url` and `timeout_secs` settings
    pub fn from_config(config: &WhatsipConfig) -> Self {
        Self::with_settings(&config.api_url, config.timeout())
    }

    fn url_for(&self, args: &IpLookupArgs) -> String {
        let base = self.api_url.trim_end_matches('/');
        format!("{}/{}", base, args.target())
    }

    /// Look up IP information
    ///
    /// A service-level failure (`status: fail`) is returned as an ordinary
    /// record; only transport problems become a [`LookupError`].
    pub fn lookup(&self, args: &IpLookupArgs) -> Result<Record, LookupError> {
        let url = self.url_for(args);
        let mut request = self.agent.get(&url);
        if let Some(fields) = args.fields_param() {
            debug!("looking up {} with fields {}", url, fields);
            request = request.query("fields", fields);
        } else {
            debug!("looking up {}", url);
        }

        let body = request.call()?.body_mut().read_to_string()?;
        record_from_body(args.ip.as_deref(), &body)
    }
}

impl Default for IpLens {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a response body into a [`Record`] for `requested_ip`
pub fn record_from_body(requested_ip: Option<&str>, body: &str) -> Result<Record, LookupError> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => Ok(Record::from_response(requested_ip, fields)),
        Ok(other) => Err(LookupError::Decode(format!(
            "expected a JSON object, got {}",
            other
        ))),
        Err(e) => Err(LookupError::Decode(e.to_string())),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore = "requires network access"]
    fn test_fetch_ip_info() {
        let lens = IpLens::new();
        let args = IpLookupArgs::new("8.8.8.8").with_fields(vec!["country".to_string()]);
        let record = lens.lookup(&args).unwrap();
        assert!(record.is_success());
        assert_eq!(record.display_ip(), "8.8.8.8");
    }

    #[test]
    fn test_url_for() {
        let lens = IpLens::new();
        assert_eq!(
            lens.url_for(&IpLookupArgs::new("1.1.1.1")),
            "http://ip-api.com/json/1.1.1.1"
        );
        assert_eq!(lens.url_for(&IpLookupArgs::public_ip()), "http://ip-api.com/json/");

        let lens = IpLens::with_settings("http://localhost:8080/json", Duration::from_secs(1));
        assert_eq!(
            lens.url_for(&IpLookupArgs::new("1.1.1.1")),
            "http://localhost:8080/json/1.1.1.1"
        );
    }

    #[test]
    fn test_fields_param() {
        assert_eq!(IpLookupArgs::public_ip().fields_param(), None);

        let args = IpLookupArgs::public_ip().with_fields(vec![
            "status".to_string(),
            "city".to_string(),
            "isp".to_string(),
        ]);
        assert_eq!(args.fields_param().unwrap(), "city,isp,status,message");
    }

    #[test]
    fn test_record_from_body() {
        let body = r#"{"status":"success","country":"United States","query":"8.8.8.8"}"#;
        let record = record_from_body(None, body).unwrap();
        assert!(record.is_success());
        assert_eq!(record.display_ip(), "8.8.8.8");

        let body = r#"{"status":"fail","message":"invalid query","query":"nope"}"#;
        let record = record_from_body(Some("nope"), body).unwrap();
        assert!(!record.is_success());
        assert_eq!(record.message(), "invalid query");
        assert_eq!(record.display_ip(), "nope");
    }

    #[test]
    fn test_record_from_body_rejects_non_objects() {
        assert!(matches!(
            record_from_body(None, "[1, 2]"),
            Err(LookupError::Decode(_))
        ));
        assert!(matches!(
            record_from_body(None, "<html>"),
            Err(LookupError::Decode(_))
        ));
    }

    #[test]
    fn test_lookup_error_display() {
        assert_eq!(LookupError::Timeout.to_string(), "The API did not respond in time.");
        assert!(LookupError::Http(429).to_string().contains("429"));
    }
}
