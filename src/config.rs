use crate::lens::fields::FieldCatalog;
use crate::lens::theme::Theme;
use anyhow::{anyhow, Result};
use config::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

const DEFAULT_API_URL: &str = "http://ip-api.com/json/";
const DEFAULT_TIMEOUT_SECS: u64 = 6;

/// Named style attributes used by the themes
///
/// Values are phrases like `"bold white on blue"`; see
/// [`crate::lens::theme::palette::parse_style`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub header: String,
    pub field_name: String,
    pub field_value: String,
    pub error: String,
    pub panel_border: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            header: "bold white on blue".to_string(),
            field_name: "cyan".to_string(),
            field_value: "white".to_string(),
            error: "bold red".to_string(),
            panel_border: "blue".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhatsipConfig {
    /// Display theme name; unknown names fall back to `sleek`
    pub theme: String,

    pub style: StyleConfig,

    /// Fields shown when none are selected on the command line
    pub default_fields: Vec<String>,

    /// Fields requested from the service for `--all`
    pub all_possible_fields: Vec<String>,

    /// Lookup endpoint, the address is appended to it
    pub api_url: String,

    /// Request timeout in seconds (default: 6)
    pub timeout_secs: u64,
}

const EMPTY_CONFIG: &str = r#"### whatsip configuration file

### display theme
### options: sleek, dashboard, tree, minimal, json, grid, markdown, compact
# theme = "sleek"

### fields shown by default; pass `-a` on the command line to see everything
### available: continent, continentCode, country, countryCode, region, regionName,
###            city, district, zip, lat, lon, timezone, offset, currency, isp, org,
###            as, asname, reverse, mobile, proxy, hosting, query
# default_fields = ["country", "countryCode", "region", "regionName", "city", "zip",
#                   "lat", "lon", "timezone", "isp", "org", "as", "query"]

### lookup service
# api_url = "http://ip-api.com/json/"
# timeout_secs = 6

### colors and emphasis
# [style]
# header = "bold white on blue"
# field_name = "cyan"
# field_value = "white"
# error = "bold red"
# panel_border = "blue"
"#;

impl Default for WhatsipConfig {
    fn default() -> Self {
        let catalog = FieldCatalog::new();
        Self {
            theme: Theme::default().to_string(),
            style: StyleConfig::default(),
            default_fields: catalog.default_fields().to_vec(),
            all_possible_fields: catalog.all_known_fields().to_vec(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl WhatsipConfig {
    /// Function to create and initialize a new configuration
    ///
    /// Reads the TOML file at `path` (or the default location), writing a
    /// commented template first if it does not exist, then applies
    /// `WHATSIP_*` environment overrides.
    pub fn new(path: &Option<String>) -> Result<WhatsipConfig> {
        let mut builder = Config::builder();

        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::config_file_path()?,
        };

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow!("Could not convert path to string"))?;
            info!("loading configuration from {}", path_str);
            builder = builder.add_source(config::File::new(path_str, config::FileFormat::Toml));
        } else {
            Self::write_template(&config_path)?;
        }

        // E.g., `WHATSIP_THEME=tree` or `WHATSIP_DEFAULT_FIELDS=city,isp`
        builder = builder.add_source(
            config::Environment::with_prefix("WHATSIP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("default_fields")
                .with_list_parse_key("all_possible_fields"),
        );

        let settings = builder
            .build()
            .map_err(|e| anyhow!("Failed to build configuration: {}", e))?;

        settings
            .try_deserialize::<WhatsipConfig>()
            .map_err(|e| anyhow!("Failed to deserialize configuration: {}", e))
    }

    fn write_template(path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| {
                anyhow!("Unable to create config directory {}: {}", dir.display(), e)
            })?;
        }
        std::fs::write(path, EMPTY_CONFIG)
            .map_err(|e| anyhow!("Unable to create config file {}: {}", path.display(), e))?;
        info!("created configuration template at {}", path.display());
        Ok(())
    }

    /// Get the default config file path
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow!("Could not find configuration directory"))?;
        Ok(config_dir.join("whatsip").join("whatsip.toml"))
    }

    /// Configured theme, with unknown names resolved to the default
    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.theme)
    }

    /// Field catalog carrying the configured field lists
    pub fn catalog(&self) -> FieldCatalog {
        FieldCatalog::new()
            .with_field_lists(self.default_fields.clone(), self.all_possible_fields.clone())
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Display configuration summary
    pub fn summary(&self) -> String {
        let lines = vec![
            format!("Theme:              {}", self.theme()),
            format!("Default Fields:     {}", self.default_fields.join(", ")),
            format!("All Fields:         {}", self.all_possible_fields.join(", ")),
            format!("API URL:            {}", self.api_url),
            format!("Timeout:            {} seconds", self.timeout_secs),
            format!("Header Style:       {}", self.style.header),
            format!("Field Name Style:   {}", self.style.field_name),
            format!("Field Value Style:  {}", self.style.field_value),
            format!("Error Style:        {}", self.style.error),
            format!("Panel Border Style: {}", self.style.panel_border),
        ];
        lines.join("\n")
    }
}

// =============================================================================
// Tests
// =============================================================================
