//! Field catalog, selection and classification
//!
//! The catalog maps every field the lookup service knows about to a display
//! category. It is built once at startup and handed by reference to the
//! selector, the classifier and every theme.
//!
//! # Example
//!
//! ```rust,ignore
//! use whatsip::lens::fields::{Category, FieldCatalog};
//!
//! let catalog = FieldCatalog::new();
//! assert_eq!(catalog.category_of("isp"), Some(Category::Network));
//! assert_eq!(catalog.category_of("made_up"), None);
//! ```

pub mod classify;
pub mod selector;

pub use classify::{classify, Classification, FieldGroup, GroupLabel};
pub use selector::{FieldSelection, ALL_MARKER};

use std::fmt;

// =============================================================================
// Types
// =============================================================================

/// Display category of a known field
///
/// Declaration order is the order every grouping theme uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Location,
    Network,
    Details,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 3] = [Category::Location, Category::Network, Category::Details];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Location => "Location",
            Category::Network => "Network",
            Category::Details => "Details",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const LOCATION_FIELDS: &[&str] = &[
    "continent",
    "continentCode",
    "country",
    "countryCode",
    "region",
    "regionName",
    "city",
    "district",
    "zip",
    "lat",
    "lon",
    "timezone",
    "offset",
];

const NETWORK_FIELDS: &[&str] = &["isp", "org", "as", "asname", "reverse"];

const DETAILS_FIELDS: &[&str] = &["currency", "mobile", "proxy", "hosting"];

const DEFAULT_FIELDS: &[&str] = &[
    "country",
    "countryCode",
    "region",
    "regionName",
    "city",
    "zip",
    "lat",
    "lon",
    "timezone",
    "isp",
    "org",
    "as",
    "query",
];

const ALL_POSSIBLE_FIELDS: &[&str] = &[
    "continent",
    "continentCode",
    "country",
    "countryCode",
    "region",
    "regionName",
    "city",
    "district",
    "zip",
    "lat",
    "lon",
    "timezone",
    "offset",
    "currency",
    "isp",
    "org",
    "as",
    "asname",
    "reverse",
    "mobile",
    "proxy",
    "hosting",
    "query",
];

fn owned(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

// =============================================================================
// Catalog
// =============================================================================

/// Registry of known fields and their categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCatalog {
    categories: Vec<(Category, Vec<String>)>,
    default_fields: Vec<String>,
    all_fields: Vec<String>,
}

impl FieldCatalog {
    /// Catalog for the ip-api.com field vocabulary
    pub fn new() -> Self {
        Self {
            categories: vec![
                (Category::Location, owned(LOCATION_FIELDS)),
                (Category::Network, owned(NETWORK_FIELDS)),
                (Category::Details, owned(DETAILS_FIELDS)),
            ],
            default_fields: owned(DEFAULT_FIELDS),
            all_fields: owned(ALL_POSSIBLE_FIELDS),
        }
    }

    /// Replace the default and "all possible" lists, e.g. from configuration.
    ///
    /// Empty lists keep the built-in values.
    pub fn with_field_lists(mut self, default_fields: Vec<String>, all_fields: Vec<String>) -> Self {
        if !default_fields.is_empty() {
            self.default_fields = default_fields;
        }
        if !all_fields.is_empty() {
            self.all_fields = all_fields;
        }
        self
    }

    /// Category of `field`, or `None` for fields the catalog does not know
    pub fn category_of(&self, field: &str) -> Option<Category> {
        self.categories
            .iter()
            .find(|(_, fields)| fields.iter().any(|f| f == field))
            .map(|(category, _)| *category)
    }

    /// Categories with their member fields, in display order
    pub fn categories(&self) -> &[(Category, Vec<String>)] {
        &self.categories
    }

    pub fn default_fields(&self) -> &[String] {
        &self.default_fields
    }

    /// Every field that can be requested from the service
    pub fn all_known_fields(&self) -> &[String] {
        &self.all_fields
    }
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
