//! Presentation themes
//!
//! Every theme turns the same inputs (a record, its resolved field list and
//! a palette) into a differently shaped piece of text. The set of themes is
//! closed: [`Theme::from_name`] is the single resolver and unknown names land
//! on [`Theme::Sleek`].
//!
//! | Theme | Shape |
//! |-------|-------|
//! | `sleek` | rounded two-column table |
//! | `dashboard` | one panel per category, side by side |
//! | `grid` | one table with a category column |
//! | `tree` | category branches under the subject |
//! | `json` | JSON object of the resolved fields |
//! | `markdown` | heading plus one section per category |
//! | `minimal` | one `Name: value` line per field |
//! | `compact` | everything on a single line |

mod compact;
mod dashboard;
mod grid;
pub mod json;
pub mod markdown;
mod minimal;
pub mod palette;
mod sleek;
mod tree;

pub use palette::{Palette, StyleRole};

use crate::lens::fields::{classify, Classification, FieldCatalog};
use crate::lens::record::Record;
use crate::lens::utils::{capitalize_field, is_metadata_field};
use std::fmt;

// =============================================================================
// Types
// =============================================================================

/// Rendering strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Rounded field/value table
    #[default]
    Sleek,
    Dashboard,
    Tree,
    Minimal,
    Json,
    Grid,
    Markdown,
    Compact,
}

impl Theme {
    /// Resolve a theme name; anything unrecognized is the default theme.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "sleek" => Theme::Sleek,
            "dashboard" => Theme::Dashboard,
            "tree" => Theme::Tree,
            "minimal" => Theme::Minimal,
            "json" => Theme::Json,
            "grid" => Theme::Grid,
            "markdown" => Theme::Markdown,
            "compact" => Theme::Compact,
            _ => Theme::default(),
        }
    }

    /// Get a list of all theme names for help text
    pub fn all_names() -> &'static [&'static str] {
        &[
            "sleek",
            "dashboard",
            "tree",
            "minimal",
            "json",
            "grid",
            "markdown",
            "compact",
        ]
    }

    /// Render `ctx` in this theme's shape
    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        match self {
            Theme::Sleek => sleek::render(ctx),
            Theme::Dashboard => dashboard::render(ctx),
            Theme::Tree => tree::render(ctx),
            Theme::Minimal => minimal::render(ctx),
            Theme::Json => json::render(ctx),
            Theme::Grid => grid::render(ctx),
            Theme::Markdown => markdown::render(ctx),
            Theme::Compact => compact::render(ctx),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Sleek => "sleek",
            Theme::Dashboard => "dashboard",
            Theme::Tree => "tree",
            Theme::Minimal => "minimal",
            Theme::Json => "json",
            Theme::Grid => "grid",
            Theme::Markdown => "markdown",
            Theme::Compact => "compact",
        };
        f.write_str(name)
    }
}

/// Inputs shared by every theme
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub record: &'a Record,
    /// Resolved field list, see [`crate::lens::fields::FieldSelection::resolve`]
    pub fields: &'a [String],
    pub catalog: &'a FieldCatalog,
    pub palette: &'a Palette,
}

/// A displayable row: capitalized name and value text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub value: String,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        record: &'a Record,
        fields: &'a [String],
        catalog: &'a FieldCatalog,
        palette: &'a Palette,
    ) -> Self {
        Self {
            record,
            fields,
            catalog,
            palette,
        }
    }

    /// The address the output is about
    pub fn subject(&self) -> &str {
        self.record.display_ip()
    }

    /// Rows for flat themes, in resolved order.
    ///
    /// Fields missing from the record and metadata fields are skipped.
    pub fn rows(&self) -> Vec<Row> {
        self.rows_for(self.fields)
    }

    /// Rows for an explicit field list, with the same skipping rules as [`Self::rows`]
    pub fn rows_for(&self, fields: &[String]) -> Vec<Row> {
        fields
            .iter()
            .filter(|field| !is_metadata_field(field))
            .filter_map(|field| {
                self.record.value_text(field).map(|value| Row {
                    name: capitalize_field(field),
                    value,
                })
            })
            .collect()
    }

    /// Category buckets for grouping themes
    pub fn classification(&self) -> Classification {
        classify(self.catalog, self.fields, self.record)
    }

    pub fn paint(&self, role: StyleRole, text: &str) -> String {
        self.palette.paint(role, text)
    }
}

// =============================================================================
// Tests
// =============================================================================
