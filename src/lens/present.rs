//! Presentation entry point
//!
//! [`Presenter`] decides between the error panel and the configured theme
//! for each record and writes the result to any [`std::io::Write`] sink.
//!
//! # Example
//!
//! ```rust,ignore
//! use whatsip::lens::fields::{FieldCatalog, FieldSelection};
//! use whatsip::lens::present::Presenter;
//! use whatsip::lens::theme::{Palette, Theme};
//!
//! let catalog = FieldCatalog::new();
//! let presenter = Presenter::new(&catalog, Theme::Tree, Palette::plain());
//! presenter.present(&mut std::io::stdout(), &record, &FieldSelection::Defaults)?;
//! ```

use crate::lens::fields::{FieldCatalog, FieldSelection};
use crate::lens::record::Record;
use crate::lens::theme::{Palette, RenderContext, StyleRole, Theme};
use std::io::{self, Write};
use tabled::builder::Builder;
use tabled::settings::{Panel, Style};

/// Title used when the service or the transport reports a failure
pub const REQUEST_FAILED: &str = "Request Failed";
/// Title used when the service does not answer in time
pub const REQUEST_TIMED_OUT: &str = "Request Timed Out";

/// What [`Presenter::render`] produced for a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// The record reported a failure; no theme was involved
    Error { message: String, text: String },
    /// The record was rendered by `theme`
    Themed { theme: Theme, text: String },
}

impl Presentation {
    pub fn text(&self) -> &str {
        match self {
            Presentation::Error { text, .. } => text,
            Presentation::Themed { text, .. } => text,
        }
    }
}

/// Renders records with one theme and palette
pub struct Presenter<'a> {
    catalog: &'a FieldCatalog,
    theme: Theme,
    palette: Palette,
}

impl<'a> Presenter<'a> {
    pub fn new(catalog: &'a FieldCatalog, theme: Theme, palette: Palette) -> Self {
        Self {
            catalog,
            theme,
            palette,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn catalog(&self) -> &FieldCatalog {
        self.catalog
    }

    /// Render `record` without writing it anywhere
    pub fn render(&self, record: &Record, selection: &FieldSelection) -> Presentation {
        if !record.is_success() {
            let message = record.message();
            let text = error_panel(&self.palette, REQUEST_FAILED, &format!("Error: {}", message));
            return Presentation::Error { message, text };
        }

        let fields = selection.resolve(self.catalog.default_fields(), record);
        let ctx = RenderContext::new(record, &fields, self.catalog, &self.palette);
        Presentation::Themed {
            theme: self.theme,
            text: self.theme.render(&ctx),
        }
    }

    /// Render `record` and write it to `out`
    pub fn present<W: Write>(
        &self,
        out: &mut W,
        record: &Record,
        selection: &FieldSelection,
    ) -> io::Result<()> {
        let presentation = self.render(record, selection);
        out.write_all(presentation.text().as_bytes())
    }

    /// Write an error panel for a failure that produced no record
    pub fn present_error<W: Write>(&self, out: &mut W, title: &str, message: &str) -> io::Result<()> {
        out.write_all(error_panel(&self.palette, title, message).as_bytes())
    }
}

/// Rounded single-cell panel with `title` on top
pub fn error_panel(palette: &Palette, title: &str, body: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record([palette.paint(StyleRole::Error, body)]);
    let mut table = builder.build();
    table
        .with(Panel::header(palette.paint(StyleRole::Error, title)))
        .with(Style::rounded());
    format!("{}\n", table)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens::record::UNKNOWN_ERROR;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        Record::from_response(Some("8.8.8.8"), value.as_object().cloned().unwrap())
    }

    fn success() -> Record {
        record(json!({
            "query": "8.8.8.8",
            "status": "success",
            "country": "United States",
            "city": "Mountain View",
            "isp": "Google LLC"
        }))
    }

    #[test]
    fn test_failed_record_uses_error_path() {
        let catalog = FieldCatalog::new();
        let failed = record(json!({"status": "fail", "message": "invalid query", "query": "x"}));
        for name in Theme::all_names() {
            let presenter = Presenter::new(&catalog, Theme::from_name(name), Palette::plain());
            match presenter.render(&failed, &FieldSelection::All) {
                Presentation::Error { message, text } => {
                    assert_eq!(message, "invalid query");
                    assert!(text.contains("Request Failed"));
                    assert!(text.contains("Error: invalid query"));
                }
                other => panic!("theme {name} rendered a failed record: {other:?}"),
            }
        }
    }

    #[test]
    fn test_failed_record_without_message() {
        let catalog = FieldCatalog::new();
        let presenter = Presenter::new(&catalog, Theme::Json, Palette::plain());
        let failed = record(json!({"status": "fail"}));
        let presentation = presenter.render(&failed, &FieldSelection::Defaults);
        assert!(matches!(presentation, Presentation::Error { .. }));
        assert!(presentation.text().contains(UNKNOWN_ERROR));
    }

    #[test]
    fn test_success_dispatches_to_theme() {
        let catalog = FieldCatalog::new();
        let presenter = Presenter::new(&catalog, Theme::Compact, Palette::plain());
        let presentation = presenter.render(&success(), &FieldSelection::parse("city,isp"));
        assert_eq!(
            presentation,
            Presentation::Themed {
                theme: Theme::Compact,
                text: "IP: 8.8.8.8 | City: Mountain View | Isp: Google LLC\n".to_string(),
            }
        );
    }

    #[test]
    fn test_defaults_come_from_catalog() {
        let catalog = FieldCatalog::new().with_field_lists(vec!["isp".to_string()], vec![]);
        let presenter = Presenter::new(&catalog, Theme::Minimal, Palette::plain());
        let presentation = presenter.render(&success(), &FieldSelection::Defaults);
        assert_eq!(
            presentation.text(),
            "--- IP Information for 8.8.8.8 ---\nIsp: Google LLC\n"
        );
    }

    #[test]
    fn test_present_writes_to_sink() {
        let catalog = FieldCatalog::new();
        let presenter = Presenter::new(&catalog, Theme::Sleek, Palette::plain());
        let mut sink: Vec<u8> = Vec::new();
        presenter
            .present(&mut sink, &success(), &FieldSelection::parse("country,city,isp"))
            .unwrap();
        let text = String::from_utf8(sink).unwrap();
        assert!(text.contains("Information for 8.8.8.8"));
        assert!(text.contains("Mountain View"));
    }

    #[test]
    fn test_present_error_panel() {
        let catalog = FieldCatalog::new();
        let presenter = Presenter::new(&catalog, Theme::Sleek, Palette::plain());
        let mut sink: Vec<u8> = Vec::new();
        presenter
            .present_error(&mut sink, REQUEST_TIMED_OUT, "The API did not respond in time.")
            .unwrap();
        let text = String::from_utf8(sink).unwrap();
        assert!(text.contains("Request Timed Out"));
        assert!(text.contains("The API did not respond in time."));
        assert!(text.contains('╭'));
    }
}
