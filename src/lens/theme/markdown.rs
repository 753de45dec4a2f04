//! Markdown document theme
//!
//! [`markdown_string`] is the raw document; Markdown export writes it
//! verbatim. The console rendering only adds emphasis to heading lines.

use super::{RenderContext, StyleRole};

/// Build the Markdown document for one record
pub fn markdown_string(ctx: &RenderContext<'_>) -> String {
    let mut doc = format!("# IP Information for {}\n\n", ctx.subject());

    for group in ctx.classification().groups() {
        doc.push_str(&format!("## {}\n", group.label));
        for row in ctx.rows_for(&group.fields) {
            doc.push_str(&format!("- **{}**: {}\n", row.name, row.value));
        }
        doc.push('\n');
    }

    doc
}

pub(super) fn render(ctx: &RenderContext<'_>) -> String {
    let doc = markdown_string(ctx);
    if !ctx.palette.is_enabled() {
        return doc;
    }

    let mut out = String::with_capacity(doc.len());
    for line in doc.lines() {
        if line.starts_with('#') {
            out.push_str(&ctx.paint(StyleRole::Header, line));
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
