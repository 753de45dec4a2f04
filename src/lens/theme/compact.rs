use super::{RenderContext, StyleRole};
use crate::lens::record::DISPLAY_IP_KEY;

/// `IP: <subject>` followed by ` | Name: value` pairs on a single line.
pub(super) fn render(ctx: &RenderContext<'_>) -> String {
    let mut out = ctx.paint(StyleRole::Strong, &format!("IP: {}", ctx.subject()));

    let fields: Vec<String> = ctx
        .fields
        .iter()
        .filter(|f| f.as_str() != DISPLAY_IP_KEY)
        .cloned()
        .collect();

    for row in ctx.rows_for(&fields) {
        out.push_str(&ctx.paint(StyleRole::Faint, " | "));
        out.push_str(&ctx.paint(StyleRole::FieldName, &format!("{}: ", row.name)));
        out.push_str(&ctx.paint(StyleRole::FieldValue, &row.value));
    }

    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::super::tests::{google_record, render_plain, strings};
    use super::super::Theme;
    use crate::lens::fields::FieldSelection;
    use crate::lens::record::Record;
    use serde_json::json;

    #[test]
    fn test_compact_line() {
        let output = render_plain(
            Theme::Compact,
            &google_record(),
            &strings(&["query", "city", "isp"]),
        );
        assert_eq!(output, "IP: 8.8.8.8 | City: Mountain View | Isp: Google LLC\n");
    }

    #[test]
    fn test_compact_skips_display_ip_field() {
        let fields = json!({"status": "success", "org": "Example"});
        let record = Record::new(fields.as_object().cloned().unwrap()).with_display_ip("192.0.2.9");
        let output = render_plain(Theme::Compact, &record, &strings(&["display_ip", "org"]));
        assert_eq!(output, "IP: 192.0.2.9 | Org: Example\n");
    }

    #[test]
    fn test_compact_all_fields_mentions_subject_once() {
        let record = google_record();
        let fields = FieldSelection::All.resolve(&[], &record);
        let output = render_plain(Theme::Compact, &record, &fields);
        assert_eq!(output.matches("8.8.8.8").count(), 1, "{output}");
        assert!(!output.contains("Display_ip"));
    }
}
