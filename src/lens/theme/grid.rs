use super::{RenderContext, StyleRole};
use tabled::builder::Builder;
use tabled::settings::Style;

/// One table for every group; the category label sits on the first row of
/// its group only.
pub(super) fn render(ctx: &RenderContext<'_>) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        ctx.paint(StyleRole::Header, "Category"),
        ctx.paint(StyleRole::Header, "Field"),
        ctx.paint(StyleRole::Header, "Value"),
    ]);

    for group in ctx.classification().groups() {
        let label = ctx.paint(StyleRole::PanelBorder, &group.label.to_string());
        for (idx, row) in ctx.rows_for(&group.fields).into_iter().enumerate() {
            let category = if idx == 0 { label.clone() } else { String::new() };
            builder.push_record([
                category,
                ctx.paint(StyleRole::FieldName, &row.name),
                ctx.paint(StyleRole::FieldValue, &row.value),
            ]);
        }
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    format!(
        "Information for {}\n{}\n",
        ctx.paint(StyleRole::Strong, ctx.subject()),
        table
    )
}

#[cfg(test)]
mod tests {
    use super::super::tests::{render_plain, strings};
    use super::super::Theme;
    use crate::lens::record::Record;
    use serde_json::json;

    #[test]
    fn test_grid_two_groups_no_other() {
        let fields = json!({
            "status": "success",
            "country": "US",
            "city": "Mountain View",
            "isp": "Google LLC"
        });
        let record = Record::new(fields.as_object().cloned().unwrap()).with_display_ip("8.8.8.8");
        let output = render_plain(Theme::Grid, &record, &strings(&["country", "city", "isp"]));

        assert_eq!(output.matches("Location").count(), 1);
        assert_eq!(output.matches("Network").count(), 1);
        assert!(!output.contains("Other"));
        assert!(!output.contains("Details"));

        let network_line = output.lines().find(|l| l.contains("Network")).unwrap();
        assert!(network_line.contains("Isp"));
        assert!(network_line.contains("Google LLC"));

        // The city row continues the Location group with an empty label.
        let city_line = output.lines().find(|l| l.contains("Mountain View")).unwrap();
        assert!(!city_line.contains("Location"));
    }

    #[test]
    fn test_grid_other_group() {
        let fields = json!({"status": "success", "country": "US", "extra": "x"});
        let record = Record::new(fields.as_object().cloned().unwrap());
        let output = render_plain(Theme::Grid, &record, &strings(&["extra", "country"]));
        let location = output.find("Location").unwrap();
        let other = output.find("Other").unwrap();
        assert!(location < other);
        assert!(output.starts_with("Information for N/A"));
    }
}
