use super::{RenderContext, StyleRole};

/// Header line, then one `Name: value` line per field. No framing.
pub(super) fn render(ctx: &RenderContext<'_>) -> String {
    let mut out = format!(
        "--- IP Information for {} ---\n",
        ctx.paint(StyleRole::Strong, ctx.subject())
    );
    for row in ctx.rows() {
        out.push_str(&format!(
            "{} {}\n",
            ctx.paint(StyleRole::FieldName, &format!("{}:", row.name)),
            ctx.paint(StyleRole::FieldValue, &row.value)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::super::tests::{google_record, render_plain, strings};
    use super::super::Theme;

    #[test]
    fn test_minimal_lines() {
        let output = render_plain(
            Theme::Minimal,
            &google_record(),
            &strings(&["country", "zip", "lat", "query"]),
        );
        assert_eq!(
            output,
            "--- IP Information for 8.8.8.8 ---\nCountry: United States\nLat: 37.422\n"
        );
    }
}
