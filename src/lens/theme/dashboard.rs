use super::{RenderContext, StyleRole};
use tabled::builder::Builder;
use tabled::settings::{Panel, Style};

/// Title box followed by one panel per non-empty group, side by side.
pub(super) fn render(ctx: &RenderContext<'_>) -> String {
    let title = format!("Information for {}", ctx.subject());
    let mut header = Builder::default();
    header.push_record([ctx.paint(StyleRole::Strong, &title)]);
    let mut header = header.build();
    header.with(Style::rounded());

    let panels: Vec<String> = ctx
        .classification()
        .groups()
        .into_iter()
        .map(|group| {
            let mut builder = Builder::default();
            for row in ctx.rows_for(&group.fields) {
                builder.push_record([
                    ctx.paint(StyleRole::FieldName, &format!("{}:", row.name)),
                    ctx.paint(StyleRole::FieldValue, &row.value),
                ]);
            }
            let mut panel = builder.build();
            panel
                .with(Panel::header(ctx.paint(StyleRole::Strong, &group.label.to_string())))
                .with(Style::rounded());
            panel.to_string()
        })
        .collect();

    if panels.is_empty() {
        return format!("{}\n", header);
    }

    let mut columns = Builder::default();
    columns.push_record(panels);
    let mut columns = columns.build();
    columns.with(Style::empty());

    format!("{}\n{}\n", header, columns)
}
