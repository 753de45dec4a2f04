use super::{RenderContext, StyleRole};
use tabled::builder::Builder;
use tabled::settings::Style;

/// Title line above a rounded `Field`/`Value` table.
pub(super) fn render(ctx: &RenderContext<'_>) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        ctx.paint(StyleRole::Header, "Field"),
        ctx.paint(StyleRole::Header, "Value"),
    ]);
    for row in ctx.rows() {
        builder.push_record([
            ctx.paint(StyleRole::FieldName, &row.name),
            ctx.paint(StyleRole::FieldValue, &row.value),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    format!(
        "Information for {}\n{}\n",
        ctx.paint(StyleRole::Strong, ctx.subject()),
        table
    )
}
