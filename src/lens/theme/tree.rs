use super::{RenderContext, StyleRole};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Subject at the root, one branch per group, `Name: value` leaves.
pub(super) fn render(ctx: &RenderContext<'_>) -> String {
    let mut out = format!(
        "IP Information for {}\n",
        ctx.paint(StyleRole::Strong, ctx.subject())
    );

    let groups = ctx.classification().groups();
    let guide = |s: &str| ctx.paint(StyleRole::PanelBorder, s);

    for (group_idx, group) in groups.iter().enumerate() {
        let last_group = group_idx + 1 == groups.len();
        out.push_str(&guide(if last_group { LAST_BRANCH } else { BRANCH }));
        out.push_str(&ctx.paint(StyleRole::Strong, &group.label.to_string()));
        out.push('\n');

        let rows = ctx.rows_for(&group.fields);
        for (row_idx, row) in rows.iter().enumerate() {
            let last_row = row_idx + 1 == rows.len();
            out.push_str(&guide(if last_group { SPACE } else { PIPE }));
            out.push_str(&guide(if last_row { LAST_BRANCH } else { BRANCH }));
            out.push_str(&ctx.paint(StyleRole::FieldName, &format!("{}:", row.name)));
            out.push(' ');
            out.push_str(&ctx.paint(StyleRole::FieldValue, &row.value));
            out.push('\n');
        }
    }

    out
}
