//! JSON projection
//!
//! The JSON theme and JSON file export share [`to_json_pretty`], so a single
//! record prints exactly what a one-record export writes.

use super::RenderContext;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

const INDENT: &[u8] = b"    ";

/// Serialize with four-space indentation
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub(super) fn render(ctx: &RenderContext<'_>) -> String {
    let projected = ctx.record.project(ctx.fields);
    // serializing a string-keyed map of `Value`s into a Vec cannot fail
    let mut out = to_json_pretty(&projected).unwrap_or_default();
    out.push('\n');
    out
}
