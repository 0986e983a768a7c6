mod properties;
mod rendering;

use juxta_diff::DiffResult;

/// Lays a plain-text result out the way a failure message shows it, with `|`
/// marking the end of each row so trailing padding stays visible.
pub fn layout(result: &DiffResult) -> String {
    let mut rows = Vec::new();
    for i in 0..result.line_count() {
        rows.push(format!("actual  : {}|", result.actual_lines()[i]));
        if let Some(markers) = result.marker_lines() {
            rows.push(format!("diff    : {}|", markers[i]));
        }
        rows.push(format!("expected: {}|", result.expected_lines()[i]));
    }
    rows.join("\n")
}
