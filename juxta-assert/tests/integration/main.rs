mod contexts;
mod messages;
mod properties;

/// Marks the end of every line with `|` so trailing padding stays visible.
pub fn framed(text: &str) -> String {
    text.lines()
        .map(|line| format!("{line}|"))
        .collect::<Vec<_>>()
        .join("\n")
}
