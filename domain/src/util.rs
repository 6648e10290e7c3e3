//! Shared utility functions.

/// Single-line preview of `s` for log output.
///
/// Newlines are folded into spaces and the result is cut to at most
/// `max_chars` characters, with `...` appended when something was cut.
pub fn log_preview(s: &str, max_chars: usize) -> String {
    let folded: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if folded.chars().count() <= max_chars {
        return folded;
    }
    let mut out: String = folded.chars().take(max_chars).collect();
    out.push_str("...");
    out
}
