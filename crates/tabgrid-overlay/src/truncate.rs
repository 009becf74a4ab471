//! Display truncation

pub const ELLIPSIS: &str = "...";

/// Shorten `text` to at most `limit` characters. Longer values keep their
/// first `limit - 3` characters followed by [`ELLIPSIS`].
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let keep = limit.saturating_sub(ELLIPSIS.len());
    let mut shortened: String = text.chars().take(keep).collect();
    shortened.push_str(ELLIPSIS);
    shortened
}
