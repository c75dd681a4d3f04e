//! Shared text formatting helpers for the plain-text renderer.
//!
//! # Example
//!
//! ```rust
//! use directapply::ui::helpers::mark_highlights;
//!
//! assert_eq!(mark_highlights("Data Scientist", &[(0, 4)]), "[Data] Scientist");
//! ```

/// Wraps the character ranges of `text` in square brackets.
///
/// Ranges are `(start, end)` character indices with an exclusive end, sorted
/// and non-overlapping. Out-of-range indices are ignored.
#[must_use]
pub fn mark_highlights(text: &str, ranges: &[(usize, usize)]) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + ranges.len() * 2);
    for (idx, ch) in text.chars().enumerate() {
        if ranges.iter().any(|&(start, _)| start == idx) {
            out.push('[');
        }
        out.push(ch);
        if ranges.iter().any(|&(_, end)| end == idx + 1) {
            out.push(']');
        }
    }
    out
}

/// Draws `level` in `[0, 1]` as a fixed-width gauge, e.g. `[###-------]`.
#[must_use]
pub fn gauge(level: f64, width: usize) -> String {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let filled = ((level.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Truncates `text` to `max` characters, ending with "..." when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_split_runs() {
        assert_eq!(mark_highlights("abcdef", &[(0, 2), (3, 4)]), "[ab]c[d]ef");
        assert_eq!(mark_highlights("abc", &[]), "abc");
    }

    #[test]
    fn gauge_clamps() {
        assert_eq!(gauge(0.5, 4), "[##--]");
        assert_eq!(gauge(2.0, 3), "[###]");
        assert_eq!(gauge(-1.0, 2), "[--]");
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("Machine Learning Engineer", 10), "Machine...");
        assert_eq!(truncate("UX", 10), "UX");
    }
}
