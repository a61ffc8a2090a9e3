//! Fixed-width column centering shared by every tabular report.

/// Pad widths for centering a `len`-wide text in a `width`-wide column.
///
/// Left slack is the floored half of the free space; odd slack goes right.
/// A text wider than the column gets no padding at all, the column
/// stretches and nothing is truncated.
pub fn slack(width: usize, len: usize) -> (usize, usize) {
    if len > width {
        return (0, 0);
    }
    let left = (width - len) / 2;
    (left, width - len - left)
}

/// `text` centered in a `width`-wide column.
pub fn center(text: &str, width: usize) -> String {
    let (left, right) = slack(width, len_chars(text));
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Character count with an ASCII fast path.
pub fn len_chars(text: &str) -> usize {
    if text.is_ascii() {
        text.len()
    } else {
        text.chars().count()
    }
}
