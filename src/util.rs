/// Finds the length in bytes of the longest common prefix of two strings.
///
/// The result always lands on a `char` boundary of both inputs, so it can be
/// used to split either of them.
pub(crate) fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, x), y)| x != y)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| a.len().min(b.len()))
}

/// Returns the first character of `s` as a string slice, or `""` for an empty string.
pub(crate) fn first_char(s: &str) -> &str {
    s.chars().next().map_or("", |c| &s[..c.len_utf8()])
}
