/// Half-open interval overlap against a `[win_start, win_end)` window
pub(crate) fn overlaps_window(seg_start: u64, seg_end: u64, win_start: u64, win_end: u64) -> bool {
    seg_start < win_end && seg_end > win_start
}

/// Truncate to at most `max_chars` characters, appending an ellipsis when cut
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

/// Byte offset of the `n`-th character, or the text length when past the end
pub(crate) fn byte_offset_for_char(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(byte, _)| byte)
}
