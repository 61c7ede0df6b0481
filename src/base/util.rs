pub const MIN_TERM_WIDTH: usize = 60;
pub const LANE_GAP: usize = 4;

/// Number of characters `s` occupies on screen, ignoring wide glyphs.
pub fn charlen(s: &str) -> usize {
    s.chars().count()
}

/// Shortens `s` to at most `width` characters, ending it with `ellipsis` if
/// anything was cut.
pub fn truncate(s: &str, width: usize, ellipsis: &str) -> String {
    if charlen(s) <= width {
        return s.to_string();
    }
    let keep = width.saturating_sub(charlen(ellipsis));
    let mut out = s.chars().take(keep).collect::<String>();
    out.push_str(ellipsis);
    out.chars().take(width).collect()
}
