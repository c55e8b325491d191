//! Textual progress bars and tag chip helpers.

/// Number of tag chips shown on a card before overflowing into "+N".
pub const MAX_VISIBLE_TAGS: usize = 3;

/// Build a textual progress bar with `width` cells. The filled portion is
/// exactly `progress` percent of the track, truncated to whole cells.
///
pub fn progress_bar(progress: u8, width: u16) -> String {
    let clamped = u32::from(progress.min(100));
    let width = usize::from(width);
    let filled = (width as u32 * clamped / 100) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Return the tag labels to show on a card plus an optional overflow
/// indicator counting the hidden remainder.
///
pub fn visible_tags(tags: &[String]) -> (Vec<&str>, Option<String>) {
    let shown = tags
        .iter()
        .take(MAX_VISIBLE_TAGS)
        .map(String::as_str)
        .collect();
    let overflow = if tags.len() > MAX_VISIBLE_TAGS {
        Some(format!("+{}", tags.len() - MAX_VISIBLE_TAGS))
    } else {
        None
    };
    (shown, overflow)
}
