//! Text helpers for list previews.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Maximum preview length before truncation, in characters.
pub const PREVIEW_MAX_LENGTH: usize = 120;

/// Truncate blog content for card previews: the first 120 characters plus
/// an ellipsis marker, or the content unmodified when it already fits.
pub fn preview(content: &str) -> String {
    if content.chars().count() <= PREVIEW_MAX_LENGTH {
        return content.to_owned();
    }
    let mut truncated: String = content.chars().take(PREVIEW_MAX_LENGTH).collect();
    truncated.push_str("...");
    truncated
}
