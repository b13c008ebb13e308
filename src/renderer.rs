//! Renderer for the food sighting report shared by the preview and the channel post.

use crate::draft::Draft;

/// Telegram's limit on photo captions, in characters
pub const MAX_CAPTION_CHARS: usize = 1024;

/// Render the three-line report for a draft
///
/// Pure: the output depends only on the draft's text fields.
pub fn render(draft: &Draft) -> String {
    format!(
        "Location: {}\nClear Time: {}\nAdditional Info: {}\n",
        draft.location, draft.clear_time, draft.additional_info
    )
}

/// Shorten a caption to `limit` characters, ending it with an ellipsis
pub fn fit_caption(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let mut shortened: String = text.chars().take(limit.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}
