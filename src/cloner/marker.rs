use crate::models::{ContentBlock, ConversationEntry, MessageContent};

/// Marker stamped into the first message of every half-clone, so a user
/// scanning logs (or the history index) can tell a partial clone from an
/// original conversation at a glance.
pub const HALF_CLONE_MARKER: &str = "[half-clone]";

/// Stamp the marker into an entry's content without disturbing its encoding:
/// plain-string content is prefixed in place; block-list content gets a new
/// text block at index 0, leaving existing blocks (tool_use, thinking, ...)
/// untouched. Either way the marker is findable by a plain substring search
/// of the serialized line.
pub fn tag_entry(entry: &mut ConversationEntry) {
    match &mut entry.message.content {
        MessageContent::Text(text) => {
            *text = format!("{HALF_CLONE_MARKER} {text}");
        }
        MessageContent::Blocks(blocks) => {
            blocks.insert(0, ContentBlock::text(HALF_CLONE_MARKER));
        }
    }
}

/// Display string for the history index record.
pub fn tag_display(preview: &str) -> String {
    if preview.is_empty() {
        HALF_CLONE_MARKER.to_string()
    } else {
        format!("{HALF_CLONE_MARKER} {preview}")
    }
}
