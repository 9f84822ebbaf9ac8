use std::collections::HashSet;

use crate::models::ConversationEntry;

/// Rewrite the retained tail so it forms a brand-new, self-consistent log.
///
/// - every entry's `sessionId` becomes `new_session_id`;
/// - the first entry's `parentUuid` is forced to null, detaching the tail
///   from the discarded head;
/// - message uuids are kept verbatim, so links among retained messages
///   resolve exactly as before.
///
/// A retained entry other than the first can still point into the discarded
/// prefix when the source log branched (sidechains); those links are also
/// nulled, since their targets no longer exist in the new log.
pub fn remap_tail(mut tail: Vec<ConversationEntry>, new_session_id: &str) -> Vec<ConversationEntry> {
    let mut retained_uuids: HashSet<String> = HashSet::with_capacity(tail.len());

    for (idx, entry) in tail.iter_mut().enumerate() {
        entry.session_id = new_session_id.to_string();

        if idx == 0 {
            entry.parent_uuid = None;
        } else if let Some(parent) = &entry.parent_uuid
            && !retained_uuids.contains(parent)
        {
            entry.parent_uuid = None;
        }

        retained_uuids.insert(entry.uuid.clone());
    }

    tail
}
