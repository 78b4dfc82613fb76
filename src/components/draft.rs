//! Text Drafts
//!
//! Pending text typed into the add form or an inline label.

/// Take a non-blank draft, leaving an empty one behind.
///
/// A blank draft stays where it is and yields `None`, so nothing fires.
pub fn take_label(draft: &mut String) -> Option<String> {
    if draft.trim().is_empty() {
        return None;
    }
    Some(std::mem::take(draft))
}
