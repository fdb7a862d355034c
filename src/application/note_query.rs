// src/application/note_query.rs
use crate::domain::{Note, SortMode};

/// Derive a filtered, sorted view of `notes`
///
/// # Arguments
/// * `search` - Case-insensitive substring matched against title, content and tag.
///   An empty term matches every note.
/// * `sort` - Ordering of the result. All sorts are stable.
///
/// # Returns
/// Owned copies of the matching notes; `notes` itself is never touched
pub fn query(notes: &[Note], search: &str, sort: SortMode) -> Vec<Note> {
    let needle = search.to_lowercase();
    let mut view: Vec<Note> = notes
        .iter()
        .filter(|n| n.matches(&needle))
        .cloned()
        .collect();

    match sort {
        SortMode::Newest => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::Oldest => view.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortMode::PinnedFirst => view.sort_by_key(|n| !n.is_pinned()),
        SortMode::Insertion => {}
    }

    view
}
