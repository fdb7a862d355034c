// src/domain/sort.rs
use std::fmt;

/// Ordering applied to the derived note view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Descending `createdAt`
    #[default]
    Newest,
    /// Ascending `createdAt`
    Oldest,
    /// Pinned notes first, relative order kept within each group
    PinnedFirst,
    /// No sorting
    Insertion,
}

impl SortMode {
    /// Unknown names fall back to insertion order
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "newest" => SortMode::Newest,
            "oldest" => SortMode::Oldest,
            "pinned" | "pinnedfirst" | "pinned-first" | "pinned_first" => SortMode::PinnedFirst,
            _ => SortMode::Insertion,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::PinnedFirst => "pinnedFirst",
            SortMode::Insertion => "insertion",
        };
        f.write_str(name)
    }
}
