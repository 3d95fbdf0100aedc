//! View state threaded through every recompute.

use serde::{Deserialize, Serialize};

use crate::pipeline::SortMode;

/// Category token meaning "no category filtering".
pub const ALL_CATEGORIES: &str = "all";

/// Snapshot of every user-controlled listing input.
///
/// The controller never mutates a state in place; each event yields a
/// fresh snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub sort: SortMode,

    /// Active category token, `all` when unfiltered
    pub category: String,

    /// Second-level refinement within the active category
    pub subcategory: Option<String>,

    /// Normalised search text (trimmed, lowercase); empty disables search
    pub query: String,

    /// 1-based page number, clamped on render
    pub page: usize,
}

impl ViewState {
    pub fn new(sort: SortMode) -> Self {
        Self {
            sort,
            category: ALL_CATEGORIES.to_string(),
            subcategory: None,
            query: String::new(),
            page: 1,
        }
    }

    pub fn is_searching(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn category_is_all(&self) -> bool {
        self.category.eq_ignore_ascii_case(ALL_CATEGORIES)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(SortMode::default())
    }
}
