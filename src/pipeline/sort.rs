// src/pipeline/sort.rs

//! Record ordering.
//!
//! Every comparator falls back to the record's position in the loaded
//! collection, so orderings are total and deterministic.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Ranked;
use crate::error::{AppError, Result};
use crate::models::{CatalogItem, IdKey};

/// Selectable sort modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Featured first, then newest first
    #[default]
    #[serde(alias = "relevancia")]
    Relevance,
    /// Descending sequence number
    #[serde(alias = "mas_reciente")]
    MostRecent,
    /// Ascending sequence number
    #[serde(alias = "mas_antiguo")]
    MostOld,
    /// Letter-bearing ids first (lexicographic), then numeric ids
    #[serde(alias = "id")]
    Identifier,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Relevance,
        SortMode::MostRecent,
        SortMode::MostOld,
        SortMode::Identifier,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Relevance => "relevance",
            SortMode::MostRecent => "most-recent",
            SortMode::MostOld => "most-old",
            SortMode::Identifier => "identifier",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "relevance" | "relevancia" => Ok(SortMode::Relevance),
            "most-recent" | "most_recent" | "mas_reciente" => Ok(SortMode::MostRecent),
            "most-old" | "most_old" | "mas_antiguo" => Ok(SortMode::MostOld),
            "identifier" | "id" => Ok(SortMode::Identifier),
            other => {
                let known: Vec<&str> = SortMode::ALL.iter().map(SortMode::as_str).collect();
                Err(AppError::validation(format!(
                    "unknown sort mode '{other}' (expected one of {})",
                    known.join(", ")
                )))
            }
        }
    }
}

/// Compare two records under a sort mode (without the index tiebreak).
pub fn compare<T: CatalogItem>(mode: SortMode, a: &T, b: &T) -> Ordering {
    match mode {
        SortMode::Relevance => b
            .featured()
            .cmp(&a.featured())
            .then_with(|| b.sequence().cmp(&a.sequence())),
        SortMode::MostRecent => b.sequence().cmp(&a.sequence()),
        SortMode::MostOld => a.sequence().cmp(&b.sequence()),
        SortMode::Identifier => compare_ids(a.id_key(), b.id_key()),
    }
}

fn compare_ids(a: IdKey<'_>, b: IdKey<'_>) -> Ordering {
    match (a, b) {
        (IdKey::Alpha(_), IdKey::Numeric(_)) => Ordering::Less,
        (IdKey::Numeric(_), IdKey::Alpha(_)) => Ordering::Greater,
        (IdKey::Alpha(a), IdKey::Alpha(b)) => a.cmp(b),
        (IdKey::Numeric(a), IdKey::Numeric(b)) => a.total_cmp(&b),
    }
}

/// Sort surviving records in place.
///
/// With `by_score`, higher search scores come first and the mode only
/// breaks ties.
pub fn sort_ranked<T: CatalogItem>(entries: &mut [Ranked<'_, T>], mode: SortMode, by_score: bool) {
    entries.sort_by(|a, b| {
        let primary = if by_score {
            b.score.cmp(&a.score)
        } else {
            Ordering::Equal
        };
        primary
            .then_with(|| compare(mode, a.item, b.item))
            .then(a.index.cmp(&b.index))
    });
}
