// src/models/mod.rs

//! Domain models for the catalog.
//!
//! Records (episodes and guests), the document they are loaded from,
//! configuration, and the view state the controller threads through
//! every recompute.

mod config;
mod episode;
mod guest;
mod state;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::utils::same_tag;

// Re-export all public types
pub use config::{
    CategoryStyle, Config, DisplayConfig, IconMapping, ListingConfig, LoggingConfig, Messages,
    SourceConfig,
};
pub use episode::Episode;
pub use guest::{Guest, GuestId, GuestLink};
pub use state::{ALL_CATEGORIES, ViewState};

/// Identifier shape used by the identifier-aware comparator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IdKey<'a> {
    /// Identifier containing at least one letter ("1a", "intro")
    Alpha(&'a str),
    /// Purely numeric identifier
    Numeric(f64),
}

/// Read-only view over a record, shared by every pipeline stage.
pub trait CatalogItem {
    /// Identifier as used by the identifier-aware comparator.
    fn id_key(&self) -> IdKey<'_>;

    /// Sequence number used by the recency orderings.
    fn sequence(&self) -> u32;

    fn title(&self) -> &str;

    fn description(&self) -> &str;

    /// Further searchable text scored like the description (a guest's role).
    fn secondary_text(&self) -> Option<&str> {
        None
    }

    /// Category tags; empty for records without categories.
    fn tags(&self) -> &[String];

    fn featured(&self) -> bool;

    /// Whether the tag set contains `tag` (Unicode case-insensitive).
    fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| same_tag(t, tag))
    }
}

/// The two record kinds a listing page can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Episodes,
    Guests,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKind::Episodes => write!(f, "episodes"),
            CatalogKind::Guests => write!(f, "guests"),
        }
    }
}

impl FromStr for CatalogKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "episodes" | "episodios" => Ok(CatalogKind::Episodes),
            "guests" | "invitados" => Ok(CatalogKind::Guests),
            other => Err(AppError::validation(format!("unknown catalog kind '{other}'"))),
        }
    }
}

/// Episode pages wrap their list in an object under `episodios`;
/// guest pages ship a bare array.
#[derive(Debug, Deserialize)]
struct EpisodeDocument {
    episodios: Vec<Episode>,
}

/// The immutable, fully loaded record collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Catalog {
    Episodes(Vec<Episode>),
    Guests(Vec<Guest>),
}

impl Catalog {
    /// Parse a document and check that it holds the expected record kind.
    pub fn from_slice(bytes: &[u8], kind: CatalogKind) -> Result<Self> {
        // Dispatch on the top-level shape so field errors keep their position.
        let catalog = match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'[') => Catalog::Guests(serde_json::from_slice(bytes)?),
            _ => {
                let document: EpisodeDocument = serde_json::from_slice(bytes)?;
                Catalog::Episodes(document.episodios)
            }
        };

        if catalog.kind() != kind {
            return Err(AppError::validation(format!(
                "expected a {kind} document, found {}",
                catalog.kind()
            )));
        }

        catalog.validate()?;
        Ok(catalog)
    }

    /// An empty collection of the given kind.
    pub fn empty(kind: CatalogKind) -> Self {
        match kind {
            CatalogKind::Episodes => Catalog::Episodes(Vec::new()),
            CatalogKind::Guests => Catalog::Guests(Vec::new()),
        }
    }

    pub fn kind(&self) -> CatalogKind {
        match self {
            Catalog::Episodes(_) => CatalogKind::Episodes,
            Catalog::Guests(_) => CatalogKind::Guests,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Catalog::Episodes(items) => items.len(),
            Catalog::Guests(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reject collections whose identifiers are not unique.
    pub fn validate(&self) -> Result<()> {
        match self {
            Catalog::Episodes(episodes) => {
                let mut seen = HashSet::new();
                for episode in episodes {
                    if !seen.insert(episode.number) {
                        return Err(AppError::validation(format!(
                            "duplicate episode number {}",
                            episode.number
                        )));
                    }
                    if episode.categories.is_empty() {
                        log::warn!("Episode #{} has no categories", episode.number);
                    }
                }
            }
            Catalog::Guests(guests) => {
                let mut seen = HashSet::new();
                for guest in guests {
                    if !seen.insert(guest.id.as_str()) {
                        return Err(AppError::validation(format!(
                            "duplicate guest id '{}'",
                            guest.id
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Distinct tags across the collection, in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        if let Catalog::Episodes(episodes) = self {
            for tag in episodes.iter().flat_map(|e| &e.categories) {
                if seen.insert(tag.to_lowercase()) {
                    result.push(tag.clone());
                }
            }
        }
        result
    }
}
