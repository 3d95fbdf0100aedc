// src/render/mod.rs

//! Data-to-view-model projection.
//!
//! Every rendered slot is a typed field, so any host (a DOM binding, a
//! template engine, the CLI) can mount a `ListingView` without further
//! lookups. Each render pass builds a complete view from scratch.

mod episode;
mod guest;
mod pagination;
mod plain;

use serde::Serialize;

use crate::models::{CatalogKind, Config, Episode, Guest, ViewState};
use crate::pipeline::Outcome;

pub use episode::{Badge, EpisodeCard, ListenButton, episode_card};
pub use guest::{BioBlock, GuestCard, GuestModal, Icon, SocialButton, resolve_icon};
pub use pagination::{ControlKind, PageControl, pagination_controls};

/// Link control that degrades to an inert placeholder when its URL is
/// missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTarget {
    pub href: String,
    pub enabled: bool,
}

impl LinkTarget {
    pub fn new(url: Option<&str>) -> Self {
        match crate::utils::url::non_blank(url) {
            Some(url) => Self {
                href: url.to_string(),
                enabled: true,
            },
            None => Self::disabled(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            href: crate::utils::PLACEHOLDER_HREF.to_string(),
            enabled: false,
        }
    }
}

/// A rendered card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Card {
    Episode(EpisodeCard),
    Guest(GuestCard),
}

/// Message shown in place of the card list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notice {
    /// The data document could not be loaded
    LoadError { message: String },
    /// Nothing survived filtering; `searched` tells whether a query caused it
    NoResults { message: String, searched: bool },
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::LoadError { message } | Notice::NoResults { message, .. } => message,
        }
    }
}

/// Everything a host needs to draw one listing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView {
    pub kind: CatalogKind,
    pub cards: Vec<Card>,
    /// Detail overlays paired with cards by id
    pub modals: Vec<GuestModal>,
    pub pagination: Vec<PageControl>,
    pub notice: Option<Notice>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// Sub-category choices for the active category
    pub subcategories: Vec<String>,
}

impl ListingView {
    fn empty(kind: CatalogKind, notice: Notice) -> Self {
        Self {
            kind,
            cards: Vec::new(),
            modals: Vec::new(),
            pagination: Vec::new(),
            notice: Some(notice),
            page: 1,
            total_pages: 0,
            total_items: 0,
            subcategories: Vec::new(),
        }
    }

    /// Static inline error for a failed load.
    pub fn load_error(kind: CatalogKind, config: &Config) -> Self {
        Self::empty(
            kind,
            Notice::LoadError {
                message: config.messages.load_error(kind).to_string(),
            },
        )
    }

    fn no_results(kind: CatalogKind, state: &ViewState, subcategories: Vec<String>, config: &Config) -> Self {
        let searched = state.is_searching();
        Self {
            subcategories,
            ..Self::empty(
                kind,
                Notice::NoResults {
                    message: config.messages.no_results(kind, searched).to_string(),
                    searched,
                },
            )
        }
    }
}

/// Project a recomputed episode page.
pub fn render_episodes(outcome: Outcome<'_, Episode>, state: &ViewState, config: &Config) -> ListingView {
    if outcome.page.is_empty() {
        return ListingView::no_results(CatalogKind::Episodes, state, outcome.subcategories, config);
    }

    let searching = state.is_searching();
    let cards = outcome
        .page
        .items
        .iter()
        .map(|ranked| {
            let score = searching.then_some(ranked.score);
            Card::Episode(episode_card(ranked.item, score, config))
        })
        .collect();

    ListingView {
        kind: CatalogKind::Episodes,
        cards,
        modals: Vec::new(),
        pagination: pagination_controls(&outcome.page, &config.messages),
        notice: None,
        page: outcome.page.page,
        total_pages: outcome.page.total_pages,
        total_items: outcome.page.total_items,
        subcategories: outcome.subcategories,
    }
}

/// Project a recomputed guest page, pairing each card with its modal.
pub fn render_guests(outcome: Outcome<'_, Guest>, state: &ViewState, config: &Config) -> ListingView {
    if outcome.page.is_empty() {
        return ListingView::no_results(CatalogKind::Guests, state, outcome.subcategories, config);
    }

    let mut ids = guest::IdRegistry::default();
    let (cards, modals): (Vec<Card>, Vec<GuestModal>) = outcome
        .page
        .items
        .iter()
        .map(|ranked| {
            let (card, modal) = guest::guest_card(ranked.item, config, &mut ids);
            (Card::Guest(card), modal)
        })
        .unzip();

    ListingView {
        kind: CatalogKind::Guests,
        cards,
        modals,
        pagination: pagination_controls(&outcome.page, &config.messages),
        notice: None,
        page: outcome.page.page,
        total_pages: outcome.page.total_pages,
        total_items: outcome.page.total_items,
        subcategories: outcome.subcategories,
    }
}
