// src/controller.rs

//! Listing controller: owns the loaded catalog and turns user events
//! into new view states.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{ALL_CATEGORIES, Catalog, CatalogKind, Config, ViewState};
use crate::pipeline::{Paginator, SearchQuery, SortMode, count_matches, run_stages, tag_counts};
use crate::render::{ListingView, render_episodes, render_guests};
use crate::source::{DocumentSource, load_catalog};

/// User interactions on a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Search(String),
    SelectCategory(String),
    SelectSubcategory(Option<String>),
    SelectSort(SortMode),
    GoToPage(usize),
    PreviousPage,
    NextPage,
}

impl Event {
    /// Whether the event only moves between pages of the same result set.
    pub fn is_navigation(&self) -> bool {
        matches!(self, Event::GoToPage(_) | Event::PreviousPage | Event::NextPage)
    }
}

impl FromStr for Event {
    type Err = AppError;

    /// Parse a one-line command such as `search tech` or `page 2`.
    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(verb, rest)| (verb, rest.trim()))
            .unwrap_or((line, ""));

        match verb.to_lowercase().as_str() {
            "search" | "buscar" => Ok(Event::Search(rest.to_string())),
            "category" | "categoria" => Ok(Event::SelectCategory(rest.to_string())),
            "sub" | "subcategory" => {
                let sub = match rest.to_lowercase().as_str() {
                    "" | "none" | ALL_CATEGORIES => None,
                    _ => Some(rest.to_string()),
                };
                Ok(Event::SelectSubcategory(sub))
            }
            "sort" => Ok(Event::SelectSort(rest.parse()?)),
            "page" => rest
                .parse()
                .map(Event::GoToPage)
                .map_err(|_| AppError::Command(line.to_string())),
            "prev" | "previous" => Ok(Event::PreviousPage),
            "next" => Ok(Event::NextPage),
            _ => Err(AppError::Command(line.to_string())),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Search(query) => write!(f, "search {query}"),
            Event::SelectCategory(category) => write!(f, "category {category}"),
            Event::SelectSubcategory(Some(sub)) => write!(f, "sub {sub}"),
            Event::SelectSubcategory(None) => write!(f, "sub none"),
            Event::SelectSort(mode) => write!(f, "sort {mode}"),
            Event::GoToPage(page) => write!(f, "page {page}"),
            Event::PreviousPage => write!(f, "prev"),
            Event::NextPage => write!(f, "next"),
        }
    }
}

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ViewState,
    /// Page navigation asks the host to scroll back to the listing top
    pub scroll_to_top: bool,
}

/// Holds the immutable catalog for one listing page.
#[derive(Debug, Clone)]
pub struct Controller {
    kind: CatalogKind,
    catalog: Catalog,
    load_failed: bool,
    config: Arc<Config>,
}

impl Controller {
    pub fn new(catalog: Catalog, config: Arc<Config>) -> Self {
        Self {
            kind: catalog.kind(),
            catalog,
            load_failed: false,
            config,
        }
    }

    /// Build a controller from a load outcome.
    ///
    /// A failure is logged and remembered; every later render shows the
    /// configured load error instead of records.
    pub fn from_load(result: Result<Catalog>, kind: CatalogKind, config: Arc<Config>) -> Self {
        match result {
            Ok(catalog) => Self::new(catalog, config),
            Err(e) => {
                log::error!("Failed to load {kind}: {e}");
                Self {
                    kind,
                    catalog: Catalog::empty(kind),
                    load_failed: true,
                    config,
                }
            }
        }
    }

    /// Fetch the document once and build the controller.
    pub async fn load(source: &dyn DocumentSource, kind: CatalogKind, config: Arc<Config>) -> Self {
        Self::from_load(load_catalog(source, kind).await, kind, config)
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// State shown before any interaction.
    pub fn initial_state(&self) -> ViewState {
        ViewState::new(self.config.listing(self.kind).default_sort)
    }

    /// Distinct category tokens, in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        self.catalog.categories()
    }

    /// Record count per category token.
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        match &self.catalog {
            Catalog::Episodes(items) => tag_counts(items),
            Catalog::Guests(items) => tag_counts(items),
        }
    }

    /// Apply an event to a state, producing the next state.
    ///
    /// Changes to sort, category, sub-category or query restart at page 1;
    /// page events are clamped to the pages the current filters produce.
    pub fn handle_event(&self, state: &ViewState, event: Event) -> Transition {
        let scroll_to_top = event.is_navigation();
        let mut next = state.clone();

        match event {
            Event::Search(raw) => {
                next.query = SearchQuery::normalize(&raw);
                next.page = 1;
            }
            Event::SelectCategory(raw) => {
                let category = raw.trim().to_lowercase();
                next.category = if category.is_empty() {
                    ALL_CATEGORIES.to_string()
                } else {
                    category
                };
                next.subcategory = None;
                next.page = 1;
            }
            Event::SelectSubcategory(sub) => {
                next.subcategory = sub
                    .map(|s| s.trim().to_lowercase())
                    .filter(|s| !s.is_empty() && s != ALL_CATEGORIES);
                next.page = 1;
            }
            Event::SelectSort(mode) => {
                next.sort = mode;
                next.page = 1;
            }
            Event::GoToPage(page) => next.page = self.clamp_page(&next, page),
            Event::PreviousPage => next.page = self.clamp_page(&next, next.page.saturating_sub(1)),
            Event::NextPage => next.page = self.clamp_page(&next, next.page.saturating_add(1)),
        }

        log::debug!("{:?} -> page {}", next, next.page);
        Transition {
            state: next,
            scroll_to_top,
        }
    }

    /// Recompute and project the listing for a state.
    pub fn render(&self, state: &ViewState) -> ListingView {
        if self.load_failed {
            return ListingView::load_error(self.kind, &self.config);
        }

        let page_size = self.page_size();
        match &self.catalog {
            Catalog::Episodes(items) => {
                render_episodes(run_stages(items, state, page_size), state, &self.config)
            }
            Catalog::Guests(items) => {
                render_guests(run_stages(items, state, page_size), state, &self.config)
            }
        }
    }

    fn page_size(&self) -> usize {
        self.config.listing(self.kind).page_size
    }

    fn clamp_page(&self, state: &ViewState, page: usize) -> usize {
        let total = match &self.catalog {
            Catalog::Episodes(items) => count_matches(items, state),
            Catalog::Guests(items) => count_matches(items, state),
        };
        Paginator::new(self.page_size()).clamp(page, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Card, Notice};

    fn episodes_json(count: u32) -> String {
        let items: Vec<String> = (1..=count)
            .map(|n| {
                let tags = if n % 2 == 0 { r#"["tech", "ia"]"# } else { r#"["ciencia"]"# };
                format!(r#"{{"numero": {n}, "titulo": "Episodio {n}", "categorias": {tags}}}"#)
            })
            .collect();
        format!(r#"{{"episodios": [{}]}}"#, items.join(","))
    }

    fn episode_controller(count: u32) -> Controller {
        let catalog = Catalog::from_slice(episodes_json(count).as_bytes(), CatalogKind::Episodes).unwrap();
        Controller::new(catalog, Arc::new(Config::default()))
    }

    #[test]
    fn test_parse_events() {
        assert_eq!("search Tech".parse::<Event>().unwrap(), Event::Search("Tech".into()));
        assert_eq!("page 3".parse::<Event>().unwrap(), Event::GoToPage(3));
        assert_eq!("sub none".parse::<Event>().unwrap(), Event::SelectSubcategory(None));
        assert_eq!(
            "sort mas_antiguo".parse::<Event>().unwrap(),
            Event::SelectSort(SortMode::MostOld)
        );
        assert_eq!("prev".parse::<Event>().unwrap(), Event::PreviousPage);
        assert!("jump 3".parse::<Event>().is_err());
        assert!("page two".parse::<Event>().is_err());
    }

    #[test]
    fn test_event_display_parses_back() {
        let event = Event::SelectCategory("ciencia".into());
        assert_eq!(event.to_string().parse::<Event>().unwrap(), event);
    }

    #[test]
    fn test_upstream_change_resets_page() {
        let controller = episode_controller(30);
        let mut state = controller.initial_state();
        state.page = 3;

        let next = controller.handle_event(&state, Event::Search("  Episodio ".into()));
        assert_eq!(next.state.page, 1);
        assert_eq!(next.state.query, "episodio");
        assert!(!next.scroll_to_top);

        let next = controller.handle_event(&state, Event::SelectSort(SortMode::MostOld));
        assert_eq!(next.state.page, 1);
    }

    #[test]
    fn test_category_clears_subcategory() {
        let controller = episode_controller(4);
        let mut state = controller.initial_state();
        state.category = "tech".into();
        state.subcategory = Some("ia".into());

        let next = controller.handle_event(&state, Event::SelectCategory("Ciencia".into()));
        assert_eq!(next.state.category, "ciencia");
        assert_eq!(next.state.subcategory, None);
    }

    #[test]
    fn test_page_events_clamp() {
        let controller = episode_controller(30);
        let state = controller.initial_state();

        let next = controller.handle_event(&state, Event::GoToPage(99));
        assert_eq!(next.state.page, 3);
        assert!(next.scroll_to_top);

        let next = controller.handle_event(&next.state, Event::NextPage);
        assert_eq!(next.state.page, 3);

        let next = controller.handle_event(&state, Event::PreviousPage);
        assert_eq!(next.state.page, 1);
    }

    #[test]
    fn test_page_clamp_follows_filters() {
        let controller = episode_controller(30);
        let mut state = controller.initial_state();
        state.category = "tech".into();

        // 15 tech episodes at 12 per page
        let next = controller.handle_event(&state, Event::GoToPage(5));
        assert_eq!(next.state.page, 2);
    }

    #[test]
    fn test_failed_load_renders_error() {
        let controller = Controller::from_load(
            Err(AppError::load("invitados.json", "file not found")),
            CatalogKind::Guests,
            Arc::new(Config::default()),
        );
        assert!(controller.load_failed());

        let state = controller.initial_state();
        let view = controller.render(&state);
        assert!(matches!(view.notice, Some(Notice::LoadError { .. })));
        assert!(view.cards.is_empty());
        assert!(view.pagination.is_empty());

        let next = controller.handle_event(&state, Event::NextPage);
        assert_eq!(next.state.page, 1);
    }

    #[test]
    fn test_render_uses_listing_defaults() {
        let controller = episode_controller(21);
        let view = controller.render(&controller.initial_state());
        assert_eq!(view.cards.len(), 12);
        assert!(matches!(view.cards[0], Card::Episode(_)));
        assert_eq!(view.total_pages, 2);
    }

    #[test]
    fn test_category_counts() {
        let controller = episode_controller(4);
        let counts = controller.category_counts();
        assert_eq!(
            counts,
            vec![("ciencia".to_string(), 2), ("tech".to_string(), 2), ("ia".to_string(), 2)]
        );
        assert_eq!(controller.categories(), vec!["ciencia", "tech", "ia"]);
    }
}
