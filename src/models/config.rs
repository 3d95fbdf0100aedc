//! Application configuration structures.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ALL_CATEGORIES, CatalogKind};
use crate::error::{AppError, Result};
use crate::pipeline::SortMode;
use crate::utils::same_tag;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where and how the data document is fetched
    #[serde(default)]
    pub source: SourceConfig,

    /// Episode listing settings
    #[serde(default = "defaults::episode_listing")]
    pub episodes: ListingConfig,

    /// Guest listing settings
    #[serde(default = "defaults::guest_listing")]
    pub guests: ListingConfig,

    /// Card projection settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Category vocabulary with display colours
    #[serde(default = "defaults::categories")]
    pub categories: Vec<CategoryStyle>,

    /// Link type to icon mappings for guest buttons
    #[serde(default = "defaults::icons")]
    pub icons: Vec<IconMapping>,

    /// User-visible message strings
    #[serde(default)]
    pub messages: Messages,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Listing settings for a record kind.
    pub fn listing(&self, kind: CatalogKind) -> &ListingConfig {
        match kind {
            CatalogKind::Episodes => &self.episodes,
            CatalogKind::Guests => &self.guests,
        }
    }

    /// Display colour for a category tag, if it belongs to the vocabulary.
    pub fn category_color(&self, tag: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| same_tag(&c.token, tag))
            .map(|c| c.color.as_str())
    }

    /// Icon mapping for a declared link type.
    pub fn icon_for(&self, kind: &str) -> Option<&IconMapping> {
        let kind = kind.trim();
        self.icons
            .iter()
            .find(|m| m.kind.eq_ignore_ascii_case(kind))
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.source.user_agent.trim().is_empty() {
            return Err(AppError::validation("source.user_agent is empty"));
        }
        for (name, listing) in [("episodes", &self.episodes), ("guests", &self.guests)] {
            if listing.page_size == 0 {
                return Err(AppError::validation(format!(
                    "{name}.page_size must be > 0"
                )));
            }
            if listing.description_chars == 0 {
                return Err(AppError::validation(format!(
                    "{name}.description_chars must be > 0"
                )));
            }
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            let token = category.token.trim().to_lowercase();
            if token.is_empty() {
                return Err(AppError::validation("category token is empty"));
            }
            if token == ALL_CATEGORIES {
                return Err(AppError::validation(format!(
                    "'{ALL_CATEGORIES}' is reserved and cannot be a category"
                )));
            }
            if !seen.insert(token) {
                return Err(AppError::validation(format!(
                    "duplicate category token '{}'",
                    category.token
                )));
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            episodes: defaults::episode_listing(),
            guests: defaults::guest_listing(),
            display: DisplayConfig::default(),
            categories: defaults::categories(),
            icons: defaults::icons(),
            messages: Messages::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Data source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Default document location (file path or http(s) URL)
    #[serde(default)]
    pub location: Option<String>,

    /// User-Agent header for HTTP sources
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: None,
            user_agent: defaults::user_agent(),
        }
    }
}

/// Per-kind listing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Cards per page
    pub page_size: usize,

    /// Character budget for card descriptions
    pub description_chars: usize,

    /// Sort mode when the page first loads
    pub default_sort: SortMode,
}

/// Card projection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Separator between an episode title and its subtitle
    #[serde(default = "defaults::title_delimiter")]
    pub title_delimiter: String,

    /// Listen platforms always shown on episode cards, in order
    #[serde(default = "defaults::platforms")]
    pub platforms: Vec<String>,

    /// Colour used for tags outside the vocabulary
    #[serde(default = "defaults::fallback_color")]
    pub fallback_color: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title_delimiter: defaults::title_delimiter(),
            platforms: defaults::platforms(),
            fallback_color: defaults::fallback_color(),
        }
    }
}

/// A category from the fixed vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStyle {
    /// Token as it appears in the data files
    pub token: String,

    /// Button label
    pub label: String,

    /// Colour token used for badges
    pub color: String,
}

/// Maps a declared link type to a concrete icon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconMapping {
    /// Link type, matched case-insensitively
    pub kind: String,

    /// Icon font class (e.g. "bi bi-linkedin")
    #[serde(default)]
    pub glyph: Option<String>,

    /// Image asset path, preferred over the glyph when set
    #[serde(default)]
    pub image: Option<String>,
}

/// User-visible message strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default = "defaults::episodes_load_error")]
    pub episodes_load_error: String,
    #[serde(default = "defaults::guests_load_error")]
    pub guests_load_error: String,
    #[serde(default = "defaults::episodes_no_matches")]
    pub episodes_no_matches: String,
    #[serde(default = "defaults::episodes_empty")]
    pub episodes_empty: String,
    #[serde(default = "defaults::guests_no_matches")]
    pub guests_no_matches: String,
    #[serde(default = "defaults::guests_empty")]
    pub guests_empty: String,
    #[serde(default = "defaults::pending_episode")]
    pub pending_episode: String,
    #[serde(default = "defaults::missing_bio")]
    pub missing_bio: String,
    #[serde(default = "defaults::categories_prefix")]
    pub categories_prefix: String,
    #[serde(default = "defaults::listen_label")]
    pub listen_label: String,
    #[serde(default = "defaults::previous_label")]
    pub previous_label: String,
    #[serde(default = "defaults::next_label")]
    pub next_label: String,
}

impl Messages {
    pub fn load_error(&self, kind: CatalogKind) -> &str {
        match kind {
            CatalogKind::Episodes => &self.episodes_load_error,
            CatalogKind::Guests => &self.guests_load_error,
        }
    }

    /// Empty-state text; differs when a search query caused it.
    pub fn no_results(&self, kind: CatalogKind, searched: bool) -> &str {
        match (kind, searched) {
            (CatalogKind::Episodes, true) => &self.episodes_no_matches,
            (CatalogKind::Episodes, false) => &self.episodes_empty,
            (CatalogKind::Guests, true) => &self.guests_no_matches,
            (CatalogKind::Guests, false) => &self.guests_empty,
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            episodes_load_error: defaults::episodes_load_error(),
            guests_load_error: defaults::guests_load_error(),
            episodes_no_matches: defaults::episodes_no_matches(),
            episodes_empty: defaults::episodes_empty(),
            guests_no_matches: defaults::guests_no_matches(),
            guests_empty: defaults::guests_empty(),
            pending_episode: defaults::pending_episode(),
            missing_bio: defaults::missing_bio(),
            categories_prefix: defaults::categories_prefix(),
            listen_label: defaults::listen_label(),
            previous_label: defaults::previous_label(),
            next_label: defaults::next_label(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter (overridden by RUST_LOG)
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    use super::{CategoryStyle, IconMapping, ListingConfig};
    use crate::pipeline::SortMode;

    // Source defaults
    pub fn user_agent() -> String {
        concat!("podcast-catalog/", env!("CARGO_PKG_VERSION")).into()
    }

    // Listing defaults
    pub fn episode_listing() -> ListingConfig {
        ListingConfig {
            page_size: 12,
            description_chars: 150,
            default_sort: SortMode::Relevance,
        }
    }
    pub fn guest_listing() -> ListingConfig {
        ListingConfig {
            page_size: 9,
            description_chars: 300,
            default_sort: SortMode::Identifier,
        }
    }

    // Display defaults
    pub fn title_delimiter() -> String {
        "|".into()
    }
    pub fn platforms() -> Vec<String> {
        vec!["youtube".into(), "spotify".into(), "apple".into()]
    }
    pub fn fallback_color() -> String {
        "secondary".into()
    }

    pub fn categories() -> Vec<CategoryStyle> {
        [
            ("tech", "Tech", "primary"),
            ("ciencia", "Ciencia", "success"),
            ("negocios", "Negocios", "warning"),
            ("cultura", "Cultura", "info"),
            ("entrevista", "Entrevista", "danger"),
        ]
        .into_iter()
        .map(|(token, label, color)| CategoryStyle {
            token: token.into(),
            label: label.into(),
            color: color.into(),
        })
        .collect()
    }

    pub fn icons() -> Vec<IconMapping> {
        [
            ("linkedin", "bi bi-linkedin"),
            ("twitter", "bi bi-twitter-x"),
            ("x", "bi bi-twitter-x"),
            ("github", "bi bi-github"),
            ("instagram", "bi bi-instagram"),
            ("facebook", "bi bi-facebook"),
            ("tiktok", "bi bi-tiktok"),
            ("youtube", "bi bi-youtube"),
            ("spotify", "bi bi-spotify"),
            ("web", "bi bi-globe"),
            ("website", "bi bi-globe"),
            ("email", "bi bi-envelope"),
            ("correo", "bi bi-envelope"),
        ]
        .into_iter()
        .map(|(kind, glyph)| IconMapping {
            kind: kind.into(),
            glyph: Some(glyph.into()),
            image: None,
        })
        .collect()
    }

    // Message defaults
    pub fn episodes_load_error() -> String {
        "Error al cargar los datos del podcast. Asegúrese de que 'data.json' existe y es accesible."
            .into()
    }
    pub fn guests_load_error() -> String {
        "Error al cargar invitados. Revisa la consola.".into()
    }
    pub fn episodes_no_matches() -> String {
        "No se encontraron episodios que coincidan con la búsqueda.".into()
    }
    pub fn episodes_empty() -> String {
        "No hay episodios disponibles.".into()
    }
    pub fn guests_no_matches() -> String {
        "No se encontraron invitados que coincidan con la búsqueda.".into()
    }
    pub fn guests_empty() -> String {
        "No hay invitados disponibles.".into()
    }
    pub fn pending_episode() -> String {
        "Pendiente".into()
    }
    pub fn missing_bio() -> String {
        "Sin biografía disponible.".into()
    }
    pub fn categories_prefix() -> String {
        "Categorías: ".into()
    }
    pub fn listen_label() -> String {
        "Escuchar Episodio completo".into()
    }
    pub fn previous_label() -> String {
        "«".into()
    }
    pub fn next_label() -> String {
        "»".into()
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_page_size() {
        let mut config = Config::default();
        config.guests.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_reserved_category() {
        let mut config = Config::default();
        config.categories.push(CategoryStyle {
            token: "All".into(),
            label: "Todo".into(),
            color: "light".into(),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_category() {
        let mut config = Config::default();
        config.categories.push(CategoryStyle {
            token: "TECH".into(),
            label: "Tech".into(),
            color: "dark".into(),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [episodes]
            page_size = 6
            description_chars = 80
            default_sort = "most-old"

            [messages]
            pending_episode = "Próximamente"
            "#,
        )
        .unwrap();
        assert_eq!(config.episodes.page_size, 6);
        assert_eq!(config.episodes.default_sort, SortMode::MostOld);
        assert_eq!(config.guests.page_size, 9);
        assert_eq!(config.messages.pending_episode, "Próximamente");
        assert_eq!(config.messages.missing_bio, "Sin biografía disponible.");
        assert_eq!(config.display.title_delimiter, "|");
    }

    #[test]
    fn category_color_lookup_is_case_insensitive() {
        let config = Config::default();
        assert_eq!(config.category_color("Tech"), Some("primary"));
        assert_eq!(config.category_color("deportes"), None);
    }

    #[test]
    fn load_or_default_falls_back() {
        let config = Config::load_or_default("/nonexistent/catalog.toml");
        assert_eq!(config.episodes.page_size, 12);
    }
}
