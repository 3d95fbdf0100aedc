//! Episode card projection.

use serde::Serialize;

use super::LinkTarget;
use crate::models::{Config, Episode};
use crate::utils::{capitalize, dom_id, same_tag, truncate_words};

/// Colour-coded category badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub token: String,
    pub label: String,
    pub color: String,
}

/// Listen-on-platform button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListenButton {
    pub platform: String,
    pub target: LinkTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeCard {
    pub dom_id: String,
    pub number: u32,
    pub image: String,
    pub image_alt: String,
    /// `#N: title`
    pub heading: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub description_truncated: bool,
    pub featured: bool,
    pub badges: Vec<Badge>,
    /// e.g. `Categorías: Tech, Ciencia`
    pub categories_line: String,
    pub listen: Vec<ListenButton>,
    /// Search score, present only while a query is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

pub fn episode_card(episode: &Episode, score: Option<u32>, config: &Config) -> EpisodeCard {
    let (title, subtitle) = episode.split_title(&config.display.title_delimiter);
    let (description, description_truncated) =
        truncate_words(&episode.description, config.episodes.description_chars);

    let badges = episode
        .categories
        .iter()
        .map(|tag| badge(tag, config))
        .collect();

    let categories_line = format!(
        "{}{}",
        config.messages.categories_prefix,
        episode
            .categories
            .iter()
            .map(|c| capitalize(c))
            .collect::<Vec<_>>()
            .join(", ")
    );

    EpisodeCard {
        dom_id: dom_id("episode-", &episode.number.to_string()),
        number: episode.number,
        image: episode.image.clone(),
        image_alt: episode.title.clone(),
        heading: format!("#{}: {}", episode.number, title),
        title: title.to_string(),
        subtitle: subtitle.map(str::to_string),
        description: description.into_owned(),
        description_truncated,
        featured: episode.featured,
        badges,
        categories_line,
        listen: listen_buttons(episode, config),
        score,
    }
}

fn badge(tag: &str, config: &Config) -> Badge {
    let known = config
        .categories
        .iter()
        .find(|c| same_tag(&c.token, tag));

    Badge {
        token: tag.to_lowercase(),
        label: known.map_or_else(|| capitalize(tag), |c| c.label.clone()),
        color: known.map_or_else(|| config.display.fallback_color.clone(), |c| c.color.clone()),
    }
}

/// Configured platforms first (always present, disabled when missing),
/// then any other platform the record links to.
fn listen_buttons(episode: &Episode, config: &Config) -> Vec<ListenButton> {
    let platforms = &config.display.platforms;

    let extra = episode
        .links
        .keys()
        .filter(|name| !platforms.iter().any(|p| p.eq_ignore_ascii_case(name)))
        .filter(|name| episode.link(name).is_some());

    platforms
        .iter()
        .chain(extra)
        .map(|platform| ListenButton {
            platform: platform.clone(),
            target: LinkTarget::new(episode.link(platform)),
        })
        .collect()
}
