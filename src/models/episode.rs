//! Episode data structure.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{CatalogItem, IdKey};

/// A published podcast episode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Episode {
    /// Sequence number, unique within the collection
    #[serde(rename = "numero")]
    pub number: u32,

    /// Title, possibly carrying a subtitle after a delimiter
    #[serde(rename = "titulo")]
    pub title: String,

    #[serde(rename = "descripcion", default)]
    pub description: String,

    /// Cover image reference
    #[serde(rename = "imagen", default)]
    pub image: String,

    /// Category tags from the site's fixed vocabulary
    #[serde(rename = "categorias", default)]
    pub categories: Vec<String>,

    /// Featured episodes sort ahead under `relevance`
    #[serde(rename = "destacado", default)]
    pub featured: bool,

    /// Platform name to listen-link URL
    #[serde(default)]
    pub links: BTreeMap<String, Option<String>>,
}

impl Episode {
    /// Listen link for a platform, ignoring blank entries.
    pub fn link(&self, platform: &str) -> Option<&str> {
        self.links
            .get(platform)
            .and_then(|url| url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Split the title into heading and optional subtitle.
    pub fn split_title(&self, delimiter: &str) -> (&str, Option<&str>) {
        if delimiter.is_empty() {
            return (self.title.trim(), None);
        }
        match self.title.split_once(delimiter) {
            Some((head, sub)) if !sub.trim().is_empty() => (head.trim(), Some(sub.trim())),
            Some((head, _)) => (head.trim(), None),
            None => (self.title.trim(), None),
        }
    }
}

impl CatalogItem for Episode {
    fn id_key(&self) -> IdKey<'_> {
        IdKey::Numeric(f64::from(self.number))
    }

    fn sequence(&self) -> u32 {
        self.number
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.categories
    }

    fn featured(&self) -> bool {
        self.featured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_episode(title: &str) -> Episode {
        Episode {
            number: 7,
            title: title.to_string(),
            description: String::new(),
            image: String::new(),
            categories: vec!["tech".into()],
            featured: false,
            links: BTreeMap::from([
                ("youtube".to_string(), Some("https://youtu.be/x".to_string())),
                ("spotify".to_string(), Some("  ".to_string())),
                ("apple".to_string(), None),
            ]),
        }
    }

    #[test]
    fn test_split_title() {
        let episode = sample_episode("Rust en producción | con Ana");
        assert_eq!(
            episode.split_title("|"),
            ("Rust en producción", Some("con Ana"))
        );
        assert_eq!(episode.split_title(" - "), ("Rust en producción | con Ana", None));
    }

    #[test]
    fn test_split_title_trailing_delimiter() {
        let episode = sample_episode("Solo título |");
        assert_eq!(episode.split_title("|"), ("Solo título", None));
    }

    #[test]
    fn test_link_skips_blank_and_null() {
        let episode = sample_episode("t");
        assert_eq!(episode.link("youtube"), Some("https://youtu.be/x"));
        assert_eq!(episode.link("spotify"), None);
        assert_eq!(episode.link("apple"), None);
        assert_eq!(episode.link("ivoox"), None);
    }

    #[test]
    fn test_deserialize_defaults() {
        let episode: Episode = serde_json::from_str(r#"{"numero": 3, "titulo": "x"}"#).unwrap();
        assert!(!episode.featured);
        assert!(episode.categories.is_empty());
        assert!(episode.links.is_empty());
    }
}
