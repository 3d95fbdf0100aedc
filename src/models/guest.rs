//! Guest data structure.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::{CatalogItem, IdKey};

/// Guest identifier.
///
/// The data files mix JSON numbers (`3`) and strings (`"2a"`); both are
/// normalised to their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GuestId(String);

impl GuestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier carries letters (special ordering slots).
    pub fn has_letters(&self) -> bool {
        self.0.chars().any(char::is_alphabetic)
    }

    /// Numeric value of a letter-free identifier.
    pub fn numeric_value(&self) -> Option<f64> {
        if self.has_letters() {
            return None;
        }
        self.0.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for GuestId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => GuestId::new(text),
            RawId::Number(number) => GuestId::new(number.to_string()),
        })
    }
}

/// A social or web link shown as a button on the guest card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuestLink {
    pub url: String,

    /// Declared link type or label (e.g. "linkedin", "web")
    #[serde(rename = "tipo", alias = "type", alias = "label", default)]
    pub kind: String,

    /// Icon reference: a glyph class or an image path
    #[serde(rename = "icono", alias = "icon", default)]
    pub icon: Option<String>,
}

/// A person who has appeared on the podcast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Guest {
    pub id: GuestId,

    #[serde(rename = "nombre")]
    pub name: String,

    /// Title or role text
    #[serde(rename = "titulo", default)]
    pub role: String,

    #[serde(rename = "imagen", default)]
    pub image: String,

    #[serde(rename = "bio_corta", default)]
    pub short_bio: Option<String>,

    /// Long biography, may contain line breaks
    #[serde(rename = "bio_completa", default)]
    pub full_bio: Option<String>,

    #[serde(alias = "redes", default)]
    pub links: Vec<GuestLink>,

    /// Primary media link for the guest's episode
    #[serde(rename = "episodio_link", default)]
    pub episode_link: Option<String>,

    #[serde(rename = "episodio_numero", default)]
    pub episode_number: Option<u32>,

    #[serde(rename = "episodio_titulo", default)]
    pub episode_title: Option<String>,
}

/// Treat blank optional strings as absent.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl Guest {
    pub fn short_bio(&self) -> Option<&str> {
        non_blank(&self.short_bio)
    }

    pub fn full_bio(&self) -> Option<&str> {
        non_blank(&self.full_bio)
    }

    pub fn episode_link(&self) -> Option<&str> {
        non_blank(&self.episode_link)
    }

    pub fn episode_title(&self) -> Option<&str> {
        non_blank(&self.episode_title)
    }
}

impl CatalogItem for Guest {
    fn id_key(&self) -> IdKey<'_> {
        match self.id.numeric_value() {
            Some(value) => IdKey::Numeric(value),
            None => IdKey::Alpha(self.id.as_str()),
        }
    }

    fn sequence(&self) -> u32 {
        self.episode_number.unwrap_or(0)
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        self.short_bio().unwrap_or_default()
    }

    fn secondary_text(&self) -> Option<&str> {
        Some(self.role.trim()).filter(|role| !role.is_empty())
    }

    fn tags(&self) -> &[String] {
        &[]
    }

    fn featured(&self) -> bool {
        false
    }
}
