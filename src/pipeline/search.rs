// src/pipeline/search.rs

//! Free-text relevance scoring.

use crate::models::CatalogItem;

/// Title contains the query.
pub const TITLE_WEIGHT: u32 = 10;
/// Description contains the query.
pub const DESCRIPTION_WEIGHT: u32 = 5;
/// Any category tag contains the query.
pub const TAG_WEIGHT: u32 = 15;
/// Bonus for featured records that matched at least one field.
pub const FEATURED_BONUS: u32 = 2;

/// A normalised, non-empty search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    /// Normalise raw input: trimmed and lowercased.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Build a query; `None` when the input is blank, which disables
    /// scoring and search filtering entirely.
    pub fn parse(raw: &str) -> Option<Self> {
        let text = Self::normalize(raw);
        (!text.is_empty()).then_some(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Relevance score; 0 means the record does not match.
    pub fn score<T: CatalogItem>(&self, item: &T) -> u32 {
        let mut score = 0;
        if self.found_in(item.title()) {
            score += TITLE_WEIGHT;
        }
        if self.found_in(item.description())
            || item.secondary_text().is_some_and(|text| self.found_in(text))
        {
            score += DESCRIPTION_WEIGHT;
        }
        if item.tags().iter().any(|tag| self.found_in(tag)) {
            score += TAG_WEIGHT;
        }
        if score > 0 && item.featured() {
            score += FEATURED_BONUS;
        }
        score
    }

    fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::Episode;

    fn episode(title: &str, description: &str, tags: &[&str], featured: bool) -> Episode {
        Episode {
            number: 1,
            title: title.to_string(),
            description: description.to_string(),
            image: String::new(),
            categories: tags.iter().map(|t| t.to_string()).collect(),
            featured,
            links: BTreeMap::new(),
        }
    }

    #[test]
    fn test_blank_query_disabled() {
        assert!(SearchQuery::parse("").is_none());
        assert!(SearchQuery::parse("   \t").is_none());
    }

    #[test]
    fn test_query_normalised() {
        let query = SearchQuery::parse("  RuSt ").unwrap();
        assert_eq!(query.as_str(), "rust");
    }

    #[test]
    fn test_weights_accumulate() {
        let query = SearchQuery::parse("rust").unwrap();
        let item = episode("Rust async", "Hablamos de Rust", &["rustaceans"], false);
        assert_eq!(query.score(&item), 10 + 5 + 15);
    }

    #[test]
    fn test_tag_only_match() {
        let query = SearchQuery::parse("tech").unwrap();
        let item = episode("Entrevista", "Una charla", &["fintech"], false);
        assert_eq!(query.score(&item), TAG_WEIGHT);
    }

    #[test]
    fn test_featured_bonus_requires_match() {
        let query = SearchQuery::parse("rust").unwrap();
        let matching = episode("Rust", "", &[], true);
        let missing = episode("Go", "", &["backend"], true);
        assert_eq!(query.score(&matching), TITLE_WEIGHT + FEATURED_BONUS);
        assert_eq!(query.score(&missing), 0);
    }

    #[test]
    fn test_case_insensitive_non_ascii() {
        let query = SearchQuery::parse("CIENCIA Y TECNOLOGÍA").unwrap();
        let item = episode("Ciencia y Tecnología hoy", "", &[], false);
        assert_eq!(query.score(&item), TITLE_WEIGHT);
    }

    #[test]
    fn test_guest_role_searchable_alongside_bio() {
        let guest: crate::models::Guest = serde_json::from_str(
            r#"{"id": "1", "nombre": "Ana", "titulo": "Ingeniera de datos",
                "bio_corta": "Trabaja con datos abiertos."}"#,
        )
        .unwrap();

        let role = SearchQuery::parse("ingeniera").unwrap();
        assert_eq!(role.score(&guest), DESCRIPTION_WEIGHT);

        // bio and role both matching still count once
        let both = SearchQuery::parse("datos").unwrap();
        assert_eq!(both.score(&guest), DESCRIPTION_WEIGHT);
    }
}
