//! Data document loading.
//!
//! A listing page reads exactly one JSON document per session: no
//! retries, no re-fetching. The document lives either on disk or behind
//! an HTTP URL.

pub mod file;
pub mod http;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::{Catalog, CatalogKind, SourceConfig};
use crate::utils::is_http_location;

pub use file::FileSource;
pub use http::HttpSource;

/// Trait for data document backends.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Human-readable location, used in logs and errors.
    fn location(&self) -> &str;

    /// Read the raw document bytes (a single attempt).
    async fn fetch(&self) -> Result<Vec<u8>>;
}

/// A source chosen from a location string.
pub enum Source {
    File(FileSource),
    Http(HttpSource),
}

impl Source {
    /// HTTP for `http(s)://` locations, filesystem otherwise.
    pub fn parse(location: &str, config: &SourceConfig) -> Result<Self> {
        let location = location.trim();
        if location.is_empty() {
            return Err(AppError::config("data source location is empty"));
        }
        if is_http_location(location) {
            Ok(Source::Http(HttpSource::new(location, config)?))
        } else {
            Ok(Source::File(FileSource::new(location)))
        }
    }
}

#[async_trait]
impl DocumentSource for Source {
    fn location(&self) -> &str {
        match self {
            Source::File(source) => source.location(),
            Source::Http(source) => source.location(),
        }
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            Source::File(source) => source.fetch().await,
            Source::Http(source) => source.fetch().await,
        }
    }
}

/// Fetch and parse the document into an immutable catalog.
pub async fn load_catalog(source: &dyn DocumentSource, kind: CatalogKind) -> Result<Catalog> {
    log::info!("Loading {} from {}", kind, source.location());

    let bytes = source.fetch().await?;
    let catalog = Catalog::from_slice(&bytes, kind).map_err(|e| match e {
        AppError::Json(err) => AppError::load(source.location(), err),
        other => other,
    })?;

    log::info!("Loaded {} {}", catalog.len(), kind);
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticSource(&'static [u8]);

    #[async_trait]
    impl DocumentSource for StaticSource {
        fn location(&self) -> &str {
            "memory"
        }

        async fn fetch(&self) -> Result<Vec<u8>> {
            Ok(self.0.to_vec())
        }
    }

    #[test]
    fn test_parse_picks_backend() {
        let config = SourceConfig::default();
        assert!(matches!(
            Source::parse("https://example.com/data.json", &config).unwrap(),
            Source::Http(_)
        ));
        assert!(matches!(
            Source::parse("./invitados.json", &config).unwrap(),
            Source::File(_)
        ));
        assert!(Source::parse("  ", &config).is_err());
    }

    #[tokio::test]
    async fn test_load_catalog() {
        let source = StaticSource(br#"{"episodios": [{"numero": 1, "titulo": "Piloto"}]}"#);
        let catalog = load_catalog(&source, CatalogKind::Episodes).await.unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_document_is_load_error() {
        let source = StaticSource(b"{not json");
        let err = load_catalog(&source, CatalogKind::Episodes).await.unwrap_err();
        assert!(matches!(err, AppError::Load { .. }));
    }
}
