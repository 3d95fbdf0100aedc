// src/source/http.rs

//! HTTP source.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::DocumentSource;
use crate::error::{AppError, Result};
use crate::models::SourceConfig;

/// Reads the document with a single GET request.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: Url,
    location: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: &str, config: &SourceConfig) -> Result<Self> {
        let url = Url::parse(url)?;
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self {
            location: url.to_string(),
            url,
            client,
        })
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status {
                url: self.location.clone(),
                status: status.as_u16(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}
