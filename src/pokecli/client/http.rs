use super::{endpoint_url, related_names, LookupClient};
use crate::error::{LookupError, PokeError, Result};
use crate::model::{Category, EnrichmentResult, RemoteRecord};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("poke-cli/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for the reference API.
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| PokeError::Config(format!("could not build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_record(
        &self,
        category: Category,
        entity_name: &str,
    ) -> std::result::Result<RemoteRecord, LookupError> {
        let url = endpoint_url(&self.base_url, category, entity_name);
        debug!(%url, "GET");

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = resp.status();
        debug!(%url, %status, "response");

        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound {
                category,
                name: entity_name.to_lowercase(),
            });
        }
        if !status.is_success() {
            return Err(LookupError::Transport(format!(
                "unexpected status {} from {}",
                status, url
            )));
        }

        let body = resp
            .text()
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| LookupError::Decode(e.to_string()))
    }
}

impl LookupClient for HttpClient {
    fn fetch(
        &self,
        category: Category,
        entity_name: &str,
    ) -> std::result::Result<RemoteRecord, LookupError> {
        self.get_record(category, entity_name)
    }

    fn fetch_related(
        &self,
        category: Category,
        entity_name: &str,
    ) -> std::result::Result<EnrichmentResult, LookupError> {
        let record = self.get_record(category, entity_name)?;
        Ok(EnrichmentResult {
            category,
            entity_name: entity_name.to_lowercase(),
            names: related_names(&record, category),
        })
    }
}
