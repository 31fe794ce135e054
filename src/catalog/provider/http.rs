use crate::catalog::{CatalogError, Result};
use crate::config::CatalogConfig;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// HTTP client wrapper for the catalog API.
///
/// Attaches the bearer token and the `language` query parameter to every
/// request. Holds no mutable state, so clones can be shared freely.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    access_token: String,
    language: String,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.api_base()?,
            access_token: config.access_token.clone(),
            language: config.language.clone(),
        })
    }

    /// Build full URL from endpoint
    pub fn url(&self, endpoint: &str) -> Result<Url> {
        self.base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| CatalogError::InvalidArgument(format!("bad endpoint {endpoint}: {e}")))
    }

    /// Execute GET request and parse the JSON body.
    ///
    /// An empty or `null` body yields `Ok(None)`.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Option<T>> {
        self.get_with_params(endpoint, &[]).await
    }

    /// Execute GET request with query parameters
    pub async fn get_with_params<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<T>> {
        let url = self.url(endpoint)?;
        debug!("GET {} (language: {})", url.path(), self.language);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .query(params)
            .query(&[("language", self.language.as_str())])
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Handle response and parse JSON
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<Option<T>> {
        let status = response.status();

        if !status.is_success() {
            return Err(CatalogError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        Ok(serde_json::from_slice::<Option<T>>(&body)?)
    }
}
