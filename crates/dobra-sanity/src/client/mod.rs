//! HTTP client for the Sanity query API.

mod catalog;

use std::time::Duration;

use dobra_core::AppConfig;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::cache::ResponseCache;
use crate::error::SanityError;
use crate::types::{ErrorResponse, QueryResponse};

/// Read-only GROQ client with an in-process response cache.
///
/// Every catalog query is served from the cache while it is younger than
/// `revalidate`; site settings use the longer `settings_revalidate`. Failed
/// requests are never cached, so the next call retries the network.
pub struct SanityClient {
    client: Client,
    /// `{base}/v{api_version}/data/query/{dataset}`, without query string.
    query_url: Url,
    token: Option<String>,
    cache: ResponseCache,
    revalidate: Duration,
    settings_revalidate: Duration,
}

impl std::fmt::Debug for SanityClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SanityClient")
            .field("query_url", &self.query_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "[redacted]"))
            .field("revalidate", &self.revalidate)
            .field("settings_revalidate", &self.settings_revalidate)
            .finish_non_exhaustive()
    }
}

impl SanityClient {
    /// Builds a client for the project, dataset and caching windows in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SanityError::InvalidBaseUrl`] if the project id does not form
    /// a valid host, or [`SanityError::Http`] if the `reqwest::Client` cannot
    /// be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, SanityError> {
        let client = Self::with_base_url(
            &config.sanity_base_url(),
            &config.sanity_dataset,
            &config.sanity_api_version,
            config.cms_request_timeout_secs,
            &config.cms_user_agent,
        )?
        .with_revalidate(
            Duration::from_secs(config.revalidate_secs),
            Duration::from_secs(config.settings_revalidate_secs),
        );

        Ok(match &config.sanity_api_token {
            Some(token) => client.with_token(token),
            None => client,
        })
    }

    /// Builds a client against an explicit API host. Caching is off until
    /// [`Self::with_revalidate`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`SanityError::InvalidBaseUrl`] if `base_url` cannot be parsed,
    /// or [`SanityError::Http`] if the `reqwest::Client` cannot be constructed.
    pub fn with_base_url(
        base_url: &str,
        dataset: &str,
        api_version: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SanityError> {
        let query_url = Self::query_url(base_url, dataset, api_version)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            query_url,
            token: None,
            cache: ResponseCache::new(),
            revalidate: Duration::ZERO,
            settings_revalidate: Duration::ZERO,
        })
    }

    /// Sends `token` as a bearer token on every request.
    #[must_use]
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    #[must_use]
    pub fn with_revalidate(mut self, content: Duration, settings: Duration) -> Self {
        self.revalidate = content;
        self.settings_revalidate = settings;
        self
    }

    #[must_use]
    pub fn revalidate(&self) -> Duration {
        self.revalidate
    }

    #[must_use]
    pub fn settings_revalidate(&self) -> Duration {
        self.settings_revalidate
    }

    /// Drops every cached response.
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    /// Runs `query` and returns the raw `result` value, bypassing the cache.
    ///
    /// Each entry of `params` is sent as `$name=<json>`.
    ///
    /// # Errors
    ///
    /// - [`SanityError::Api`]: non-2xx response carrying an error description.
    /// - [`SanityError::UnexpectedStatus`]: any other non-2xx response.
    /// - [`SanityError::Http`]: network or TLS failure.
    /// - [`SanityError::Deserialize`]: the body is not a query response envelope.
    pub async fn query_raw(
        &self,
        query: &str,
        params: &[(&str, serde_json::Value)],
    ) -> Result<serde_json::Value, SanityError> {
        let url = self.request_url(query, params);

        let mut request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let description = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|e| e.error.description);
            return Err(match description {
                Some(description) => SanityError::Api {
                    status: status.as_u16(),
                    description,
                },
                None => SanityError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: self.query_url.to_string(),
                },
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<QueryResponse>(&body).map_err(|e| {
            SanityError::Deserialize {
                context: format!("query response from {}", self.query_url),
                source: e,
            }
        })?;

        tracing::debug!(ms = ?parsed.ms, "sanity query completed");
        Ok(parsed.result)
    }

    /// Runs `query` through the cache and decodes the result as `T`.
    ///
    /// A value is cached only after it decodes, so a malformed response is
    /// re-fetched on the next call.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        context: &str,
        query: &str,
        params: &[(&str, serde_json::Value)],
        revalidate: Duration,
    ) -> Result<T, SanityError> {
        let key = ResponseCache::key(query, params);
        if let Some(cached) = self.cache.get(&key).await {
            if let Ok(value) = serde_json::from_value(cached) {
                tracing::debug!(context, "sanity cache hit");
                return Ok(value);
            }
        }

        let result = self.query_raw(query, params).await?;
        let value = serde_json::from_value::<T>(result.clone()).map_err(|e| {
            SanityError::Deserialize {
                context: context.to_string(),
                source: e,
            }
        })?;
        self.cache.insert(key, result, revalidate).await;
        Ok(value)
    }

    fn query_url(base_url: &str, dataset: &str, api_version: &str) -> Result<Url, SanityError> {
        let base = base_url.trim_end_matches('/');
        let version = api_version.trim_start_matches('v');
        let raw = format!("{base}/v{version}/data/query/{dataset}");
        let url = Url::parse(&raw).map_err(|e| SanityError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(SanityError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "expected an http(s) URL".to_string(),
            });
        }
        Ok(url)
    }

    fn request_url(&self, query: &str, params: &[(&str, serde_json::Value)]) -> Url {
        let mut url = self.query_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query);
            for (name, value) in params {
                pairs.append_pair(&format!("${name}"), &value.to_string());
            }
        }
        url
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
