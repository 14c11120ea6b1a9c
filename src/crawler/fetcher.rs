//! HTTP fetcher implementation
//!
//! Every call here performs exactly one request. Non-success statuses become
//! [`HarvestError::Transport`] carrying the status and its reason phrase;
//! connection and body failures become [`HarvestError::Http`].

use crate::config::TransportConfig;
use crate::crawler::DocumentReference;
use crate::query::QueryRequest;
use crate::HarvestError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::{Client, RequestBuilder};
use std::time::Duration;

/// Builds an HTTP session with cookies, compression and the configured
/// identity headers
///
/// # Example
///
/// ```no_run
/// use resume_harvest::config::TransportConfig;
/// use resume_harvest::crawler::build_http_client;
///
/// let client = build_http_client(&TransportConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &TransportConfig) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    match HeaderValue::from_str(&config.accept_language) {
        Ok(value) => {
            headers.insert(ACCEPT_LANGUAGE, value);
        }
        Err(_) => tracing::warn!(
            "Ignoring invalid accept-language header {:?}",
            config.accept_language
        ),
    }

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .cookie_store(true)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one list page and returns its body
pub async fn fetch_list_page(client: &Client, request: &QueryRequest) -> Result<String, HarvestError> {
    let builder = match request {
        QueryRequest::Get { url } => client.get(url.clone()),
        QueryRequest::Post { url, body } => client.post(url.clone()).json(body),
    };
    send(builder, request.url().as_str()).await
}

/// Fetches one résumé document and returns its body
pub async fn fetch_document(
    client: &Client,
    reference: &DocumentReference,
) -> Result<String, HarvestError> {
    send(client.get(reference.as_str()), reference.as_str()).await
}

async fn send(builder: RequestBuilder, url: &str) -> Result<String, HarvestError> {
    let response = builder.send().await.map_err(|source| HarvestError::Http {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(HarvestError::Transport {
            url: url.to_string(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
        });
    }

    response.text().await.map_err(|source| HarvestError::Http {
        url: url.to_string(),
        source,
    })
}
