use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::{AuthHeaders, ChargeRequest, ChargeResponse, TransactionResponse};
use crate::infrastructure::config::PushinPayConfig;
use crate::ports::{AccountLookupPort, ChargeGatewayPort, TransactionGatewayPort};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error};
use url::Url;

/// reqwest-backed implementation of every Pushin Pay port.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Clone)]
pub struct PushinPayAdapter {
    config: Arc<PushinPayConfig>,
    client: Client,
}

impl PushinPayAdapter {
    /// Builds a dedicated HTTP client from the config
    pub fn new(config: Arc<PushinPayConfig>) -> DomainResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            DomainError::ConfigurationError(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self { config, client })
    }

    /// Reuses a caller-configured HTTP client. The config timeout is ignored;
    /// timeouts are whatever `client` was built with.
    pub fn with_client(config: Arc<PushinPayConfig>, client: Client) -> Self {
        Self { config, client }
    }

    /// Base URL plus one percent-encoded path segment per entry.
    ///
    /// Dot segments (`.`, `..` and their `%2e` spellings) are rejected: URL
    /// normalisation would drop them and the call would hit another route.
    fn endpoint(&self, segments: &[&str]) -> DomainResult<Url> {
        if let Some(segment) = segments.iter().find(|s| is_dot_segment(s)) {
            return Err(DomainError::InvalidArgument(format!(
                "Path segment cannot be a dot segment: {:?}",
                segment
            )));
        }

        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                DomainError::ConfigurationError(format!(
                    "Base URL cannot carry a path: {}",
                    self.config.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// JSON defaults followed by the caller headers, which win on conflict
    fn build_headers(headers: &AuthHeaders) -> DomainResult<HeaderMap> {
        let mut map = HeaderMap::with_capacity(headers.len() + 2);
        map.insert(ACCEPT, HeaderValue::from_static("application/json"));
        map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in headers.iter() {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                DomainError::InvalidArgument(format!("Invalid header name: {}", name))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|_| {
                DomainError::InvalidArgument(format!("Invalid value for header {}", name))
            })?;
            map.insert(header_name, header_value);
        }

        Ok(map)
    }

    /// Sends the request and runs the response through [`Self::handle_errors`]
    async fn send(&self, request: RequestBuilder, passthrough: &[StatusCode]) -> DomainResult<Response> {
        let response = request.send().await?;
        Self::handle_errors(response, passthrough).await
    }

    /// Turns every non-success status not listed in `passthrough` into
    /// `RemoteCallFailure`, logging the body.
    async fn handle_errors(response: Response, passthrough: &[StatusCode]) -> DomainResult<Response> {
        let status = response.status();
        if status.is_success() || passthrough.contains(&status) {
            return Ok(response);
        }

        Err(Self::remote_failure(response).await)
    }

    async fn remote_failure(response: Response) -> DomainError {
        let status = response.status();
        let path = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();
        error!(
            "Pushin Pay API error {} on {}: {}",
            status.as_u16(),
            path,
            body
        );
        DomainError::RemoteCallFailure {
            status: status.as_u16(),
            body,
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> DomainResult<T> {
        let body = response.text().await?;
        debug!("Pushin Pay response body: {}", body);
        Ok(serde_json::from_str(&body)?)
    }
}

fn is_dot_segment(segment: &str) -> bool {
    let lowered = segment.to_ascii_lowercase();
    matches!(
        lowered.as_str(),
        "." | "%2e" | ".." | ".%2e" | "%2e." | "%2e%2e"
    )
}

#[async_trait]
impl AccountLookupPort for PushinPayAdapter {
    async fn exists_by_account_id(
        &self,
        headers: &AuthHeaders,
        account_id: &str,
    ) -> DomainResult<bool> {
        let url = self.endpoint(&["api", "accounts", "check", account_id])?;
        debug!("Checking account existence: {}", account_id);

        let request = self.client.get(url).headers(Self::build_headers(headers)?);
        let response = self.send(request, &[StatusCode::NOT_FOUND]).await?;

        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            _ => Err(Self::remote_failure(response).await),
        }
    }
}

#[async_trait]
impl ChargeGatewayPort for PushinPayAdapter {
    async fn create_charge(
        &self,
        headers: &AuthHeaders,
        request: &ChargeRequest,
    ) -> DomainResult<ChargeResponse> {
        let url = self.endpoint(&["api", "pix", "cashIn"])?;

        let body = serde_json::to_string(request).map_err(DomainError::SerializationError)?;
        debug!("Pushin Pay charge request body: {}", body);

        let request = self
            .client
            .post(url)
            .headers(Self::build_headers(headers)?)
            .body(body);
        let response = self.send(request, &[]).await?;

        Self::decode(response).await
    }
}

#[async_trait]
impl TransactionGatewayPort for PushinPayAdapter {
    async fn retrieve_transaction(
        &self,
        headers: &AuthHeaders,
        transaction_id: &str,
    ) -> DomainResult<TransactionResponse> {
        let url = self.endpoint(&["api", "transactions", transaction_id])?;
        debug!("Retrieving transaction: {}", transaction_id);

        let request = self.client.get(url).headers(Self::build_headers(headers)?);
        let response = self.send(request, &[]).await?;

        Self::decode(response).await
    }
}
