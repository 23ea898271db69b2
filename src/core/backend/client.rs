//! HTTP client for the restaurant backend REST API.
//!
//! [`BackendClient`] wraps a `reqwest::Client` configured once with the base
//! address, timeout and headers. Each verb performs exactly one round trip and
//! returns the raw response on 2xx; anything else becomes a
//! [`BackendError`]. Decoding the body is a separate step
//! ([`BackendClient::decode`]).

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::{BackendError, BackendResult};
use crate::core::config::BackendConfig;

/// Client for the restaurant backend.
///
/// Cheap to share behind an `Arc`; it holds no per-request state.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
    timeout: Duration,
    authenticated: bool,
}

impl BackendClient {
    /// Build a client from the process configuration.
    pub fn new(config: &BackendConfig) -> BackendResult<Self> {
        Self::builder(config).build()
    }

    /// Start a builder seeded with the process configuration.
    ///
    /// Values set on the builder take precedence over `config`.
    pub fn builder(config: &BackendConfig) -> BackendClientBuilder {
        BackendClientBuilder {
            defaults: config.clone(),
            base_url: None,
            timeout: None,
            api_key: None,
        }
    }

    /// The backend base address, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request timeout applied to every call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether requests carry a bearer credential.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// GET `path`, with `query` URL-encoded when given.
    pub async fn fetch<Q>(&self, path: &str, query: Option<&Q>) -> BackendResult<Response>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.url_with_query(path, query)?;
        debug!("GET {}", url);
        self.send(self.http.request(Method::GET, url)).await
    }

    /// POST `path`, with `body` sent as JSON when given.
    pub async fn create<B>(&self, path: &str, body: Option<&B>) -> BackendResult<Response>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(Method::POST, path, body).await
    }

    /// PUT `path`, with `body` sent as JSON when given.
    pub async fn replace<B>(&self, path: &str, body: Option<&B>) -> BackendResult<Response>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(Method::PUT, path, body).await
    }

    /// DELETE `path`.
    pub async fn remove(&self, path: &str) -> BackendResult<Response> {
        let url = self.url(path);
        debug!("DELETE {}", url);
        self.send(self.http.request(Method::DELETE, url)).await
    }

    /// Decode a successful response body as JSON.
    pub async fn decode<T: DeserializeOwned>(response: Response) -> BackendResult<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn send_with_body<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> BackendResult<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(request).await
    }

    async fn send(&self, request: RequestBuilder) -> BackendResult<Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!("Backend answered {} with body: {}", status, body);
        Err(BackendError::status_error(status.as_u16(), body))
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn url_with_query<Q>(&self, path: &str, query: Option<&Q>) -> BackendResult<String>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        let Some(query) = query else {
            return Ok(url);
        };

        let encoded = serde_urlencoded::to_string(query)
            .map_err(|e| BackendError::Request(format!("invalid query parameters: {}", e)))?;

        if encoded.is_empty() {
            Ok(url)
        } else {
            Ok(format!("{}?{}", url, encoded))
        }
    }
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("authenticated", &self.authenticated)
            .finish()
    }
}

/// Builder for [`BackendClient`] with per-field overrides.
pub struct BackendClientBuilder {
    defaults: BackendConfig,
    base_url: Option<String>,
    timeout: Option<Duration>,
    api_key: Option<String>,
}

impl BackendClientBuilder {
    /// Override the backend base address.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the bearer credential.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Build the client.
    ///
    /// Fails when the base address is not an absolute URL or the credential
    /// cannot be used as a header value.
    pub fn build(self) -> BackendResult<BackendClient> {
        let base_url = self.base_url.unwrap_or(self.defaults.base_url);
        Url::parse(&base_url)
            .map_err(|e| BackendError::config(format!("invalid base URL '{}': {}", base_url, e)))?;

        let timeout = self
            .timeout
            .unwrap_or_else(|| Duration::from_secs(self.defaults.timeout_secs));
        let api_key = self.api_key.or(self.defaults.api_key);

        let headers = default_headers(api_key.as_deref())?;

        let http = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| BackendError::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(BackendClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            authenticated: api_key.is_some(),
        })
    }
}

/// Headers sent with every backend request.
pub fn default_headers(api_key: Option<&str>) -> BackendResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(key) = api_key {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", key))
            .map_err(|_| BackendError::config("API key contains invalid header characters"))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BackendConfig {
        BackendConfig {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
            api_key: None,
        }
    }

    #[test]
    fn test_headers_without_credential() {
        let headers = default_headers(None).unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_headers_with_credential() {
        let headers = default_headers(Some("secret-token")).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer secret-token");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
    }

    #[test]
    fn test_headers_reject_invalid_credential() {
        let result = default_headers(Some("bad\nkey"));
        assert!(matches!(result, Err(BackendError::Config(_))));
    }

    #[test]
    fn test_builder_falls_back_to_config() {
        let client = BackendClient::new(&config()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.timeout(), Duration::from_secs(30));
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_builder_overrides_take_precedence() {
        let client = BackendClient::builder(&config())
            .base_url("http://backend.internal:9000/")
            .timeout(Duration::from_secs(5))
            .api_key("override")
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://backend.internal:9000");
        assert_eq!(client.timeout(), Duration::from_secs(5));
        assert!(client.is_authenticated());
    }

    #[test]
    fn test_builder_rejects_relative_base_url() {
        let result = BackendClient::builder(&config()).base_url("localhost").build();
        assert!(matches!(result, Err(BackendError::Config(_))));
    }

    #[test]
    fn test_url_joining() {
        let client = BackendClient::new(&config()).unwrap();
        assert_eq!(client.url("/orders/1"), "http://localhost:8080/orders/1");
        assert_eq!(client.url("health"), "http://localhost:8080/health");
    }

    #[test]
    fn test_query_omits_absent_fields() {
        #[derive(Serialize)]
        struct Query {
            #[serde(skip_serializing_if = "Option::is_none")]
            category: Option<&'static str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_available: Option<bool>,
        }

        let client = BackendClient::new(&config()).unwrap();

        let url = client
            .url_with_query(
                "/menu-items/",
                Some(&Query {
                    category: Some("dessert"),
                    is_available: None,
                }),
            )
            .unwrap();
        assert_eq!(url, "http://localhost:8080/menu-items/?category=dessert");

        let url = client
            .url_with_query(
                "/menu-items/",
                Some(&Query {
                    category: None,
                    is_available: None,
                }),
            )
            .unwrap();
        assert_eq!(url, "http://localhost:8080/menu-items/");
    }

    #[test]
    fn test_debug_does_not_leak_credential() {
        let client = BackendClient::builder(&config())
            .api_key("super_secret_key")
            .build()
            .unwrap();
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("super_secret_key"));
        assert!(debug_str.contains("authenticated: true"));
    }
}
