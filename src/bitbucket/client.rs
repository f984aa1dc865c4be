use crate::config::BitbucketSettings;
use crate::errors::{ProviderError, Result};
use async_trait::async_trait;
use base64::Engine;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Method,
};
use std::time::Duration;
use tracing::{debug, trace};

/// HTTP capability the repository resource issues its calls through
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send `method` to the server-relative `path` with an optional JSON body.
    ///
    /// Every HTTP status is returned as a response; only transport and
    /// body-read failures are errors.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse>;
}

/// A fully-read HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, lossy, for error messages
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Bitbucket Server API client
pub struct BitbucketClient {
    client: Client,
    base_url: String,
}

impl BitbucketClient {
    /// Create a new Bitbucket client
    pub fn new(settings: &BitbucketSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let auth_header = match (&settings.username, &settings.token) {
            (Some(username), Some(token)) => {
                let auth_string = format!("{username}:{token}");
                let auth_encoded = base64::engine::general_purpose::STANDARD.encode(auth_string);
                format!("Basic {auth_encoded}")
            }
            (None, Some(token)) => format!("Bearer {token}"),
            _ => {
                return Err(ProviderError::config(
                    "Bitbucket authentication credentials not configured",
                ))
            }
        };

        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_header)
                .map_err(|e| ProviderError::config(format!("Invalid auth header: {e}")))?,
        );

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| ProviderError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: settings.url.clone(),
        })
    }

    /// Absolute URL for a server-relative path
    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl HttpClient for BitbucketClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse> {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut builder = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ProviderError::request(format!("{method} request failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ProviderError::body_read(e.to_string()))?;

        trace!("Response {}: {}", status, String::from_utf8_lossy(&body));

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
