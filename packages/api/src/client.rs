//! HTTP transport shared by the auth and notes endpoints.

use reqwest::{Client, Response, Url};
use serde::Deserialize;

use crate::error::{ApiError, Result};

/// Connection to a notes server.
///
/// Cheap to clone; clones share the underlying connection pool. The client
/// holds no credentials: note endpoints receive the bearer token explicitly
/// on every call.
#[derive(Clone, Debug)]
pub struct HttpClient {
    http: Client,
    base: Url,
}

impl HttpClient {
    /// Create a client for the server at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(ApiError::InvalidUrl("URL cannot be empty".into()));
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(ApiError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        let base = Url::parse(trimmed).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(std::time::Duration::from_secs(30))
            .connect_timeout(std::time::Duration::from_secs(10))
            .user_agent(format!("StickyNotes/{}", env!("CARGO_PKG_VERSION")));
        let http = builder.build().map_err(ApiError::Request)?;

        Ok(Self { http, base })
    }

    /// Server URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Build `<base>/<segments...>`, escaping each segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Extract the server's error message from a failed response.
///
/// Prefers a JSON `{ "error": ... }` body, then the raw body, then the status.
pub(crate) async fn server_message(response: Response) -> (u16, String) {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => body.error,
        Err(_) if !text.trim().is_empty() => text.trim().to_string(),
        Err(_) => format!("HTTP {status}"),
    };
    (status.as_u16(), message)
}

/// Decode a successful JSON body.
pub(crate) async fn parse_json<T: serde::de::DeserializeOwned>(
    response: Response,
    what: &str,
) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(format!("Failed to parse {what}: {e}")))
}
