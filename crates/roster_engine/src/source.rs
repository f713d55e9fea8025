use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Url;
use roster_logging::roster_debug;
use serde::de::DeserializeOwned;

use crate::{decode_collection, FailureKind, FetchError, Group, OwnerId, Subscription};

const OWNER_PLACEHOLDER: &str = "{owner}";

#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub base_url: String,
    /// Path of the item collection, relative to `base_url`.
    pub items_path: String,
    /// Path of the membership collection; `{owner}` is replaced by the owner id.
    pub memberships_path: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    pub bearer_token: Option<String>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            items_path: "groups".to_string(),
            memberships_path: "subscriptions/user/{owner}".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
            bearer_token: None,
        }
    }
}

/// The two collection fetches the list synchronizer depends on.
#[async_trait::async_trait]
pub trait CollectionSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Group>, FetchError>;

    async fn fetch_memberships(&self, owner_id: OwnerId) -> Result<Vec<Subscription>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSource {
    settings: SourceSettings,
}

impl ReqwestSource {
    pub fn new(settings: SourceSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    /// Resolves `path` against the base url, which is treated as a directory.
    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        let mut base = self.settings.base_url.trim_end_matches('/').to_string();
        base.push('/');
        Url::parse(&base)
            .and_then(|base| base.join(path.trim_start_matches('/')))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn get_collection<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, FetchError> {
        let client = self.build_client()?;
        let mut request = client
            .get(url.clone())
            .header(ACCEPT, "application/hal+json, application/json");
        if let Some(token) = self.settings.bearer_token.as_deref() {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        roster_debug!("GET {}", url);
        let response = request.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            body.extend_from_slice(&chunk);
        }

        decode_collection(&body)
    }
}

#[async_trait::async_trait]
impl CollectionSource for ReqwestSource {
    async fn fetch_all(&self) -> Result<Vec<Group>, FetchError> {
        let url = self.endpoint(&self.settings.items_path)?;
        self.get_collection(url).await
    }

    async fn fetch_memberships(&self, owner_id: OwnerId) -> Result<Vec<Subscription>, FetchError> {
        let path = self
            .settings
            .memberships_path
            .replace(OWNER_PLACEHOLDER, &owner_id.to_string());
        let url = self.endpoint(&path)?;
        self.get_collection(url).await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::Decode, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
