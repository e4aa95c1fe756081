//! Clash Royale API client.
//!
//! All api.clashroyale.com specifics are isolated in this module so endpoint
//! changes are easy to fix. The bearer token is passed in at construction;
//! there is no process-wide credential.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::models::{
    CatalogCard, CurrentRiverRace, PlayerProfile, RiverRaceLogEntry, UpcomingChest,
};
use crate::normalize_tag;

/// Errors that can occur talking to the API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("API token rejected (check the token and its allowed IP addresses)")]
    InvalidToken,

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API base URL
    pub base_url: String,

    /// Bearer token from the Clash Royale developer portal
    pub token: String,

    /// Request timeout
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.clashroyale.com/v1".to_string(),
            token: String::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ApiConfig {
    /// Config with the given token and defaults for everything else.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }
}

/// Wrapper for the API's list envelope: `{"items": [...]}`.
#[derive(Debug, Deserialize)]
struct ItemsResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

/// The data a report needs, as one fetch per payload. Implemented by
/// [`RoyaleClient`]; test doubles implement it to drive reports offline.
#[async_trait]
pub trait DataSource {
    /// Fetch a player's full record, collection included.
    async fn fetch_player(&self, tag: &str) -> Result<PlayerProfile, ClientError>;

    /// Fetch a player's upcoming chest cycle.
    async fn fetch_upcoming_chests(&self, tag: &str) -> Result<Vec<UpcomingChest>, ClientError>;

    /// Fetch every card in the game.
    async fn fetch_card_catalog(&self) -> Result<Vec<CatalogCard>, ClientError>;

    /// Fetch a clan's finished river races.
    async fn fetch_war_log(&self, clan_tag: &str) -> Result<Vec<RiverRaceLogEntry>, ClientError>;

    /// Fetch a clan's in-progress river race.
    async fn fetch_current_war(&self, clan_tag: &str) -> Result<CurrentRiverRace, ClientError>;
}

/// Authenticated client for api.clashroyale.com.
pub struct RoyaleClient {
    client: Client,
    base_url: String,
}

impl RoyaleClient {
    /// Create a client with the token baked into the default headers.
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let bearer = format!("Bearer {}", config.token);
        let mut auth = HeaderValue::from_str(&bearer)
            .map_err(|_| ClientError::InvalidUrl("token contains invalid characters".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET a path under the API base and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url_str = format!("{}{}", self.base_url, path);
        let url = Url::parse(&url_str)
            .map_err(|e| ClientError::InvalidUrl(format!("Bad API URL {}: {}", url_str, e)))?;

        debug!("GET {}", url);
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return Err(ClientError::RateLimited {
                retry_after_secs: retry_after,
            });
        }
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(ClientError::InvalidToken);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                resource: path.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl DataSource for RoyaleClient {
    async fn fetch_player(&self, tag: &str) -> Result<PlayerProfile, ClientError> {
        info!("Fetching player {}", tag);
        self.get_json(&format!("/players/{}", normalize_tag(tag)))
            .await
    }

    async fn fetch_upcoming_chests(&self, tag: &str) -> Result<Vec<UpcomingChest>, ClientError> {
        info!("Fetching upcoming chests for {}", tag);
        let response: ItemsResponse<UpcomingChest> = self
            .get_json(&format!("/players/{}/upcomingchests", normalize_tag(tag)))
            .await?;
        Ok(response.items)
    }

    async fn fetch_card_catalog(&self) -> Result<Vec<CatalogCard>, ClientError> {
        info!("Fetching card catalog");
        let response: ItemsResponse<CatalogCard> = self.get_json("/cards").await?;
        Ok(response.items)
    }

    async fn fetch_war_log(&self, clan_tag: &str) -> Result<Vec<RiverRaceLogEntry>, ClientError> {
        info!("Fetching river race log for {}", clan_tag);
        let response: ItemsResponse<RiverRaceLogEntry> = self
            .get_json(&format!("/clans/{}/riverracelog", normalize_tag(clan_tag)))
            .await?;
        Ok(response.items)
    }

    async fn fetch_current_war(&self, clan_tag: &str) -> Result<CurrentRiverRace, ClientError> {
        info!("Fetching current river race for {}", clan_tag);
        self.get_json(&format!(
            "/clans/{}/currentriverrace",
            normalize_tag(clan_tag)
        ))
        .await
    }
}
