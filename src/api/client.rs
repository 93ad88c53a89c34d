//! Vimeo API HTTP client.

use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};

use crate::api::paging::PagingSource;
use crate::api::types::{UserInfo, VideosPage};
use crate::error::{Error, Result};

/// Vimeo API base URL.
const API_BASE: &str = "https://api.vimeo.com";

/// Vimeo API version the client speaks.
const API_VERSION: &str = "application/vnd.vimeo.*+json;version=3.4";

/// Vimeo API client with bearer-token authentication.
pub struct VimeoApi {
    client: Client,
    base_url: String,
    token: String,
}

impl VimeoApi {
    /// Create a new API client.
    pub fn new(token: String) -> Result<Self> {
        Self::with_base_url(token, API_BASE.to_string())
    }

    /// Create a client against a non-default base URL (used by tests).
    pub fn with_base_url(token: String, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("vimeo-exporter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Make an authenticated GET request.
    async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("bearer {}", self.token))
            .header(header::ACCEPT, API_VERSION)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Authentication(format!("HTTP {}: {}", status, body)));
        }

        if !status.is_success() {
            return Err(Error::Api(format!("HTTP {} for {}", status, path)));
        }

        Ok(response)
    }

    /// Fetch account info for a username.
    pub async fn get_user(&self, username: &str) -> Result<UserInfo> {
        let path = format!("/users/{}", username);
        let response = self.get(&path).await;

        match response {
            Err(Error::Api(msg)) if msg.starts_with("HTTP 404") => {
                Err(Error::AccountNotFound(username.to_string()))
            }
            Err(e) => Err(e),
            Ok(response) => Ok(response.json().await?),
        }
    }
}

#[async_trait]
impl PagingSource for VimeoApi {
    async fn fetch_page(&self, path: &str) -> Result<VideosPage> {
        let response = self.get(path).await?;
        Ok(response.json().await?)
    }
}
