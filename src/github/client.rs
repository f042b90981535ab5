// file: src/github/client.rs
// description: authenticated GitHub REST client for listing and updating repositories
// reference: https://docs.github.com/en/rest/repos/repos

use crate::config::GithubConfig;
use crate::error::{Result, VisibilityError};
use crate::github::fetcher::RepositoryHost;
use crate::models::{Repository, Visibility};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const CLIENT_USER_AGENT: &str = concat!("ft-visibility/", env!("CARGO_PKG_VERSION"));

pub struct GithubClient {
    client: Client,
    api_base: String,
    per_page: u32,
    owner_type: String,
}

impl GithubClient {
    pub fn new(config: &GithubConfig, token: &str) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
            VisibilityError::Config("GitHub token contains invalid characters".to_string())
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            per_page: config.per_page,
            owner_type: config.owner_type.clone(),
        })
    }

    pub async fn list_repositories_page(&self, page: u32) -> Result<Vec<Repository>> {
        let url = format!("{}/user/repos", self.api_base);
        let page = page.to_string();
        let per_page = self.per_page.to_string();

        debug!("GET {} page={} per_page={}", url, page, per_page);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("page", page.as_str()),
                ("per_page", per_page.as_str()),
                ("type", self.owner_type.as_str()),
            ])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VisibilityError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            VisibilityError::Serialization(format!("Failed to parse repository list: {}", e))
        })
    }

    pub async fn update_visibility(&self, full_name: &str, visibility: Visibility) -> bool {
        let url = format!("{}/repos/{}", self.api_base, full_name);
        let body = json!({ "private": visibility.is_private() });

        debug!("PATCH {} private={}", url, visibility.is_private());

        match self.client.patch(&url).json(&body).send().await {
            Ok(response) if response.status() == StatusCode::OK => true,
            Ok(response) => {
                warn!(
                    "Updating {} returned HTTP {}",
                    full_name,
                    response.status().as_u16()
                );
                false
            }
            Err(e) => {
                warn!("Updating {} failed: {}", full_name, e);
                false
            }
        }
    }
}

impl RepositoryHost for GithubClient {
    async fn list_page(&self, page: u32) -> Result<Vec<Repository>> {
        self.list_repositories_page(page).await
    }

    async fn set_visibility(&self, full_name: &str, visibility: Visibility) -> bool {
        self.update_visibility(full_name, visibility).await
    }
}
