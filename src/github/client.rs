//! GitHub REST Client
//!
//! Two calls per inspection: repository metadata, then the README contents
//! tried across filename variants until one decodes.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use super::{Readme, RepoMetadata, RepoPath};
use crate::config::GithubSettings;
use crate::constants::github;
use crate::types::{LensError, Result};

/// `GET /repos/{owner}/{repo}/contents/{path}` (fields we read)
#[derive(Debug, Deserialize)]
struct ContentFile {
    content: String,
}

/// Error body returned by the API
#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    api_base: String,
    readme_variants: Vec<String>,
}

impl GitHubClient {
    pub fn new(settings: &GithubSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(github::ACCEPT));

        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .user_agent(settings.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            readme_variants: settings.readme_variants.clone(),
        })
    }

    /// Fetch repository metadata. Any non-2xx status is an upstream error.
    #[instrument(skip(self), fields(repo = %path))]
    pub async fn repository(&self, path: &RepoPath) -> Result<RepoMetadata> {
        let url = format!("{}/repos/{}/{}", self.api_base, path.owner, path.repo);
        debug!("Requesting {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ApiMessage>()
                .await
                .ok()
                .map(|body| body.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            warn!(status = status.as_u16(), %message, "Repository lookup failed");
            return Err(LensError::upstream(status.as_u16(), message));
        }

        Ok(response.json().await?)
    }

    /// Find the README among the configured filename variants.
    ///
    /// Returns `Ok(None)` when no variant resolves.
    #[instrument(skip(self), fields(repo = %path))]
    pub async fn readme(&self, path: &RepoPath) -> Result<Option<Readme>> {
        for variant in &self.readme_variants {
            match self.fetch_contents(path, variant).await {
                Ok(text) => {
                    info!(file = %variant, bytes = text.len(), "README found");
                    return Ok(Some(Readme {
                        file_name: variant.clone(),
                        text,
                    }));
                }
                Err(e) => debug!(file = %variant, error = %e, "README variant unavailable"),
            }
        }

        info!("No README variant found");
        Ok(None)
    }

    async fn fetch_contents(&self, path: &RepoPath, file_name: &str) -> Result<String> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base, path.owner, path.repo, file_name
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LensError::upstream(
                status.as_u16(),
                format!("{} not available", file_name),
            ));
        }

        let file: ContentFile = response.json().await?;
        decode_content(&file.content)
    }
}

/// Decode a base64 `content` field (the API wraps it with newlines) into UTF-8
pub fn decode_content(encoded: &str) -> Result<String> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact)
        .map_err(|e| LensError::Decode(format!("invalid base64 content: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| LensError::Decode(format!("content is not UTF-8: {}", e)))
}
