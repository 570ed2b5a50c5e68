//! Hosting Provider Client
//!
//! Repository metadata and README retrieval over the GitHub REST API.
//!
//! ## Modules
//!
//! - `client`: HTTP client with README filename fallback

mod client;
#[cfg(test)]
pub(crate) mod mock;

pub use client::{GitHubClient, decode_content};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{LensError, Result};

/// `owner/repo` coordinates extracted from a repository URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPath {
    pub owner: String,
    pub repo: String,
}

impl RepoPath {
    /// Parse `https://github.com/{owner}/{repo}[.git][/...]`
    ///
    /// Extra path segments, query and fragment are ignored.
    pub fn parse(url: &str) -> Result<Self> {
        let parsed = url::Url::parse(url.trim())
            .map_err(|e| LensError::invalid_input(format!("Invalid repository URL '{}': {}", url, e)))?;

        let mut segments = parsed
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|segment| !segment.is_empty());

        let (Some(owner), Some(repo)) = (segments.next(), segments.next()) else {
            return Err(LensError::invalid_input(format!(
                "Repository URL must include owner and name: {}",
                url
            )));
        };

        let repo = repo.strip_suffix(".git").unwrap_or(repo);
        if repo.is_empty() {
            return Err(LensError::invalid_input(format!(
                "Repository URL must include owner and name: {}",
                url
            )));
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Subset of `GET /repos/{owner}/{repo}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoMetadata {
    pub name: String,
    pub owner: Owner,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// Decoded README document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readme {
    /// Variant that resolved (e.g. `readme.md`)
    pub file_name: String,
    pub text: String,
}
