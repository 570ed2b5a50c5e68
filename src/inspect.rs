//! Repository Inspection Pipeline
//!
//! metadata → README lookup → signal extraction → [`RepoReport`].
//!
//! Every call builds its data fresh; the inspector itself only holds the
//! HTTP clients, so one instance serves concurrent requests.

use serde::{Serialize, Serializer};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

use crate::config::Config;
use crate::github::{GitHubClient, RepoMetadata, RepoPath};
use crate::probe::{LinkProber, ProbeConfig, ProbeTransport, ReqwestTransport};
use crate::readme::{self, DeploymentDetails, HeaderChecklist, ProjectType, ReadmeSignals};
use crate::timeout::with_timeout;
use crate::types::Result;

/// Response document for one repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoReport {
    pub name: String,
    pub owner: String,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub language: Option<String>,
    pub readme_exists: bool,
    #[serde(serialize_with = "or_false")]
    pub project_type: Option<ProjectType>,
    #[serde(serialize_with = "or_false")]
    pub deployment_details: Option<DeploymentDetails>,
    #[serde(serialize_with = "or_false")]
    pub heading_details: Option<HeaderChecklist>,
}

impl RepoReport {
    pub fn new(metadata: RepoMetadata, signals: Option<ReadmeSignals>) -> Self {
        let readme_exists = signals.is_some();
        let (project_type, deployment_details, heading_details) = match signals {
            Some(signals) => (
                Some(signals.project_type),
                Some(signals.deployment_details),
                Some(signals.heading_details),
            ),
            None => (None, None, None),
        };

        Self {
            name: metadata.name,
            owner: metadata.owner.login,
            stars: metadata.stargazers_count,
            forks: metadata.forks_count,
            open_issues: metadata.open_issues_count,
            language: metadata.language,
            readme_exists,
            project_type,
            deployment_details,
            heading_details,
        }
    }
}

/// Derived fields read `false` when there was no README to derive them from
fn or_false<T: Serialize, S: Serializer>(
    value: &Option<T>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match value {
        Some(value) => value.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}

pub struct RepoInspector<T = ReqwestTransport> {
    github: GitHubClient,
    prober: Arc<LinkProber<T>>,
    request_timeout: Duration,
}

impl RepoInspector<ReqwestTransport> {
    /// Wire the production clients from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let github = GitHubClient::new(&config.github)?;
        let prober = LinkProber::with_reqwest(
            ProbeConfig::from_settings(&config.probe)?,
            config.probe.attempt_timeout(),
            &config.github.user_agent,
        )?;

        Ok(Self::new(github, Arc::new(prober), config.request.timeout()))
    }
}

impl<T: ProbeTransport> RepoInspector<T> {
    pub fn new(github: GitHubClient, prober: Arc<LinkProber<T>>, request_timeout: Duration) -> Self {
        Self {
            github,
            prober,
            request_timeout,
        }
    }

    /// Inspect a repository URL under the request deadline
    #[instrument(skip(self))]
    pub async fn inspect(&self, url: &str) -> Result<RepoReport> {
        with_timeout(self.request_timeout, self.run(url), "repository inspection").await
    }

    async fn run(&self, url: &str) -> Result<RepoReport> {
        let path = RepoPath::parse(url)?;
        let metadata = self.github.repository(&path).await?;

        let signals = match self.github.readme(&path).await? {
            Some(readme) => Some(readme::analyze(&readme.text, &self.prober).await),
            None => None,
        };

        let report = RepoReport::new(metadata, signals);
        info!(
            repo = %path,
            readme = report.readme_exists,
            project_type = ?report.project_type,
            "Inspection complete"
        );
        Ok(report)
    }
}
