//! repolens - Repository README Inspector
//!
//! Looks up a public repository, fetches its README and extracts structured
//! signals from loosely formatted Markdown.
//!
//! ## Core Features
//!
//! - **Key-Value Parsing**: `key: value` / `key = value` lines with case-insensitive lookups
//! - **Heading Segments**: flat level 1-5 sections with body text
//! - **Project Signals**: declared project type, deployment links, section checklist
//! - **Link Probing**: liveness checks with bounded exponential-backoff retry
//!
//! ## Quick Start
//!
//! ```ignore
//! use repolens::{Config, RepoInspector};
//!
//! let inspector = RepoInspector::from_config(&Config::default())?;
//! let report = inspector.inspect("https://github.com/owner/repo").await?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```
//!
//! ## Modules
//!
//! - [`readme`]: README parsers and signal aggregation
//! - [`probe`]: Link liveness checks
//! - [`github`]: Hosting provider client
//! - [`inspect`]: Request pipeline
//! - [`server`]: HTTP surface

pub mod cli;
pub mod config;
pub mod constants;
pub mod github;
pub mod inspect;
pub mod probe;
pub mod readme;
pub mod server;
pub mod timeout;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::error::{LensError, Result};

// Pipeline
pub use github::{GitHubClient, RepoPath};
pub use inspect::{RepoInspector, RepoReport};

// =============================================================================
// Signal Re-exports
// =============================================================================

pub use probe::{LinkCheckResult, LinkProber, ProbeConfig, ProbedLink, ResponseTime};
pub use readme::{
    DeploymentDetails, HeaderChecklist, HeadingSegment, KeyValueEntry, ProjectType, ReadmeSignals,
};

pub use timeout::with_timeout;
