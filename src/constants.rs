//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Link probe constants
pub mod probe {
    /// Retries after the initial attempt (4 attempts total)
    pub const MAX_RETRIES: usize = 3;

    /// Delay before the first retry (milliseconds)
    pub const MIN_DELAY_MS: u64 = 1000;

    /// Maximum delay between retries (milliseconds)
    pub const MAX_DELAY_MS: u64 = 8000;

    /// Backoff multiplier
    pub const BACKOFF_FACTOR: f32 = 2.0;

    /// Timeout for a single probe attempt (seconds)
    pub const ATTEMPT_TIMEOUT_SECS: u64 = 10;
}

/// Hosting provider constants
pub mod github {
    /// Public REST API base
    pub const API_BASE: &str = "https://api.github.com";

    /// Media type requested from the API
    pub const ACCEPT: &str = "application/vnd.github+json";

    /// README file names, tried in order
    pub const README_VARIANTS: [&str; 3] = ["README.md", "readme.md", "Readme.md"];

    /// Request timeout (seconds)
    pub const TIMEOUT_SECS: u64 = 30;
}

/// HTTP server constants
pub mod server {
    pub const DEFAULT_HOST: &str = "0.0.0.0";

    pub const DEFAULT_PORT: u16 = 3000;

    /// Directory served as static files (and the `/try` page)
    pub const STATIC_DIR: &str = "public";

    /// Overall deadline for one inspection request (seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 120;
}

/// README heading names checked by the header checklist
pub mod headings {
    pub const PROJECT_TYPE: &str = "Project Type";
    pub const DEPLOYED_APP: &str = "Deployed App";
    pub const VIDEO_WALKTHROUGH: &str = "Video Walkthrough";
    pub const TECHNOLOGY_STACK: &str = "Technology Stack";
    pub const GETTING_STARTED: &str = "Getting started";
    pub const FEATURES: &str = "Features";
}
