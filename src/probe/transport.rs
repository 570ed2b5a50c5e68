//! Probe Transport
//!
//! The HTTP seam used by the prober. Production code goes through reqwest;
//! tests substitute scripted transports.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::types::Result;

/// Why a single probe attempt did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    /// Response arrived with a status outside 2xx
    Status(u16),
    /// No response: timeout, DNS failure, refused connection, bad URL
    Transport(String),
}

impl ProbeFailure {
    /// Whether the attempt reached the server
    pub fn got_response(&self) -> bool {
        matches!(self, Self::Status(_))
    }
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(status) => write!(f, "HTTP status {}", status),
            Self::Transport(message) => write!(f, "transport error: {}", message),
        }
    }
}

impl std::error::Error for ProbeFailure {}

/// Issues one GET and reports the response status
#[async_trait]
pub trait ProbeTransport: Send + Sync {
    async fn get(&self, url: &str) -> std::result::Result<u16, ProbeFailure>;
}

/// reqwest-backed transport with a per-attempt timeout
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(attempt_timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(attempt_timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ProbeTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> std::result::Result<u16, ProbeFailure> {
        self.client
            .get(url)
            .send()
            .await
            .map(|response| response.status().as_u16())
            .map_err(|e| ProbeFailure::Transport(e.to_string()))
    }
}
