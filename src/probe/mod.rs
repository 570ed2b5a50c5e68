//! Link Liveness Probing
//!
//! Checks deployment URLs with bounded retry and exponential backoff.
//! A probe never fails: every outcome resolves into a [`LinkCheckResult`].
//!
//! ## Modules
//!
//! - `transport`: HTTP seam (`ProbeTransport`) and its reqwest implementation
//! - `prober`: Retry loop with attempt accounting

mod prober;
mod transport;

pub use prober::{LinkProber, ProbeConfig};
pub use transport::{ProbeFailure, ProbeTransport, ReqwestTransport};

use serde::{Serialize, Serializer};
use std::fmt;

/// Wall-clock time of a probe, or a sentinel when nothing was measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseTime {
    Measured(u64),
    Unavailable,
}

impl ResponseTime {
    pub fn as_millis(&self) -> Option<u64> {
        match self {
            Self::Measured(ms) => Some(*ms),
            Self::Unavailable => None,
        }
    }
}

impl fmt::Display for ResponseTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Measured(ms) => write!(f, "{}ms", ms),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

// Serialized as a bare number, or the string "unavailable"
impl Serialize for ResponseTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Measured(ms) => serializer.serialize_u64(*ms),
            Self::Unavailable => serializer.serialize_str("unavailable"),
        }
    }
}

/// Outcome of a liveness probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkCheckResult {
    /// Final response status was 2xx
    pub working: bool,
    /// Time from first dispatch to final resolution
    pub response_time_ms: ResponseTime,
    /// Attempts made, including the initial one
    pub tries: u32,
}

/// A probed URL together with its check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbedLink {
    pub url: String,
    #[serde(flatten)]
    pub check: LinkCheckResult,
}

impl ProbedLink {
    pub fn new(url: impl Into<String>, check: LinkCheckResult) -> Self {
        Self {
            url: url.into(),
            check,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_time_serialization() {
        assert_eq!(
            serde_json::to_value(ResponseTime::Measured(42)).unwrap(),
            json!(42)
        );
        assert_eq!(
            serde_json::to_value(ResponseTime::Unavailable).unwrap(),
            json!("unavailable")
        );
    }

    #[test]
    fn test_response_time_display() {
        assert_eq!(ResponseTime::Measured(120).to_string(), "120ms");
        assert_eq!(ResponseTime::Unavailable.to_string(), "unavailable");
        assert_eq!(ResponseTime::Unavailable.as_millis(), None);
    }

    #[test]
    fn test_probed_link_flattens_check() {
        let link = ProbedLink::new(
            "https://api.example.com",
            LinkCheckResult {
                working: true,
                response_time_ms: ResponseTime::Measured(15),
                tries: 1,
            },
        );
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            json!({
                "url": "https://api.example.com",
                "working": true,
                "response_time_ms": 15,
                "tries": 1
            })
        );
    }
}
