//! Retrying Link Prober
//!
//! Bounded retry loop with exponential backoff and attempt accounting.
//!
//! ## Strategy
//!
//! 1. Dispatch a GET and record the attempt
//! 2. 2xx resolves as working
//! 3. Any other status or a transport error is retried (if GET is a retryable method)
//! 4. Delay grows by `factor` from `min_delay`, capped at `max_delay`
//! 5. After `max_retries` retries the last failure resolves as not working
//!
//! Cancellation is left to the caller: dropping the future (for example on a
//! request deadline) stops the loop between attempts or mid-request.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::{Duration, Instant};

use backon::{ExponentialBuilder, Retryable};
use reqwest::Method;
use tracing::{debug, info, instrument, warn};

use super::transport::{ProbeFailure, ProbeTransport, ReqwestTransport};
use super::{LinkCheckResult, ProbedLink, ResponseTime};
use crate::config::ProbeSettings;
use crate::constants::probe as probe_constants;
use crate::types::{LensError, Result};

/// Retry and backoff settings for the prober
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Retries after the initial attempt
    pub max_retries: usize,
    /// Delay before the first retry
    pub min_delay: Duration,
    /// Upper bound for any single delay
    pub max_delay: Duration,
    /// Backoff multiplier
    pub factor: f32,
    /// Methods that may be retried automatically
    pub retryable_methods: Vec<Method>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            max_retries: probe_constants::MAX_RETRIES,
            min_delay: Duration::from_millis(probe_constants::MIN_DELAY_MS),
            max_delay: Duration::from_millis(probe_constants::MAX_DELAY_MS),
            factor: probe_constants::BACKOFF_FACTOR,
            retryable_methods: vec![Method::GET, Method::HEAD, Method::OPTIONS],
        }
    }
}

impl ProbeConfig {
    /// Build from the `[probe]` configuration section
    pub fn from_settings(settings: &ProbeSettings) -> Result<Self> {
        let retryable_methods = settings
            .retry_methods
            .iter()
            .map(|name| {
                Method::from_bytes(name.to_uppercase().as_bytes()).map_err(|_| {
                    LensError::Config(format!("Invalid HTTP method in probe.retry_methods: {}", name))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            max_retries: settings.max_retries,
            min_delay: Duration::from_millis(settings.min_delay_ms),
            max_delay: Duration::from_millis(settings.max_delay_ms),
            factor: settings.factor,
            retryable_methods,
        })
    }

    /// Retries allowed for `method`
    pub fn retries_for(&self, method: &Method) -> usize {
        if self.retryable_methods.contains(method) {
            self.max_retries
        } else {
            0
        }
    }

    fn backoff(&self, method: &Method) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(self.min_delay)
            .with_max_delay(self.max_delay)
            .with_factor(self.factor)
            .with_max_times(self.retries_for(method))
    }
}

/// Liveness checker for deployment links
pub struct LinkProber<T = ReqwestTransport> {
    transport: T,
    config: ProbeConfig,
}

impl LinkProber<ReqwestTransport> {
    /// Prober over reqwest with the given per-attempt timeout
    pub fn with_reqwest(
        config: ProbeConfig,
        attempt_timeout: Duration,
        user_agent: &str,
    ) -> Result<Self> {
        Ok(Self::new(
            ReqwestTransport::new(attempt_timeout, user_agent)?,
            config,
        ))
    }
}

impl<T: ProbeTransport> LinkProber<T> {
    pub fn new(transport: T, config: ProbeConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Probe `url` with GET, retrying on non-2xx and transport errors
    #[instrument(skip(self))]
    pub async fn probe(&self, url: &str) -> LinkCheckResult {
        let tries = AtomicU32::new(0);
        let responded = AtomicBool::new(false);
        let started = Instant::now();

        let outcome = {
            let (tries, responded, transport) = (&tries, &responded, &self.transport);
            (move || async move {
                let attempt = tries.fetch_add(1, Ordering::SeqCst) + 1;
                debug!(url, attempt, "Probe attempt");

                match transport.get(url).await {
                    Ok(status) => {
                        responded.store(true, Ordering::SeqCst);
                        if (200..300).contains(&status) {
                            Ok(status)
                        } else {
                            Err(ProbeFailure::Status(status))
                        }
                    }
                    Err(failure) => {
                        if failure.got_response() {
                            responded.store(true, Ordering::SeqCst);
                        }
                        Err(failure)
                    }
                }
            })
            .retry(self.config.backoff(&Method::GET))
            .sleep(tokio::time::sleep)
            .notify(|failure: &ProbeFailure, delay: Duration| {
                debug!(
                    url,
                    error = %failure,
                    delay_ms = delay.as_millis() as u64,
                    "Retrying probe after backoff"
                );
            })
            .await
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;
        let tries = tries.load(Ordering::SeqCst);
        let response_time_ms = if responded.load(Ordering::SeqCst) {
            ResponseTime::Measured(elapsed_ms)
        } else {
            ResponseTime::Unavailable
        };

        match outcome {
            Ok(status) => {
                info!(url, status, tries, elapsed_ms, "Link is live");
                LinkCheckResult {
                    working: true,
                    response_time_ms,
                    tries,
                }
            }
            Err(failure) => {
                warn!(url, tries, error = %failure, "Link check failed");
                LinkCheckResult {
                    working: false,
                    response_time_ms,
                    tries,
                }
            }
        }
    }

    /// Probe `url` and keep the URL alongside the result
    pub async fn probe_link(&self, url: &str) -> ProbedLink {
        ProbedLink::new(url, self.probe(url).await)
    }
}
