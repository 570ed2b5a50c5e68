//! Deadline Helpers
//!
//! Wraps async operations in `tokio::time::timeout` and converts an elapsed
//! deadline into [`LensError::Timeout`]. Dropping the inner future cancels any
//! in-flight provider calls and link probes.
//!
//! ```ignore
//! let report = with_timeout(
//!     Duration::from_secs(120),
//!     fetch_and_analyze(url),
//!     "repository inspection",
//! ).await?;
//! ```

use std::future::Future;
use std::time::Duration;

use crate::types::{LensError, Result};

/// Execute a fallible async operation with a timeout
pub async fn with_timeout<T, F>(timeout: Duration, future: F, operation_name: &str) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, future).await {
        Ok(result) => result,
        Err(_) => Err(LensError::timeout(operation_name, timeout)),
    }
}

/// Execute an infallible async operation with a timeout
pub async fn with_timeout_map<T, F>(timeout: Duration, future: F, operation_name: &str) -> Result<T>
where
    F: Future<Output = T>,
{
    tokio::time::timeout(timeout, future)
        .await
        .map_err(|_| LensError::timeout(operation_name, timeout))
}
