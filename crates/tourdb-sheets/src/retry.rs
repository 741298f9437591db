//! Retry with exponential back-off and jitter for sheet-store reads.
//!
//! Only transient failures are retried. Writes never pass through here: a
//! retried lead POST could append the same enquiry twice, and the store
//! offers no deduplication.

use std::future::Future;
use std::time::Duration;

use crate::error::SheetsError;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:** rate limiting (429), network timeouts and connection
/// failures, and 5xx upstream statuses.
///
/// **Not retriable:** missing sheets (404), rejected credentials (401/403),
/// other 4xx statuses, and malformed response bodies — retrying won't fix
/// any of them.
pub(crate) fn is_retriable(err: &SheetsError) -> bool {
    match err {
        SheetsError::Http(e) => e.is_timeout() || e.is_connect(),
        SheetsError::RateLimited { .. } => true,
        SheetsError::Upstream { status, .. } => *status >= 500,
        SheetsError::Auth { .. }
        | SheetsError::NotFound { .. }
        | SheetsError::Deserialize { .. }
        | SheetsError::InvalidBaseUrl { .. } => false,
    }
}

/// Runs `operation` with up to `max_retries` additional attempts on
/// transient errors. Delay before the n-th retry is
/// `backoff_base_ms * 2^(n-1)` with ±25% jitter, capped at 30 s.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, SheetsError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SheetsError>>,
{
    const MAX_DELAY_MS: u64 = 30_000;
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let computed = backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "transient sheet-store error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
