//! Cancellable delayed fetch.
//!
//! # Invariants
//! - Cancellation wins over an elapsed delay when both are ready at first
//!   poll; a torn-down view never receives data.
//! - `produce` runs only after the delay has fully elapsed uncancelled.

use std::time::Duration;

use log::debug;
use tokio_util::sync::CancellationToken;

/// Runs `produce` after `delay`, unless `cancel` fires first.
///
/// Returns `None` on cancellation; the caller's state is left untouched and
/// the would-be payload is never built.
pub async fn fetch_after_delay<T>(
    delay: Duration,
    cancel: &CancellationToken,
    produce: impl FnOnce() -> T,
) -> Option<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!(
                "event=fetch_cancelled module=load status=cancelled delay_ms={}",
                delay.as_millis()
            );
            None
        }
        _ = tokio::time::sleep(delay) => {
            debug!(
                "event=fetch_completed module=load status=ok delay_ms={}",
                delay.as_millis()
            );
            Some(produce())
        }
    }
}
