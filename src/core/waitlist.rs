//! Waitlist action boundary
//!
//! The submission flow never performs I/O itself. The view injects a
//! [`WaitlistAction`] and races it against the configured timeout with
//! [`resolve_with_timeout`].

use std::future::Future;
use std::time::Duration;

use futures::future::{Either, LocalBoxFuture, select};
use serde::{Deserialize, Serialize};

use super::submission::SubmissionError;

/// Delay of the simulated signup request (ms)
pub const DEFAULT_SIMULATED_DELAY_MS: u32 = 1500;

/// Time after which an unanswered submission becomes an error (ms)
pub const DEFAULT_SUBMIT_TIMEOUT_MS: u32 = 10_000;

/// Client-visible waitlist tuning, served by `GET /api/waitlist/settings`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistSettings {
    /// Delay of the simulated signup request
    pub simulated_delay_ms: u32,
    /// `None` disables the timeout guard
    pub submit_timeout_ms: Option<u32>,
}

impl WaitlistSettings {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.simulated_delay_ms))
    }

    pub fn submit_timeout(&self) -> Option<Duration> {
        self.submit_timeout_ms
            .map(|ms| Duration::from_millis(u64::from(ms)))
    }
}

impl Default for WaitlistSettings {
    fn default() -> Self {
        Self {
            simulated_delay_ms: DEFAULT_SIMULATED_DELAY_MS,
            submit_timeout_ms: Some(DEFAULT_SUBMIT_TIMEOUT_MS),
        }
    }
}

/// Side-effecting signup operation injected into the waitlist form.
///
/// Implementations must eventually resolve; the timeout guard only protects
/// the form state, it does not cancel the underlying work.
pub trait WaitlistAction {
    fn submit(&self, email: String) -> LocalBoxFuture<'static, Result<(), SubmissionError>>;
}

/// Race `action` against `timer`.
///
/// When `timer` completes first the outcome is [`SubmissionError::TimedOut`]
/// and the action future is dropped. A `None` timer waits for the action.
pub async fn resolve_with_timeout<A, T>(
    action: A,
    timer: Option<T>,
    timeout_ms: u32,
) -> Result<(), SubmissionError>
where
    A: Future<Output = Result<(), SubmissionError>>,
    T: Future<Output = ()>,
{
    let Some(timer) = timer else {
        return action.await;
    };

    let action = std::pin::pin!(action);
    let timer = std::pin::pin!(timer);
    match select(action, timer).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => {
            tracing::warn!("Waitlist submission timed out after {} ms", timeout_ms);
            Err(SubmissionError::TimedOut { after_ms: timeout_ms })
        }
    }
}
