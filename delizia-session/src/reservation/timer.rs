//! 预订确认计时器
//!
//! A cancellable delayed action. The handle owns the pending task: dropping
//! it cancels the callback, so a timer can never outlive the controller that
//! scheduled it.

use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::time::Duration;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::core::config::DEFAULT_CONFIRMATION_DELAY_MS;

/// Default confirmation window
pub const DEFAULT_CONFIRMATION_DELAY: Duration =
    Duration::from_millis(DEFAULT_CONFIRMATION_DELAY_MS);

#[derive(Debug, Error)]
pub enum TimerError {
    #[error("No Tokio runtime available to schedule the confirmation timer")]
    NoRuntime,
}

/// Pending delayed callback
#[derive(Debug)]
pub struct ConfirmationTimer {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl ConfirmationTimer {
    /// Schedule `callback` to run once after `delay`
    ///
    /// The deadline is fixed now, not when the task is first polled.
    pub fn schedule<F>(delay: Duration, callback: F) -> Result<Self, TimerError>
    where
        F: FnOnce() + Send + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| TimerError::NoRuntime)?;
        let deadline = Instant::now() + delay;
        let token = CancellationToken::new();
        let task_token = token.clone();

        let handle = runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = task_token.cancelled() => {
                    tracing::debug!("Confirmation timer cancelled before firing");
                }
                _ = tokio::time::sleep_until(deadline) => {
                    // cancel() may have raced with the wakeup
                    if task_token.is_cancelled() {
                        return;
                    }
                    let result = AssertUnwindSafe(async move { callback() })
                        .catch_unwind()
                        .await;
                    if let Err(panic_info) = result {
                        let panic_msg: String = if let Some(s) = panic_info.downcast_ref::<&str>() {
                            (*s).to_string()
                        } else if let Some(s) = panic_info.downcast_ref::<String>() {
                            s.clone()
                        } else {
                            "Unknown panic".to_string()
                        };
                        tracing::error!(panic = %panic_msg, "Confirmation timer callback panicked");
                    }
                }
            }
        });

        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        tracing::debug!(delay_ms, "Confirmation timer scheduled");
        Ok(Self { token, handle })
    }

    /// Prevent the callback from firing. No effect once it has fired.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Scheduled and neither cancelled nor finished
    pub fn is_pending(&self) -> bool {
        !self.token.is_cancelled() && !self.handle.is_finished()
    }
}

impl Drop for ConfirmationTimer {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
