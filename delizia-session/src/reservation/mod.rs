//! Reservation form controller
//!
//! Holds the draft being composed and the `Idle` / `Confirmed` display status.
//!
//! # State machine
//!
//! ```text
//!            submit (complete draft)
//!   Idle ─────────────────────────────► Confirmed ──┐
//!    ▲                                      │        │ submit again:
//!    │      auto_reset(episode) after       │        │ cancel timer,
//!    └────── the confirmation delay ◄───────┘        │ new episode
//!                                           ◄────────┘
//! ```
//!
//! Every successful submit opens a new confirmation *episode*. The timer
//! callback carries the episode it was scheduled for; a callback whose
//! episode is no longer current is ignored.

pub mod timer;


use shared::models::{ReservationDraft, ReservationField, ReservationStatus};
use std::time::Duration;
use thiserror::Error;

pub use timer::{ConfirmationTimer, DEFAULT_CONFIRMATION_DELAY, TimerError};

#[derive(Debug, Error)]
pub enum ReservationError {
    #[error("Reservation is missing required fields: {}", format_fields(.missing))]
    IncompleteDraft { missing: Vec<ReservationField> },

    #[error("Confirmation timer unavailable: {0}")]
    Timer(#[from] TimerError),
}

fn format_fields(fields: &[ReservationField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reservation form controller
#[derive(Debug)]
pub struct ReservationController {
    draft: ReservationDraft,
    status: ReservationStatus,
    /// Last confirmation episode handed out (0 = never confirmed)
    episode: u64,
    delay: Duration,
    /// At most one outstanding auto-reset
    timer: Option<ConfirmationTimer>,
}

impl Default for ReservationController {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIRMATION_DELAY)
    }
}

impl ReservationController {
    pub fn new(delay: Duration) -> Self {
        Self {
            draft: ReservationDraft::default(),
            status: ReservationStatus::Idle,
            episode: 0,
            delay,
            timer: None,
        }
    }

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    pub fn episode(&self) -> u64 {
        self.episode
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn has_pending_timer(&self) -> bool {
        self.timer.as_ref().is_some_and(ConfirmationTimer::is_pending)
    }

    /// Unconditional overwrite of one draft field
    pub fn set_field(&mut self, field: ReservationField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Popular-time chip
    pub fn set_time(&mut self, value: impl Into<String>) {
        self.set_field(ReservationField::Time, value);
    }

    /// Party-size picker
    pub fn set_guest_count(&mut self, value: impl Into<String>) {
        self.set_field(ReservationField::GuestCount, value);
    }

    /// Revert the draft to defaults; status is left alone
    pub fn manual_reset(&mut self) {
        self.draft = ReservationDraft::default();
    }

    /// Submit the draft
    ///
    /// On success the draft is reset, status becomes `Confirmed` and
    /// `on_elapsed(episode)` is scheduled after the confirmation delay. A
    /// still-pending timer from a previous submit is cancelled once the new
    /// one is in place.
    ///
    /// An incomplete draft, or a timer that cannot be scheduled, is rejected
    /// without touching any state.
    pub fn submit<F>(&mut self, on_elapsed: F) -> Result<u64, ReservationError>
    where
        F: FnOnce(u64) + Send + 'static,
    {
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(missing = %format_fields(&missing), "Reservation submit rejected");
            return Err(ReservationError::IncompleteDraft { missing });
        }

        let episode = self.episode + 1;
        let timer = ConfirmationTimer::schedule(self.delay, move || on_elapsed(episode))?;

        if let Some(previous) = self.timer.replace(timer) {
            previous.cancel();
        }
        self.episode = episode;
        self.draft = ReservationDraft::default();
        self.status = ReservationStatus::Confirmed;

        let delay_ms = u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX);
        tracing::info!(episode, delay_ms, "Reservation confirmed");
        Ok(episode)
    }

    /// Timer-driven return to `Idle`
    ///
    /// Returns `true` only if this call ended the current confirmation.
    pub fn auto_reset(&mut self, episode: u64) -> bool {
        if self.status != ReservationStatus::Confirmed || episode != self.episode {
            tracing::debug!(
                episode,
                current = self.episode,
                status = %self.status,
                "Ignoring stale confirmation reset"
            );
            return false;
        }

        self.status = ReservationStatus::Idle;
        self.timer = None;
        tracing::info!(episode, "Reservation confirmation ended");
        true
    }

    /// Cancel any pending auto-reset (session teardown)
    pub fn teardown(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
            tracing::debug!(episode = self.episode, "Pending confirmation reset cancelled");
        }
    }
}
