//! Waitlist submission lifecycle
//!
//! ```text
//! Idle --submit(valid)--> Submitting --Ok--> Success --reset--> Idle
//!   ^  \-submit(invalid)-> Idle         \--Err-> Error ---reset--> Idle
//! ```
//!
//! The flow is synchronous: [`SubmissionFlow::begin_submit`] hands back a
//! [`PendingSubmission`] for the caller to run through its injected action,
//! and [`SubmissionFlow::complete`] applies the outcome.

use super::validation::{ValidationError, normalize_email, validate_email};

/// Lifecycle state of the waitlist form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Success and Error wait for an explicit reset
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::Error)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "Idle",
            SubmissionStatus::Submitting => "Submitting",
            SubmissionStatus::Success => "Success",
            SubmissionStatus::Error => "Error",
        }
    }
}

/// Failure reported by the injected waitlist action
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Signup was rejected: {0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("No response after {after_ms} ms")]
    TimedOut { after_ms: u32 },
}

/// Why a submit trigger was not accepted
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitRejected {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("A submission is already in progress")]
    InFlight,

    #[error("Reset the form before submitting again")]
    AwaitingReset,
}

/// Accepted submit, to be run through the waitlist action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    attempt: u64,
    email: String,
}

impl PendingSubmission {
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn into_email(self) -> String {
        self.email
    }
}

/// Single-field waitlist form state
#[derive(Debug, Clone, Default)]
pub struct SubmissionFlow {
    status: SubmissionStatus,
    field_value: String,
    validation_error: Option<ValidationError>,
    failure: Option<SubmissionError>,
    attempt: u64,
}

impl SubmissionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn field_value(&self) -> &str {
        &self.field_value
    }

    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.validation_error.as_ref()
    }

    /// Failure of the last attempt, only while in `Error`
    pub fn failure(&self) -> Option<&SubmissionError> {
        self.failure.as_ref()
    }

    /// Number of the attempt currently or last in flight, 0 before any
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn can_submit(&self) -> bool {
        self.status == SubmissionStatus::Idle
    }

    /// Input and submit button are disabled while a request is in flight
    pub fn is_input_disabled(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Record an edit of the email field.
    ///
    /// Clears any field-level error. Ignored while submitting; returns whether
    /// the edit was applied.
    pub fn set_field_value(&mut self, value: impl Into<String>) -> bool {
        if self.is_input_disabled() {
            return false;
        }
        self.field_value = value.into();
        self.validation_error = None;
        true
    }

    /// Handle the submit trigger.
    ///
    /// A valid value moves the flow to `Submitting` and returns the pending
    /// attempt. An invalid value stays in `Idle` with the error recorded, and
    /// the action must not be called.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitRejected> {
        match self.status {
            SubmissionStatus::Idle => {}
            SubmissionStatus::Submitting => return Err(SubmitRejected::InFlight),
            SubmissionStatus::Success | SubmissionStatus::Error => {
                return Err(SubmitRejected::AwaitingReset);
            }
        }

        if let Err(error) = validate_email(&self.field_value) {
            tracing::debug!("Waitlist submit rejected: {}", error);
            self.validation_error = Some(error.clone());
            return Err(SubmitRejected::Invalid(error));
        }

        self.attempt += 1;
        self.status = SubmissionStatus::Submitting;
        self.validation_error = None;
        self.failure = None;

        tracing::debug!("Waitlist attempt {} submitting", self.attempt);

        Ok(PendingSubmission {
            attempt: self.attempt,
            email: normalize_email(&self.field_value),
        })
    }

    /// Apply the outcome of attempt `attempt`.
    ///
    /// Outcomes for any attempt other than the one in flight are dropped.
    /// Returns whether the outcome was applied.
    pub fn complete(&mut self, attempt: u64, outcome: Result<(), SubmissionError>) -> bool {
        if self.status != SubmissionStatus::Submitting || attempt != self.attempt {
            tracing::debug!(
                "Dropping outcome of attempt {} (current {}, status {})",
                attempt,
                self.attempt,
                self.status.display_name()
            );
            return false;
        }

        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.field_value.clear();
            }
            Err(error) => {
                tracing::debug!("Waitlist attempt {} failed: {}", attempt, error);
                self.status = SubmissionStatus::Error;
                self.failure = Some(error);
            }
        }
        true
    }

    /// Leave `Success` or `Error` for a fresh `Idle` form.
    ///
    /// No-op in any other state; returns whether the flow was reset.
    pub fn reset(&mut self) -> bool {
        if !self.status.is_terminal() {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        self.failure = None;
        self.validation_error = None;
        true
    }
}
