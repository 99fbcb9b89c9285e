//! Lead capture flow behind the "Generate Blueprint" modal.
//!
//! DESIGN
//! ======
//! `Collecting → Submitting → Ready`. Submission hands out a
//! [`SubmitTicket`] stamped with the current generation; settling with a
//! ticket from an older generation is a no-op. Dismissing the modal while a
//! request is in flight bumps the generation, so a late result from the
//! abandoned request is dropped rather than cancelled.
//!
//! `Ready` is terminal for the session. The form contents survive dismissal
//! and are only cleared by starting a new session.

#[cfg(test)]
#[path = "lead_test.rs"]
mod lead_test;

use serde::{Deserialize, Serialize};

/// Contact details collected by the modal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadForm {
    pub url: String,
    pub email: String,
    pub phone: String,
}

impl LeadForm {
    /// Names of required fields that are blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [("url", &self.url), ("email", &self.email), ("phone", &self.phone)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}

/// Why a submission was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("the blueprint is already ready")]
    AlreadyReady,
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Proof of a specific submission, returned by [`LeadFlow::submit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
}

/// Where the modal is in the flow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LeadPhase {
    #[default]
    Collecting,
    /// Waiting on the remote summary; further submits are refused.
    Submitting { ticket: SubmitTicket },
    /// Summary received (or substituted); download enabled.
    Ready { summary: String },
}

/// Modal visibility, form, and phase for one session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFlow {
    pub form: LeadForm,
    phase: LeadPhase,
    open: bool,
    generation: u64,
}

impl LeadFlow {
    #[must_use]
    pub fn phase(&self) -> &LeadPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, LeadPhase::Submitting { .. })
    }

    /// The summary once the flow is ready.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        match &self.phase {
            LeadPhase::Ready { summary } => Some(summary),
            _ => None,
        }
    }

    /// Show the modal. Phase and form are untouched.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Start a submission.
    ///
    /// # Errors
    ///
    /// Refused while already submitting or ready, and when any required
    /// field is blank. A refused submit changes nothing.
    pub fn submit(&mut self) -> Result<SubmitTicket, LeadError> {
        match self.phase {
            LeadPhase::Submitting { .. } => return Err(LeadError::AlreadySubmitting),
            LeadPhase::Ready { .. } => return Err(LeadError::AlreadyReady),
            LeadPhase::Collecting => {}
        }
        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            return Err(LeadError::MissingFields(missing));
        }
        let ticket = SubmitTicket { generation: self.generation };
        self.phase = LeadPhase::Submitting { ticket };
        Ok(ticket)
    }

    /// Finish a submission with the summary text (generated or fallback).
    ///
    /// Returns `false` and changes nothing when the ticket is stale.
    pub fn settle(&mut self, ticket: SubmitTicket, summary: impl Into<String>) -> bool {
        match self.phase {
            LeadPhase::Submitting { ticket: current } if current == ticket => {
                self.phase = LeadPhase::Ready { summary: summary.into() };
                true
            }
            _ => false,
        }
    }

    /// Close the modal from any phase, abandoning an in-flight submission.
    pub fn dismiss(&mut self) {
        self.open = false;
        if self.is_submitting() {
            self.phase = LeadPhase::Collecting;
            self.generation += 1;
        }
    }
}
