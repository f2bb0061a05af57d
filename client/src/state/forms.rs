//! Ephemeral form state for the tier and campaign creation modals.
//!
//! DESIGN
//! ======
//! Form state lives only inside the open modal and is discarded on close.
//! The tier form only coerces types; the contract is the authority on
//! rejecting bad tiers. The campaign form performs the single flat
//! validation the deploy flow requires.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use chain::DeployRequest;

/// Flat validation message shown when any campaign field is missing.
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Submission lifecycle of one modal form instance. `Submitting` blocks
/// re-entry until the in-flight request settles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

impl SubmitPhase {
    #[must_use]
    pub fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Raw input state of the tier creation modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TierForm {
    pub name: String,
    pub amount: String,
}

impl TierForm {
    /// Coerce inputs into `addTier` arguments. No validation beyond type
    /// coercion: an empty name goes through as-is and a non-numeric amount
    /// coerces to zero.
    #[must_use]
    pub fn tier_args(&self) -> (String, u64) {
        let amount = self.amount.trim().parse::<u64>().unwrap_or(0);
        (self.name.clone(), amount)
    }
}

/// Raw input state of the campaign creation modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignForm {
    pub name: String,
    pub description: String,
    pub goal: u64,
    pub duration_days: u64,
}

impl CampaignForm {
    /// Coerce a goal input, flooring typed values at 1. A non-numeric or
    /// cleared input resets to 0 (unset), which validation then catches.
    #[must_use]
    pub fn coerce_goal(raw: &str) -> u64 {
        coerce_floor_one(raw)
    }

    /// Coerce a duration input with the same floor-1 rule as the goal.
    #[must_use]
    pub fn coerce_duration(raw: &str) -> u64 {
        coerce_floor_one(raw)
    }

    /// Validate that all four fields are present and build the deploy
    /// request.
    ///
    /// # Errors
    ///
    /// Returns the flat [`ALL_FIELDS_REQUIRED`] message when any field is
    /// empty or zero.
    pub fn validate(&self) -> Result<DeployRequest, String> {
        if self.name.is_empty() || self.description.is_empty() || self.goal == 0 || self.duration_days == 0 {
            return Err(ALL_FIELDS_REQUIRED.to_owned());
        }
        Ok(DeployRequest {
            name: self.name.clone(),
            description: self.description.clone(),
            goal: self.goal,
            duration_in_days: self.duration_days,
        })
    }
}

fn coerce_floor_one(raw: &str) -> u64 {
    match raw.trim().parse::<i64>() {
        Ok(v) if v < 1 => 1,
        #[allow(clippy::cast_sign_loss)]
        Ok(v) => v as u64,
        Err(_) => 0,
    }
}
