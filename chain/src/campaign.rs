//! Campaign domain model and derived view math.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is a read-through projection of on-chain state. Fields of
//! one campaign resolve independently, so these types never assume a fully
//! loaded campaign; pages compose them field by field.

#[cfg(test)]
#[path = "campaign_test.rs"]
mod campaign_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::address::Address;

/// On-chain campaign lifecycle state, decoded from a `uint8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignState {
    Active,
    Successful,
    Failed,
    /// Any code outside 0/1/2. Rendered as "Unknown" instead of panicking
    /// or mislabeling.
    Unknown(u8),
}

impl CampaignState {
    #[must_use]
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Active,
            1 => Self::Successful,
            2 => Self::Failed,
            other => Self::Unknown(other),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Successful => "Successful",
            Self::Failed => "Failed",
            Self::Unknown(_) => "Unknown",
        }
    }
}

/// A campaign reference as returned by the factory listing calls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub address: Address,
    pub owner: Address,
    pub name: String,
    pub creation_time: u64,
}

/// A named funding level on one campaign.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,
    pub amount: u64,
    pub backers: u64,
}

/// Percentage of the goal covered by the balance, clamped to `[0, 100]`.
///
/// A zero goal is defined as 0%: the chain does not forbid goal-less
/// campaigns and an empty bar beats a NaN width.
#[must_use]
pub fn funding_percentage(balance: u64, goal: u64) -> f64 {
    if goal == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let pct = (balance as f64 / goal as f64) * 100.0;
    pct.min(100.0)
}

/// Whether the deadline lies strictly in the past.
#[must_use]
pub fn deadline_passed(deadline_secs: u64, now_secs: u64) -> bool {
    deadline_secs < now_secs
}

/// Render a unix deadline as a calendar date, e.g. `2026-08-30`.
/// Unrepresentable timestamps degrade to the raw seconds value.
#[must_use]
pub fn format_deadline(deadline_secs: u64) -> String {
    let format = format_description!("[year]-[month]-[day]");
    i64::try_from(deadline_secs)
        .ok()
        .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
        .and_then(|dt| dt.format(&format).ok())
        .unwrap_or_else(|| deadline_secs.to_string())
}
