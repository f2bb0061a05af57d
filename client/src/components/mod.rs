//! Reusable UI components.

pub mod campaign_card;
pub mod navbar;
pub mod progress_bar;
pub mod tier_card;
