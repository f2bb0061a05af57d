//! Shared domain and wire types for the crowdfunding client/server boundary.
//!
//! This crate owns everything both sides of the HTTP boundary agree on:
//! contract addresses, read-call descriptors, transaction DTOs, the campaign
//! domain model, decoding of gateway JSON payloads, and the tagged
//! `RemoteData` result every asynchronous fetch resolves into.
//!
//! No RPC, signing, or ABI machinery lives here; contract interaction is
//! delegated to external services; this crate only describes the calls and
//! interprets their decoded JSON results.

pub mod address;
pub mod call;
pub mod campaign;
pub mod decode;
pub mod remote;

pub use address::{Address, AddressError};
pub use call::{DeployRequest, ReadCall, TxReceipt, TxRequest, TxStatus};
pub use campaign::{CampaignState, CampaignSummary, Tier};
pub use remote::RemoteData;
