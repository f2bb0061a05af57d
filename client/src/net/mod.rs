//! Network layer: REST API helpers, the read-query hook, and well-known
//! contract addresses.

pub mod api;
pub mod contracts;
pub mod query;
