//! Reactive application state provided via Leptos contexts.

pub mod cache;
pub mod forms;
pub mod wallet;
