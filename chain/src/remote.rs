//! Tagged result for asynchronous reads and writes.
//!
//! DESIGN
//! ======
//! Every data-fetch site resolves into exactly one of three states, so a
//! failed read is distinguishable from one still pending. Callers branch on
//! the variant instead of probing `Option`s.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::fmt::Display;

/// State of one asynchronous fetch: still pending, resolved, or failed with
/// a human-readable reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteData<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> RemoteData<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The resolved value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Loaded(v) => Some(v),
            _ => None,
        }
    }

    /// The failure reason, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Map the resolved value, carrying `Loading`/`Failed` through.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RemoteData<U> {
        match self {
            Self::Loading => RemoteData::Loading,
            Self::Loaded(v) => RemoteData::Loaded(f(v)),
            Self::Failed(reason) => RemoteData::Failed(reason),
        }
    }

    /// Map the resolved value through a fallible step; the error becomes a
    /// `Failed` reason. Used when decoding cached gateway JSON.
    pub fn and_then_decode<U, E: Display>(
        self,
        f: impl FnOnce(T) -> Result<U, E>,
    ) -> RemoteData<U> {
        match self {
            Self::Loading => RemoteData::Loading,
            Self::Loaded(v) => match f(v) {
                Ok(mapped) => RemoteData::Loaded(mapped),
                Err(e) => RemoteData::Failed(e.to_string()),
            },
            Self::Failed(reason) => RemoteData::Failed(reason),
        }
    }
}

impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T, E: Display> From<Result<T, E>> for RemoteData<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Self::Loaded(v),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}
