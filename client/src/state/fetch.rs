//! Load state for screens that fetch on mount.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::fmt::Display;

/// Progress of a single read request owned by one screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    /// No request issued yet.
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// Request failed; holds the user-facing message.
    Failed(String),
}

impl<T> FetchState<T> {
    /// Map a resource outcome onto a fetch state.
    ///
    /// `None` means the request is still in flight. Errors are replaced by
    /// `failure_message` since raw transport errors are not shown to users.
    pub fn from_outcome<E: Display>(outcome: Option<Result<T, E>>, failure_message: &str) -> Self {
        match outcome {
            None => FetchState::Loading,
            Some(Ok(value)) => FetchState::Loaded(value),
            Some(Err(_)) => FetchState::Failed(failure_message.to_owned()),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    #[must_use]
    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
