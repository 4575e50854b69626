//! Cancellable one-shot timers tied to a component's lifetime.
//!
//! A [`DelayedAction`] holds at most one pending timeout. Scheduling again
//! replaces the pending one, and the owning component's cleanup clears it,
//! so a redirect never fires after the user has already left the screen.

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::notice::Redirect;

/// Failure to arm a browser timeout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TimerError {
    #[error("timeout could not be scheduled: {0}")]
    Schedule(String),

    #[error("timers are not available on server")]
    Unavailable,
}

/// A single pending timeout owned by the current reactive scope.
#[derive(Clone, Copy)]
pub struct DelayedAction {
    handle: StoredValue<Option<TimeoutHandle>>,
}

impl DelayedAction {
    /// Create a timer slot and clear it when the current owner is cleaned up.
    pub fn new() -> Self {
        let action = Self { handle: StoredValue::new(None) };
        on_cleanup(move || action.cancel());
        action
    }

    /// Run `callback` after `delay`, cancelling anything already pending.
    ///
    /// # Errors
    ///
    /// Returns a [`TimerError`] if the browser refuses the timeout or when
    /// called outside the browser.
    pub fn schedule(&self, delay: Duration, callback: impl FnOnce() + 'static) -> Result<(), TimerError> {
        self.cancel();
        #[cfg(feature = "hydrate")]
        {
            let handle = set_timeout_with_handle(callback, delay)
                .map_err(|e| TimerError::Schedule(format!("{e:?}")))?;
            self.handle.set_value(Some(handle));
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, callback);
            Err(TimerError::Unavailable)
        }
    }

    /// Clear the pending timeout, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.handle.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    }
}

impl Default for DelayedAction {
    fn default() -> Self {
        Self::new()
    }
}

/// Schedule `redirect` on `timer`, navigating with the router's `navigate`.
///
/// # Errors
///
/// Returns a [`TimerError`] if the timeout could not be armed.
pub fn schedule_redirect<F>(timer: DelayedAction, redirect: Redirect, navigate: F) -> Result<(), TimerError>
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let Redirect { to, after } = redirect;
    timer.schedule(after, move || navigate(&to, NavigateOptions::default()))
}
