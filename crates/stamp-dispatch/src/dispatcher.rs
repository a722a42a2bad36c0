//! Turns classified links into navigations under the scan lock.
//!
//! The dispatcher is synchronous: [`Dispatcher::handle_link`] decides what to
//! do and returns a [`PendingNavigation`] for successful links. The caller
//! completes it once its deadline passes (see [`crate::run`]).

use std::time::Duration;

use stamp_core::{validate, ParsedUri, UriValidatorError};
use tokio::time::Instant;

use crate::route::{route_for, Route};
use crate::scan_lock::{AppState, ScanLock};

/// Screen transition seam, implemented by the host UI.
pub trait Navigator {
    fn navigate(&mut self, route: &Route);
}

/// User-facing error surface (toast, banner).
pub trait Notifier {
    fn show_error(&mut self, error: &UriValidatorError);
}

/// A navigation decided but not yet performed. Not cancellable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNavigation {
    pub route: Route,
    pub due: Instant,
}

/// What happened to one incoming link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Another link is still in flight; this one was dropped.
    Ignored,
    /// Classification failed; the error was shown and scanning is allowed again.
    Rejected(UriValidatorError),
    /// Classification succeeded; navigation fires at `due`.
    Scheduled(PendingNavigation),
}

pub struct Dispatcher<N, T> {
    navigator: N,
    notifier: T,
    lock: ScanLock,
    app_state: AppState,
    navigation_delay: Duration,
}

impl<N: Navigator, T: Notifier> Dispatcher<N, T> {
    pub fn new(navigator: N, notifier: T, navigation_delay: Duration) -> Self {
        Self {
            navigator,
            notifier,
            lock: ScanLock::Idle,
            app_state: AppState::Active,
            navigation_delay,
        }
    }

    #[must_use]
    pub fn lock(&self) -> ScanLock {
        self.lock
    }

    #[must_use]
    pub fn app_state(&self) -> AppState {
        self.app_state
    }

    #[must_use]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    #[must_use]
    pub fn notifier(&self) -> &T {
        &self.notifier
    }

    pub fn into_parts(self) -> (N, T) {
        (self.navigator, self.notifier)
    }

    /// Classify one link and decide its effect.
    ///
    /// The lock is taken before classification, so a second link arriving
    /// while this one is being handled is always ignored.
    pub fn handle_link(&mut self, uri: &ParsedUri) -> Dispatch {
        if !self.lock.try_acquire() {
            tracing::debug!(path = ?uri.path, "scan lock pending, ignoring link");
            return Dispatch::Ignored;
        }

        match validate(uri) {
            Ok(result) => {
                let kind = result.kind();
                let route = route_for(result);
                let due = Instant::now() + self.navigation_delay;
                tracing::info!(%kind, delay = ?self.navigation_delay, "navigation scheduled");
                Dispatch::Scheduled(PendingNavigation { route, due })
            }
            Err(error) => {
                tracing::warn!(error = %error, "link rejected");
                self.notifier.show_error(&error);
                self.lock.release();
                Dispatch::Rejected(error)
            }
        }
    }

    /// Convenience for raw link strings from the platform or a QR decoder.
    pub fn handle_raw(&mut self, raw: &str) -> Dispatch {
        self.handle_link(&ParsedUri::parse(raw))
    }

    /// Perform a scheduled navigation. The lock stays pending until the app
    /// next returns to the foreground.
    pub fn complete(&mut self, pending: &PendingNavigation) {
        tracing::info!(route = ?pending.route, "navigating");
        self.navigator.navigate(&pending.route);
    }

    /// Track the host lifecycle. Returning to the foreground is the only
    /// event that releases a pending lock. Returns `true` if it did.
    pub fn on_app_state(&mut self, next: AppState) -> bool {
        let previous = std::mem::replace(&mut self.app_state, next);
        if previous.is_foreground_transition(next) && self.lock.is_pending() {
            tracing::debug!(?previous, "app returned to foreground, releasing scan lock");
            self.lock.release();
            return true;
        }
        false
    }
}

#[cfg(test)]
#[path = "dispatcher_test.rs"]
mod tests;
