//! Single-consumer event loop driving a [`Dispatcher`] from platform events.

use std::collections::VecDeque;

use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::dispatcher::{Dispatch, Dispatcher, Navigator, Notifier, PendingNavigation};
use crate::scan_lock::AppState;

/// One event delivered by the host platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// Raw URI from an opened deep link or a decoded QR code.
    Link(String),
    AppState(AppState),
}

/// Handle events one at a time until the channel closes.
///
/// Scheduled navigations fire when their deadline passes, interleaved with
/// incoming events. Navigations still pending when the channel closes are
/// completed before returning the dispatcher.
pub async fn run<N, T>(
    mut dispatcher: Dispatcher<N, T>,
    mut events: mpsc::Receiver<ScanEvent>,
) -> Dispatcher<N, T>
where
    N: Navigator,
    T: Notifier,
{
    let mut pending: VecDeque<PendingNavigation> = VecDeque::new();

    loop {
        let next_due = pending.front().map(|p| p.due);

        tokio::select! {
            biased;

            () = tokio::time::sleep_until(next_due.unwrap_or_else(Instant::now)), if next_due.is_some() => {
                if let Some(navigation) = pending.pop_front() {
                    dispatcher.complete(&navigation);
                }
            }

            event = events.recv() => {
                let Some(event) = event else { break };
                match event {
                    ScanEvent::Link(raw) => {
                        if let Dispatch::Scheduled(navigation) = dispatcher.handle_raw(&raw) {
                            pending.push_back(navigation);
                        }
                    }
                    ScanEvent::AppState(state) => {
                        dispatcher.on_app_state(state);
                    }
                }
            }
        }
    }

    for navigation in pending {
        tokio::time::sleep_until(navigation.due).await;
        dispatcher.complete(&navigation);
    }

    tracing::debug!("scan event channel closed");
    dispatcher
}
