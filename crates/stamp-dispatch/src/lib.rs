//! Dispatch of classified deep links to app screens.

pub mod dispatcher;
pub mod event_loop;
pub mod route;
pub mod scan_lock;

pub use dispatcher::{Dispatch, Dispatcher, Navigator, Notifier, PendingNavigation};
pub use event_loop::{run, ScanEvent};
pub use route::{route_for, LocationDetailParams, Route};
pub use scan_lock::{AppState, ScanLock};
