//! Scan lock and host application lifecycle states.

/// Guard allowing at most one classification-plus-navigation in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanLock {
    #[default]
    Idle,
    Pending,
}

impl ScanLock {
    /// Move `Idle` to `Pending`. Returns `false` if already pending.
    pub fn try_acquire(&mut self) -> bool {
        match self {
            ScanLock::Idle => {
                *self = ScanLock::Pending;
                true
            }
            ScanLock::Pending => false,
        }
    }

    pub fn release(&mut self) {
        *self = ScanLock::Idle;
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        self == ScanLock::Pending
    }
}

/// Lifecycle state reported by the host platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppState {
    #[default]
    Active,
    Inactive,
    Background,
}

impl AppState {
    /// `true` for a transition from background or inactive into the foreground.
    #[must_use]
    pub fn is_foreground_transition(self, next: AppState) -> bool {
        self != AppState::Active && next == AppState::Active
    }
}

impl std::str::FromStr for AppState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" | "foreground" => Ok(AppState::Active),
            "inactive" => Ok(AppState::Inactive),
            "background" => Ok(AppState::Background),
            other => Err(format!("unknown app state '{other}'")),
        }
    }
}
