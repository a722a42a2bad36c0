#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Root used when generating campaign links, e.g. `stamp://`.
    pub link_base_url: String,
    /// Delay between a successful classification and the navigation it triggers.
    pub navigation_delay_ms: u64,
}

impl AppConfig {
    #[must_use]
    pub fn navigation_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.navigation_delay_ms)
    }
}
