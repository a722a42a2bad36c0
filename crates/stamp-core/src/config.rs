use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("STAMP_LOG_LEVEL", "info");

    let link_base_url = or_default("STAMP_LINK_BASE_URL", "stamp://");
    if !link_base_url.contains("://") {
        return Err(ConfigError::InvalidEnvVar {
            var: "STAMP_LINK_BASE_URL".to_string(),
            reason: format!("'{link_base_url}' has no scheme"),
        });
    }

    let navigation_delay_ms = parse_u64("STAMP_NAVIGATION_DELAY_MS", "300")?;

    Ok(AppConfig {
        log_level,
        link_base_url,
        navigation_delay_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
