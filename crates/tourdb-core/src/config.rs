use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let sheets_url = require("TOURDB_SHEETS_URL")?;
    let sheets_token = require("TOURDB_SHEETS_TOKEN")?;

    let request_timeout_secs = parse_u64("TOURDB_REQUEST_TIMEOUT_SECS", "30")?;
    let max_retries = parse_u32("TOURDB_MAX_RETRIES", "3")?;
    let retry_backoff_base_ms = parse_u64("TOURDB_RETRY_BACKOFF_BASE_MS", "500")?;
    let cache_max_age_secs = parse_u64("TOURDB_CACHE_MAX_AGE_SECS", "0")?;
    let log_level = or_default("TOURDB_LOG_LEVEL", "info");

    Ok(AppConfig {
        sheets_url,
        sheets_token,
        request_timeout_secs,
        max_retries,
        retry_backoff_base_ms,
        cache_max_age_secs,
        log_level,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid values.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("TOURDB_SHEETS_URL", "https://sheetdb.io/api/v1/demo");
        m.insert("TOURDB_SHEETS_TOKEN", "test-token");
        m
    }

    #[test]
    fn fails_without_sheets_url() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "TOURDB_SHEETS_URL"),
            "expected MissingEnvVar(TOURDB_SHEETS_URL), got: {result:?}"
        );
    }

    #[test]
    fn fails_without_sheets_token() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("TOURDB_SHEETS_URL", "https://sheetdb.io/api/v1/demo");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "TOURDB_SHEETS_TOKEN"),
            "expected MissingEnvVar(TOURDB_SHEETS_TOKEN), got: {result:?}"
        );
    }

    #[test]
    fn succeeds_with_defaults_for_optional_vars() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).expect("config should load");
        assert_eq!(cfg.sheets_url, "https://sheetdb.io/api/v1/demo");
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.max_retries, 3);
        assert_eq!(cfg.retry_backoff_base_ms, 500);
        assert_eq!(cfg.cache_max_age_secs, 0);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn optional_vars_can_be_overridden() {
        let mut map = full_env();
        map.insert("TOURDB_REQUEST_TIMEOUT_SECS", "10");
        map.insert("TOURDB_MAX_RETRIES", "0");
        map.insert("TOURDB_CACHE_MAX_AGE_SECS", "60");
        map.insert("TOURDB_LOG_LEVEL", "debug");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config should load");
        assert_eq!(cfg.request_timeout_secs, 10);
        assert_eq!(cfg.max_retries, 0);
        assert_eq!(cfg.cache_max_age_secs, 60);
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        let mut map = full_env();
        map.insert("TOURDB_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. })
                if var == "TOURDB_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(TOURDB_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn rejects_non_numeric_retries() {
        let mut map = full_env();
        map.insert("TOURDB_MAX_RETRIES", "many");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. })
                if var == "TOURDB_MAX_RETRIES"),
            "expected InvalidEnvVar(TOURDB_MAX_RETRIES), got: {result:?}"
        );
    }
}
