/// Application configuration resolved from the process environment.
///
/// The sheet-store base URL and bearer token are the two required values;
/// everything else has a default tuned for the deployed site.
#[derive(Clone)]
pub struct AppConfig {
    /// Base endpoint of the spreadsheet store, e.g.
    /// `https://sheetdb.io/api/v1/<sheet-id>`.
    pub sheets_url: String,
    /// Bearer credential sent on every request. Redacted from `Debug`.
    pub sheets_token: String,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    /// Bounded staleness window for reads, in seconds. `0` disables the
    /// cache and every read fetches fresh.
    pub cache_max_age_secs: u64,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("sheets_url", &self.sheets_url)
            .field("sheets_token", &"[redacted]")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .field("cache_max_age_secs", &self.cache_max_age_secs)
            .field("log_level", &self.log_level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_the_token() {
        let config = AppConfig {
            sheets_url: "https://sheetdb.io/api/v1/demo".to_string(),
            sheets_token: "super-secret-token".to_string(),
            request_timeout_secs: 30,
            max_retries: 3,
            retry_backoff_base_ms: 500,
            cache_max_age_secs: 0,
            log_level: "info".to_string(),
        };
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret-token"), "leaked: {printed}");
        assert!(printed.contains("[redacted]"));
    }
}
