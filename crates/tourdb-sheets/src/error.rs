use thiserror::Error;

/// Errors returned by the sheet-store client.
///
/// Every variant that carries a URL carries the request URL only; the bearer
/// credential travels in a header and never appears in errors or logs.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store rejected the bearer credential (HTTP 401/403).
    #[error("authentication rejected (status {status}) for {url}")]
    Auth { status: u16, url: String },

    /// The requested sheet does not exist (HTTP 404).
    #[error("sheet not found: {url}")]
    NotFound { url: String },

    /// The store is throttling us (HTTP 429).
    #[error("rate limited by the sheet store (retry after {retry_after_secs}s) for {url}")]
    RateLimited { url: String, retry_after_secs: u64 },

    /// Any other non-2xx response; `message` is the store's optional
    /// `{"error": ...}` body field.
    #[error("unexpected status {status} from {url}{}", fmt_message(.message))]
    Upstream {
        status: u16,
        url: String,
        message: Option<String>,
    },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured store endpoint is not a parseable URL.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

fn fmt_message(message: &Option<String>) -> String {
    message
        .as_ref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_display_includes_store_message() {
        let err = SheetsError::Upstream {
            status: 500,
            url: "https://sheetdb.io/api/v1/demo".to_string(),
            message: Some("quota exhausted".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"), "missing status: {msg}");
        assert!(msg.contains("quota exhausted"), "missing message: {msg}");
    }

    #[test]
    fn upstream_display_without_store_message() {
        let err = SheetsError::Upstream {
            status: 502,
            url: "https://sheetdb.io/api/v1/demo".to_string(),
            message: None,
        };
        assert_eq!(
            err.to_string(),
            "unexpected status 502 from https://sheetdb.io/api/v1/demo"
        );
    }
}
