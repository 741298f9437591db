//! HTTP client for the sheet store.
//!
//! Wraps `reqwest` with bearer-credential management, typed status-code
//! errors, transient-error retry, and the optional freshness cache. All
//! reads come back as raw rows; the typed accessors live in the `reads`
//! module and the write path in `leads`.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use tourdb_core::AppConfig;

use crate::cache::{FreshnessPolicy, SheetCache};
use crate::error::SheetsError;
use crate::retry::retry_with_backoff;
use crate::types::{ErrorBody, RawRow, Sheet};

/// Client for the spreadsheet-backed store.
///
/// Use [`SheetsClient::new`] for production or
/// [`SheetsClient::with_base_url`] to point at a mock server in tests. The
/// bearer token is held privately and only ever sent as a request header;
/// it cannot appear in URLs, errors, or logs.
pub struct SheetsClient {
    client: Client,
    token: String,
    base_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
    cache: SheetCache,
}

impl SheetsClient {
    /// Creates a client pointed at the configured store endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SheetsError::InvalidBaseUrl`] if the
    /// configured endpoint is not a valid URL.
    pub fn new(config: &AppConfig) -> Result<Self, SheetsError> {
        Self::with_base_url(config, &config.sheets_url)
    }

    /// Creates a client with an explicit base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SheetsError::InvalidBaseUrl`] if
    /// `base_url` cannot be parsed.
    pub fn with_base_url(config: &AppConfig, base_url: &str) -> Result<Self, SheetsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("tourdb/0.1 (travel-catalog)")
            .build()?;

        let trimmed = base_url.trim_end_matches('/');
        let base_url = Url::parse(trimmed).map_err(|e| SheetsError::InvalidBaseUrl {
            url: trimmed.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            token: config.sheets_token.clone(),
            base_url,
            max_retries: config.max_retries,
            backoff_base_ms: config.retry_backoff_base_ms,
            cache: SheetCache::new(FreshnessPolicy::from_max_age_secs(
                config.cache_max_age_secs,
            )),
        })
    }

    /// Fetches the raw rows of one sheet, honoring the freshness policy and
    /// retrying transient failures.
    ///
    /// # Errors
    ///
    /// - [`SheetsError::NotFound`] — the sheet does not exist (HTTP 404).
    /// - [`SheetsError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`SheetsError::Auth`] — the credential was rejected (HTTP 401/403).
    /// - [`SheetsError::Upstream`] — any other non-2xx status.
    /// - [`SheetsError::Http`] — network or TLS failure after all retries.
    /// - [`SheetsError::Deserialize`] — the body is not a JSON row array.
    pub async fn fetch_rows(&self, sheet: Sheet) -> Result<Vec<RawRow>, SheetsError> {
        if let Some(rows) = self.cache.get(sheet) {
            tracing::debug!(%sheet, rows = rows.len(), "serving sheet from cache");
            return Ok(rows);
        }

        let url = self.sheet_url(sheet);
        let rows = retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let url = url.clone();
            async move { self.fetch_rows_once(url, sheet).await }
        })
        .await?;

        self.cache.store(sheet, &rows);
        Ok(rows)
    }

    async fn fetch_rows_once(&self, url: Url, sheet: Sheet) -> Result<Vec<RawRow>, SheetsError> {
        tracing::debug!(%sheet, %url, "fetching sheet rows");
        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.token)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let body = response.text().await?;
        serde_json::from_str::<Vec<RawRow>>(&body).map_err(|e| SheetsError::Deserialize {
            context: format!("{sheet} rows from {url}"),
            source: e,
        })
    }

    /// Appends rows via POST. Used by the leads write path; not retried,
    /// since a duplicate POST would append a duplicate row.
    pub(crate) async fn append_rows<B: serde::Serialize>(
        &self,
        body: &B,
    ) -> Result<(), SheetsError> {
        let url = self.base_url.clone();
        tracing::debug!(%url, "appending rows");
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Maps a non-2xx response to its typed error, reading the body for the
    /// store's optional `{"error": ...}` message.
    async fn check_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, SheetsError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let url = response.url().to_string();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(SheetsError::RateLimited {
                url,
                retry_after_secs,
            });
        }

        if status == StatusCode::NOT_FOUND {
            return Err(SheetsError::NotFound { url });
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(SheetsError::Auth {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error);
        Err(SheetsError::Upstream {
            status: status.as_u16(),
            url,
            message,
        })
    }

    /// Builds the read URL for a sheet. The packages sheet is the store's
    /// default tab, so it gets no `sheet` parameter.
    fn sheet_url(&self, sheet: Sheet) -> Url {
        let mut url = self.base_url.clone();
        if let Some(name) = sheet.query_param() {
            url.query_pairs_mut().append_pair("sheet", name);
        }
        url
    }
}
