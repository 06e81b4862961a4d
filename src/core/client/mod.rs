//! Public client surface + builder.
//! Endpoint and timeouts live here; request/decode logic is in `history`.

mod constants;

use crate::core::KlineError;
use constants::{DEFAULT_BASE_KLINE, DEFAULT_TIMEOUT_SECS, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP client for the Sina quote service.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct SinaClient {
    http: Client,
    base_kline: Url,
}

impl Default for SinaClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl SinaClient {
    /// Create a new builder.
    pub fn builder() -> SinaClientBuilder {
        SinaClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_kline(&self) -> &Url {
        &self.base_kline
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct SinaClientBuilder {
    user_agent: Option<String>,
    base_kline: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl SinaClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the K-line API base (used by tests to point at a mock server).
    pub fn base_kline(mut self, url: Url) -> Self {
        self.base_kline = Some(url);
        self
    }

    /// Set the overall request timeout. Default: 10 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `KlineError` if a default URL fails to parse or the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<SinaClient, KlineError> {
        let base_kline = match self.base_kline {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_KLINE)?,
        };

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            );
        let http = match self.connect_timeout {
            Some(ct) => http.connect_timeout(ct),
            None => http,
        };

        Ok(SinaClient {
            http: http.build()?,
            base_kline,
        })
    }
}
