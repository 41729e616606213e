//! Public client surface + builder.
//! Internals are split into `auth` (cookie/crumb handshake), `session` (cached
//! credentials), `dispatch` (authenticated calls) and `constants` (UA, URLs, headers).

mod auth;
mod constants;
mod dispatch;
mod session;

use std::sync::Arc;
use std::time::Duration;

use crate::core::DorfynError;
use auth::CredentialFetcher;
use constants::{CRUMB_PATH, DEFAULT_API_BASE, DEFAULT_COOKIE_URL, DEFAULT_TIMEOUT, USER_AGENT};
use reqwest::Client;
use session::SessionStore;
use url::Url;

pub use dispatch::QueryParams;
pub use session::SessionCredential;

/// Yahoo Finance client. Cloning is cheap and clones share one session.
#[derive(Debug, Clone)]
pub struct DorfynClient {
    http: Client,
    api_base: Url,
    fetcher: CredentialFetcher,
    session: Arc<SessionStore>,
}

impl Default for DorfynClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl DorfynClient {
    /// Create a new builder.
    pub fn builder() -> DorfynClientBuilder {
        DorfynClientBuilder::default()
    }

    /// Snapshot of the cached credential, if a handshake has completed.
    pub async fn session(&self) -> Option<SessionCredential> {
        self.session.current().await
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct DorfynClientBuilder {
    user_agent: Option<String>,
    api_base: Option<Url>,
    cookie_url: Option<Url>,
    crumb_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl DorfynClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API host (e.g., `https://query1.finance.yahoo.com`).
    /// Endpoint paths such as `/v7/finance/quote` are appended to it.
    pub fn api_base(mut self, url: Url) -> Self {
        self.api_base = Some(url);
        self
    }

    /// Override the cookie bootstrap URL.
    pub fn cookie_url(mut self, url: Url) -> Self {
        self.cookie_url = Some(url);
        self
    }

    /// Override the crumb URL. Default: `/v1/test/getcrumb` on the API base.
    pub fn crumb_url(mut self, url: Url) -> Self {
        self.crumb_url = Some(url);
        self
    }

    /// Set the overall per-request timeout. Default: 80 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<DorfynClient, DorfynError> {
        let api_base = match self.api_base {
            Some(u) => u,
            None => Url::parse(DEFAULT_API_BASE)?,
        };
        let cookie_url = match self.cookie_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_COOKIE_URL)?,
        };
        let crumb_url = match self.crumb_url {
            Some(u) => u,
            None => dispatch::endpoint_url(&api_base, CRUMB_PATH)?,
        };

        // Cookies are forwarded by hand from the cached session, so the
        // automatic jar stays off.
        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(false)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(DorfynClient {
            fetcher: CredentialFetcher::new(http.clone(), cookie_url, crumb_url),
            http,
            api_base,
            session: Arc::new(SessionStore::default()),
        })
    }
}
