//! Cookie & crumb acquisition for Yahoo endpoints.

use chrono::Utc;
use reqwest::Client;
use reqwest::header::COOKIE;
use url::Url;

use super::constants::{CRUMB_HEADERS, SESSION_HEADERS};
use super::session::{CookieBundle, RawCookie};
use crate::core::error::{DorfynError, RemoteError};
use crate::trace::{debug, error, info};

/// Runs the two unauthenticated handshake exchanges.
#[derive(Debug, Clone)]
pub(crate) struct CredentialFetcher {
    http: Client,
    cookie_url: Url,
    crumb_url: Url,
}

impl CredentialFetcher {
    pub(crate) fn new(http: Client, cookie_url: Url, crumb_url: Url) -> Self {
        Self {
            http,
            cookie_url,
            crumb_url,
        }
    }

    /// Hit the login page and keep the cookies worth forwarding.
    ///
    /// The status is not inspected: the login host sets its cookies on
    /// error pages as well.
    pub(crate) async fn fetch_session_cookies(&self) -> Result<CookieBundle, DorfynError> {
        info!(url = %self.cookie_url, "fetching session cookies");

        let req = SESSION_HEADERS.apply(self.http.get(self.cookie_url.clone()));
        let resp = req.send().await.map_err(|e| {
            error!(profile = SESSION_HEADERS.name, "cookie request failed: {e}");
            e
        })?;

        let cookies: Vec<RawCookie> = resp.cookies().map(RawCookie::from).collect();
        debug!(count = cookies.len(), "received handshake cookies");

        // Drain the body so a broken connection surfaces here, not later.
        resp.bytes().await?;

        Ok(CookieBundle::assemble(&cookies, Utc::now()))
    }

    /// Exchange the cookie header for a crumb; the whole body is the crumb.
    pub(crate) async fn fetch_crumb(&self, cookie_header: &str) -> Result<String, DorfynError> {
        info!(url = %self.crumb_url, "fetching crumb");

        let req = CRUMB_HEADERS
            .apply(self.http.get(self.crumb_url.clone()))
            .header(COOKIE, cookie_header);
        let resp = req.send().await.map_err(|e| {
            error!(profile = CRUMB_HEADERS.name, "crumb request failed: {e}");
            e
        })?;

        let status = resp.status();
        let crumb = resp.text().await?;

        if status.as_u16() >= 400 {
            error!(status = status.as_u16(), "crumb endpoint refused the session");
            return Err(RemoteError::Status {
                status: status.as_u16(),
                url: self.crumb_url.to_string(),
                body: crumb,
            }
            .into());
        }

        if crumb.is_empty() || crumb.contains('{') || crumb.contains('<') {
            return Err(RemoteError::Auth(format!("Received invalid crumb: {crumb}")).into());
        }

        Ok(crumb)
    }
}
