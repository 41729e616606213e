//! Cached cookie/crumb credentials and the refresh-or-reuse decision.

use std::time::Duration;

use chrono::{DateTime, Months, TimeDelta, Utc};
use tokio::sync::{Mutex, RwLock};

use super::auth::CredentialFetcher;
use super::constants::{DEFAULT_SESSION_MONTHS, EXCLUDED_COOKIE};
use crate::core::error::DorfynError;
use crate::trace::{debug, info};

/// The credentials every authenticated call needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCredential {
    /// Value for the `Cookie` request header.
    pub cookie_header: String,
    /// Anti-automation token sent as the `crumb` query parameter.
    pub crumb: String,
    /// Earliest expiry among the cookies in `cookie_header`.
    pub expires_at: DateTime<Utc>,
}

impl SessionCredential {
    /// True once `expires_at` is no longer in the future.
    pub fn is_stale_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    pub fn is_stale(&self) -> bool {
        self.is_stale_at(Utc::now())
    }
}

/// A cookie as seen on the handshake response, reduced to what the bundle needs.
#[derive(Clone, Debug)]
pub(crate) struct RawCookie {
    pub(crate) name: String,
    pub(crate) value: String,
    pub(crate) max_age: Option<Duration>,
}

impl From<reqwest::cookie::Cookie<'_>> for RawCookie {
    fn from(c: reqwest::cookie::Cookie<'_>) -> Self {
        Self {
            name: c.name().to_string(),
            value: c.value().to_string(),
            max_age: c.max_age(),
        }
    }
}

/// Accepted handshake cookies joined into a header, plus their earliest expiry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CookieBundle {
    pub(crate) header: String,
    pub(crate) expires_at: DateTime<Utc>,
}

impl CookieBundle {
    /// Keep cookies with a positive Max-Age that are not excluded.
    ///
    /// This mirrors what the upstream has been observed to need. It is a
    /// heuristic: the resulting expiry is not a guaranteed session lifetime.
    pub(crate) fn assemble<'a, I>(cookies: I, now: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = &'a RawCookie>,
    {
        let mut pairs = Vec::new();
        let mut earliest: Option<DateTime<Utc>> = None;

        for c in cookies {
            let Some(max_age) = c.max_age.filter(|d| !d.is_zero()) else {
                debug!(cookie = %c.name, "cookie ignored: no positive max-age");
                continue;
            };
            if c.name == EXCLUDED_COOKIE {
                debug!(cookie = %c.name, "cookie ignored: excluded name");
                continue;
            }

            pairs.push(format!("{}={}", c.name, c.value));

            let cookie_expiry = TimeDelta::from_std(max_age)
                .ok()
                .and_then(|d| now.checked_add_signed(d));
            if let Some(exp) = cookie_expiry
                && earliest.is_none_or(|cur| exp < cur)
            {
                earliest = Some(exp);
            }
        }

        let expires_at = earliest.unwrap_or_else(|| default_expiry(now));
        Self {
            header: pairs.join("; "),
            expires_at,
        }
    }
}

fn default_expiry(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_add_months(Months::new(DEFAULT_SESSION_MONTHS))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Holds the single live credential of a client.
///
/// Reads take the `state` lock only; a refresh additionally holds
/// `refresh_lock` so that at most one handshake is in flight.
#[derive(Debug, Default)]
pub(crate) struct SessionStore {
    state: RwLock<Option<SessionCredential>>,
    refresh_lock: Mutex<()>,
}

impl SessionStore {
    pub(crate) async fn current(&self) -> Option<SessionCredential> {
        self.state.read().await.clone()
    }

    async fn fresh(&self) -> Option<SessionCredential> {
        self.state
            .read()
            .await
            .as_ref()
            .filter(|c| !c.is_stale())
            .cloned()
    }

    /// Return a non-stale credential, running the handshake first if needed.
    ///
    /// On failure the stored credential is left as it was.
    pub(crate) async fn ensure_fresh(
        &self,
        fetcher: &CredentialFetcher,
    ) -> Result<SessionCredential, DorfynError> {
        if let Some(c) = self.fresh().await {
            return Ok(c);
        }

        let _guard = self.refresh_lock.lock().await;

        // Another task may have refreshed while this one was waiting.
        if let Some(c) = self.fresh().await {
            return Ok(c);
        }

        info!("refreshing session credentials");
        let bundle = fetcher.fetch_session_cookies().await?;
        let crumb = fetcher.fetch_crumb(&bundle.header).await?;

        let credential = SessionCredential {
            cookie_header: bundle.header,
            crumb,
            expires_at: bundle.expires_at,
        };
        debug!(expires_at = %credential.expires_at, "session refreshed");

        *self.state.write().await = Some(credential.clone());
        Ok(credential)
    }
}
