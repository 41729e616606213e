//! Centralized constants for default endpoints, UA and header profiles.

use std::time::Duration;

/// Desktop browser UA; the upstream rejects requests without a plausible one.
pub(crate) const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/113.0";

/// Yahoo finance API host. Endpoint paths are appended verbatim.
pub(crate) const DEFAULT_API_BASE: &str = "https://query1.finance.yahoo.com";

/// Login page that hands out the session cookies.
pub(crate) const DEFAULT_COOKIE_URL: &str = "https://login.yahoo.com";

/// Crumb endpoint, relative to the API base (requires cookies from `DEFAULT_COOKIE_URL`).
pub(crate) const CRUMB_PATH: &str = "/v1/test/getcrumb";

/// Overall per-request timeout unless the builder overrides it.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(80);

/// Query key under which the crumb is sent.
pub(crate) const CRUMB_PARAM: &str = "crumb";

/// Session cookie that must never be forwarded.
pub(crate) const EXCLUDED_COOKIE: &str = "AS";

/// Bundle lifetime when the handshake yields no cookie with a usable Max-Age.
pub(crate) const DEFAULT_SESSION_MONTHS: u32 = 12 * 10;

/// A fixed set of request headers for one kind of exchange.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderProfile {
    /// Only read by log fields.
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub(crate) name: &'static str,
    pub(crate) headers: &'static [(&'static str, &'static str)],
}

/// Top-level navigation to the login page.
pub(crate) const SESSION_HEADERS: HeaderProfile = HeaderProfile {
    name: "session",
    headers: &[
        ("accept", "*/*"),
        ("accept-language", "en-US,en;q=0.5"),
        ("sec-fetch-dest", "document"),
        ("sec-fetch-mode", "navigate"),
        ("sec-fetch-site", "none"),
        ("sec-fetch-user", "?1"),
        ("upgrade-insecure-requests", "1"),
    ],
};

/// Cross-site XHR for the crumb.
pub(crate) const CRUMB_HEADERS: HeaderProfile = HeaderProfile {
    name: "crumb",
    headers: &[
        ("accept", "*/*"),
        ("accept-language", "en-US,en;q=0.5"),
        ("content-type", "text/plain"),
        ("sec-fetch-dest", "empty"),
        ("sec-fetch-mode", "cors"),
        ("sec-fetch-site", "same-site"),
    ],
};

/// Authenticated API calls.
pub(crate) const API_HEADERS: HeaderProfile = HeaderProfile {
    name: "api",
    headers: &[
        ("accept", "*/*"),
        ("accept-language", "en-US,en;q=0.5"),
        ("content-type", "application/json"),
        ("origin", "https://finance.yahoo.com"),
        ("referer", "https://finance.yahoo.com"),
        ("sec-fetch-dest", "empty"),
        ("sec-fetch-mode", "cors"),
        ("sec-fetch-site", "same-site"),
    ],
};

impl HeaderProfile {
    /// Attach every header of the profile to `req`.
    pub(crate) fn apply(self, mut req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        for (k, v) in self.headers {
            req = req.header(*k, *v);
        }
        req
    }
}
