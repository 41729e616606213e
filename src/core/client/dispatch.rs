//! Building and executing authenticated API calls.

use std::collections::BTreeMap;

use reqwest::header::COOKIE;
use serde::de::DeserializeOwned;
use url::Url;

use super::DorfynClient;
use super::constants::{API_HEADERS, CRUMB_PARAM};
use super::session::SessionCredential;
use crate::core::error::{DorfynError, RemoteError};
use crate::core::net;
use crate::trace::{debug, error, info};

/// Query parameters of an API call. Sorted, so the encoded URL is stable.
pub type QueryParams = BTreeMap<String, String>;

/// Join an absolute endpoint `path` onto `base`.
///
/// The result must stay on the host and port of `base`, since the crumb and
/// cookie travel with every request built from it.
pub(crate) fn endpoint_url(base: &Url, path: &str) -> Result<Url, DorfynError> {
    if !path.starts_with('/') || path.starts_with("//") {
        return Err(DorfynError::Argument(format!(
            "endpoint path must start with a single '/': {path:?}"
        )));
    }

    let joined = format!("{}{}", base.as_str().trim_end_matches('/'), path);
    let url = Url::parse(&joined)?;

    if url.host_str() != base.host_str() || url.port_or_known_default() != base.port_or_known_default()
    {
        return Err(DorfynError::Argument(format!(
            "endpoint path {path:?} leaves the API host"
        )));
    }
    Ok(url)
}

/// Add the crumb if there is one and encode `params` onto `endpoint`.
pub(crate) fn api_url(endpoint: &Url, params: &QueryParams, crumb: Option<&str>) -> Url {
    let mut url = endpoint.clone();

    let mut all = params.clone();
    if let Some(c) = crumb.filter(|c| !c.is_empty()) {
        all.insert(CRUMB_PARAM.to_string(), c.to_string());
    }

    if !all.is_empty() {
        let mut qp = url.query_pairs_mut();
        for (k, v) in &all {
            qp.append_pair(k, v);
        }
    }
    url
}

impl DorfynClient {
    fn build_request(
        &self,
        endpoint: &Url,
        params: &QueryParams,
        credential: &SessionCredential,
    ) -> (reqwest::RequestBuilder, Url) {
        let url = api_url(endpoint, params, Some(&credential.crumb));
        let req = API_HEADERS
            .apply(self.http.get(url.clone()))
            .header(COOKIE, credential.cookie_header.as_str());
        (req, url)
    }

    /// Execute an authenticated GET against `path` and decode the JSON body into `T`.
    ///
    /// `path` must be absolute (e.g. `/v7/finance/quote`); anything else is an
    /// argument error raised before any network activity.
    /// Stale credentials are refreshed once before the request goes out.
    /// A failure of the request itself is returned as is, without a second attempt.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err))]
    pub async fn call<T: DeserializeOwned>(
        &self,
        path: &str,
        params: QueryParams,
    ) -> Result<T, DorfynError> {
        let endpoint = endpoint_url(&self.api_base, path)?;
        let credential = self.session.ensure_fresh(&self.fetcher).await?;
        let (req, url) = self.build_request(&endpoint, &params, &credential);

        info!(%url, "requesting");
        let resp = req.send().await.map_err(|e| {
            error!("request to api failed: {e}");
            e
        })?;

        let status = resp.status().as_u16();
        let dump_key = params.get("symbols").map_or("response", String::as_str);
        let body = net::get_text(resp, dump_key).await?;

        if status >= 400 {
            error!(status, "api error response");
            return Err(RemoteError::Status {
                status,
                url: url.to_string(),
                body,
            }
            .into());
        }

        debug!(len = body.len(), "api response received");
        Ok(serde_json::from_str(&body)?)
    }
}
