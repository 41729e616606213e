//! Batch quote snapshots from the v7 quote endpoint.

mod model;

pub use model::{MarketState, OptionType, Quote, QuoteType};

use serde::Deserialize;

use crate::core::wire::ApiResponse;
use crate::core::{DorfynClient, DorfynError, QueryParams};

/// Path of the v7 quote API, relative to the client's API base.
pub(crate) const QUOTE_PATH: &str = "/v7/finance/quote";

/* ---------------- Public API ---------------- */

/// Fetch quotes for one or more symbols, in the order Yahoo returns them.
pub async fn quotes<I, S>(client: &DorfynClient, symbols: I) -> Result<Vec<Quote>, DorfynError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    QuotesBuilder::new(client).symbols(symbols).fetch().await
}

/// Builder for batch quote snapshots.
#[derive(Clone)]
pub struct QuotesBuilder<'a> {
    client: &'a DorfynClient,
    symbols: Vec<String>,
}

impl<'a> QuotesBuilder<'a> {
    pub fn new(client: &'a DorfynClient) -> Self {
        Self {
            client,
            symbols: Vec::new(),
        }
    }

    /// Set the symbols to query.
    pub fn symbols<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = syms.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single symbol.
    pub fn add_symbol(mut self, sym: impl Into<String>) -> Self {
        self.symbols.push(sym.into());
        self
    }

    /// Execute the request and return one `Quote` per symbol Yahoo reports.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbols = ?self.symbols)))]
    pub async fn fetch(self) -> Result<Vec<Quote>, DorfynError> {
        if self.symbols.is_empty() {
            return Err(DorfynError::Argument(
                "No symbols provided to quotes".into(),
            ));
        }

        let mut params = QueryParams::new();
        params.insert("symbols".into(), self.symbols.join(","));

        let env: QuoteEnvelope = self.client.call(QUOTE_PATH, params).await?;
        Ok(env.quote_response.into_result()?)
    }
}

/* ---------------- Minimal serde for v7 quote ---------------- */

#[derive(Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    quote_response: ApiResponse<Quote>,
}
