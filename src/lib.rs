//! dorfyn: Yahoo Finance quote client.
//!
//! Every data call needs a cookie/crumb pair obtained through a two-step
//! handshake. [`DorfynClient`] runs that handshake lazily, caches the result
//! until its earliest cookie expires, and attaches it to each request.
//!
//! ```no_run
//! # async fn run() -> Result<(), dorfyn::DorfynError> {
//! let client = dorfyn::DorfynClient::builder().build()?;
//! for q in dorfyn::quotes(&client, ["AAPL", "^DJI"]).await? {
//!     println!("{:?}: {:?}", q.symbol, q.regular_market_price);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod quote;
pub mod trace;

pub use crate::core::{
    ApiError, DorfynClient, DorfynClientBuilder, DorfynError, ErrorKind, QueryParams,
    RemoteError, SessionCredential,
};
pub use quote::{MarketState, OptionType, Quote, QuoteType, QuotesBuilder, quotes};
pub use trace::{LogLevel, init_tracing};
