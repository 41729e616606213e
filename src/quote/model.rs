use serde::{Deserialize, Serialize};

/// Asset class of a quoted instrument.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuoteType {
    #[serde(rename = "EQUITY")]
    Equity,
    #[serde(rename = "INDEX")]
    Index,
    #[serde(rename = "OPTION")]
    Option,
    #[serde(rename = "CURRENCY")]
    ForexPair,
    #[serde(rename = "CRYPTOCURRENCY")]
    CryptoPair,
    #[serde(rename = "FUTURE")]
    Future,
    #[serde(rename = "ETF")]
    Etf,
    #[serde(rename = "MUTUALFUND")]
    MutualFund,
    /// Any classification this crate does not know about yet.
    #[serde(other)]
    Unknown,
}

/// Trading session a market is currently in.
///
/// US equities: pre market 4:00am-9:30am, regular 9:30am-4:00pm, post market
/// 4:00pm-8:00pm Eastern on weekdays, closed otherwise.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarketState {
    PrePre,
    Pre,
    Regular,
    Post,
    PostPost,
    Closed,
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum OptionType {
    Call,
    Put,
    #[serde(other)]
    Unknown,
}

/// One quote record from the v7 endpoint.
///
/// Yahoo omits fields depending on the asset class, so every field is
/// optional and absent fields decode to `None`. The "applies to" notes
/// reflect what the endpoint has been observed to send.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker symbol. All quotes.
    pub symbol: Option<String>,
    /// Asset class. All quotes.
    pub quote_type: Option<QuoteType>,
    /// User-friendly form of `quote_type`. All quotes.
    pub type_disp: Option<String>,
    pub short_name: Option<String>,
    /// Official name. Crypto, currency, equity, ETF, index and mutual fund quotes.
    pub long_name: Option<String>,
    /// Equity quotes.
    pub display_name: Option<String>,
    pub currency: Option<String>,
    /// Currency of the reported financials. Equity, ETF and mutual fund quotes.
    pub financial_currency: Option<String>,
    pub exchange: Option<String>,
    pub full_exchange_name: Option<String>,
    pub exchange_data_delayed_by: Option<i64>,
    pub exchange_timezone_name: Option<String>,
    pub exchange_timezone_short_name: Option<String>,
    pub gmt_off_set_milliseconds: Option<i64>,
    pub market: Option<String>,
    pub market_state: Option<MarketState>,
    pub region: Option<String>,
    pub language: Option<String>,
    pub quote_source_name: Option<String>,
    pub source_interval: Option<i64>,
    /// Number of decimals worth displaying for prices.
    pub price_hint: Option<i64>,
    pub tradeable: Option<bool>,
    pub triggerable: Option<bool>,
    pub esg_populated: Option<bool>,
    /// Seen values are NONE, LOW and HIGH.
    pub custom_price_alert_confidence: Option<String>,
    pub message_board_id: Option<String>,
    pub first_trade_date_milliseconds: Option<i64>,

    // Regular session.
    pub regular_market_price: Option<f64>,
    pub regular_market_change: Option<f64>,
    pub regular_market_change_percent: Option<f64>,
    pub regular_market_previous_close: Option<f64>,
    pub regular_market_open: Option<f64>,
    pub regular_market_day_high: Option<f64>,
    pub regular_market_day_low: Option<f64>,
    pub regular_market_day_range: Option<String>,
    pub regular_market_volume: Option<i64>,
    /// Unix seconds of the last regular-session trade.
    pub regular_market_time: Option<i64>,

    // Extended hours.
    pub pre_market_price: Option<f64>,
    pub pre_market_change: Option<f64>,
    pub pre_market_change_percent: Option<f64>,
    pub pre_market_time: Option<i64>,
    pub post_market_price: Option<f64>,
    pub post_market_change: Option<f64>,
    pub post_market_change_percent: Option<f64>,
    pub post_market_time: Option<i64>,

    // Order book top.
    pub bid: Option<f64>,
    pub bid_size: Option<i64>,
    pub ask: Option<f64>,
    pub ask_size: Option<f64>,

    // Averages and ranges.
    pub average_daily_volume_10_day: Option<i64>,
    pub average_daily_volume_3_month: Option<i64>,
    pub fifty_day_average: Option<f64>,
    pub fifty_day_average_change: Option<f64>,
    pub fifty_day_average_change_percent: Option<f64>,
    pub two_hundred_day_average: Option<f64>,
    pub two_hundred_day_average_change: Option<f64>,
    pub two_hundred_day_average_change_percent: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_high_change: Option<f64>,
    pub fifty_two_week_high_change_percent: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub fifty_two_week_low_change: Option<f64>,
    pub fifty_two_week_low_change_percent: Option<f64>,
    pub fifty_two_week_range: Option<String>,
    pub fifty_two_week_change_percent: Option<f64>,

    // Fundamentals.
    pub market_cap: Option<i64>,
    pub shares_outstanding: Option<i64>,
    pub book_value: Option<f64>,
    pub price_to_book: Option<f64>,
    pub eps_current_year: Option<f64>,
    pub eps_forward: Option<f64>,
    pub eps_trailing_twelve_months: Option<f64>,
    pub price_eps_current_year: Option<f64>,
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<f64>,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<f64>,
    pub average_analyst_rating: Option<String>,
    pub earnings_timestamp: Option<i64>,
    pub earnings_timestamp_start: Option<i64>,
    pub earnings_timestamp_end: Option<i64>,
    pub dividend_date: Option<i64>,
    pub dividend_rate: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub trailing_annual_dividend_rate: Option<f64>,
    pub trailing_annual_dividend_yield: Option<f64>,
    pub ipo_expected_date: Option<String>,
    pub name_change_date: Option<String>,
    pub prev_name: Option<String>,

    // Funds.
    pub net_assets: Option<f64>,
    pub net_expense_ratio: Option<f64>,
    pub ytd_return: Option<f64>,
    pub trailing_three_month_returns: Option<f64>,
    pub trailing_three_month_nav_returns: Option<f64>,

    // Crypto.
    pub circulating_supply: Option<i64>,
    pub coin_image_url: Option<String>,
    pub coin_market_cap_link: Option<String>,
    pub crypto_tradeable: Option<bool>,
    pub from_currency: Option<String>,
    pub to_currency: Option<String>,
    pub last_market: Option<String>,
    pub logo_url: Option<String>,
    pub start_date: Option<i64>,
    #[serde(rename = "volume24Hr")]
    pub volume_24_hr: Option<i64>,
    pub volume_all_currencies: Option<i64>,

    // Derivatives.
    /// Yahoo sends a boolean here for futures, not the contract symbol.
    pub contract_symbol: Option<bool>,
    pub head_symbol_as_string: Option<String>,
    pub underlying_symbol: Option<String>,
    pub underlying_short_name: Option<String>,
    pub underlying_exchange_symbol: Option<String>,
    pub open_interest: Option<i64>,
    pub options_type: Option<OptionType>,
    pub strike: Option<f64>,
    pub expire_date: Option<i64>,
    pub expire_iso_date: Option<String>,
}
