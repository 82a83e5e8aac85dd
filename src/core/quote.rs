//! Equity quote snapshot
//!
//! Market data for one underlying symbol as returned by the quote endpoint.
//! The analytics engine only consumes `regular_market_price`; everything else
//! is pass-through data kept for the caller.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Quote snapshot for one underlying
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quote {
    pub symbol: Option<String>,
    pub language: Option<String>,
    pub region: Option<String>,
    pub quote_type: Option<String>,
    pub quote_source_name: Option<String>,
    pub currency: Option<String>,
    pub financial_currency: Option<String>,
    pub exchange: Option<String>,
    pub full_exchange_name: Option<String>,
    pub exchange_timezone_name: Option<String>,
    pub exchange_timezone_short_name: Option<String>,
    pub exchange_data_delayed_by: Option<i64>,
    pub gmt_off_set_milliseconds: Option<i64>,
    pub market: Option<String>,
    pub market_state: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub tradeable: Option<bool>,

    /// Last regular-session price; the only field the analytics engine reads
    pub regular_market_price: Option<f64>,
    pub regular_market_previous_close: Option<f64>,
    pub regular_market_open: Option<f64>,
    pub regular_market_day_high: Option<f64>,
    pub regular_market_day_low: Option<f64>,
    pub regular_market_day_range: Option<String>,
    pub regular_market_change: Option<f64>,
    pub regular_market_change_percent: Option<f64>,
    pub regular_market_time: Option<i64>,
    pub regular_market_volume: Option<i64>,

    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub bid_size: Option<i64>,
    pub ask_size: Option<i64>,

    pub fifty_two_week_low: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_range: Option<String>,
    pub fifty_two_week_low_change: Option<f64>,
    pub fifty_two_week_low_change_percent: Option<f64>,
    pub fifty_two_week_high_change: Option<f64>,
    pub fifty_two_week_high_change_percent: Option<f64>,
    pub fifty_day_average: Option<f64>,
    pub fifty_day_average_change: Option<f64>,
    pub fifty_day_average_change_percent: Option<f64>,
    pub two_hundred_day_average: Option<f64>,
    pub two_hundred_day_average_change: Option<f64>,
    pub two_hundred_day_average_change_percent: Option<f64>,
    pub average_daily_volume3_month: Option<i64>,
    pub average_daily_volume10_day: Option<i64>,

    pub market_cap: Option<f64>,
    pub shares_outstanding: Option<i64>,
    pub first_trade_date_milliseconds: Option<i64>,
    pub price_hint: Option<i64>,
    pub source_interval: Option<i64>,

    pub post_market_price: Option<f64>,
    pub post_market_change: Option<f64>,
    pub post_market_change_percent: Option<f64>,
    pub post_market_time: Option<i64>,
}

impl Quote {
    /// Underlying price used by the analytics engine.
    ///
    /// The quote endpoint can omit `regularMarketPrice` (delisted symbols,
    /// pre-IPO placeholders); all analytics are meaningless without it, so
    /// this fails rather than defaulting to zero.
    pub fn underlying_price(&self) -> Result<f64> {
        self.regular_market_price.ok_or(Error::MissingQuotePrice)
    }
}
