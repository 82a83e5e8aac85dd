//! Option contract data
//!
//! A contract starts as the raw record decoded from the option-chain
//! endpoint. Enrichment attaches the derived analytics (Greeks, leverage,
//! a re-pricer) to the same record in place; nothing is copied into a
//! second type.

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::greeks::Greeks;
use super::option::OptionType;
use crate::models::black_scholes::{self, OptionParameters};

/// One option contract: raw market fields plus attached analytics.
///
/// The analytics fields are `None` until the contract has passed through
/// the enricher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionContract {
    // Raw fields from the option-chain endpoint
    pub contract_symbol: Option<String>,
    pub strike: Option<f64>,
    pub currency: Option<String>,
    pub last_price: Option<f64>,
    pub change: Option<f64>,
    pub percent_change: Option<f64>,
    pub volume: Option<i64>,
    pub open_interest: Option<i64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub contract_size: Option<String>,
    /// Expiration as unix seconds
    pub expiration: Option<i64>,
    pub last_trade_date: Option<i64>,
    pub implied_volatility: Option<f64>,
    pub in_the_money: Option<bool>,

    // Attached by the enricher
    pub greeks: Option<Greeks>,
    pub option_type: Option<OptionType>,
    pub leverage: Option<f64>,
    pub repricer: Option<Repricer>,
}

/// Re-pricing handle attached to an enriched contract.
///
/// Holds the pricing inputs captured at enrichment time so a caller can ask
/// "what would this contract be worth at volatility X or spot Y" without
/// re-deriving time to expiry or re-fetching data. Overrides never mutate
/// the contract's attached analytics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Repricer {
    pub strike: f64,
    pub rate: f64,
    pub option_type: OptionType,
    /// Time to expiry in years, fixed at enrichment time
    pub time_to_expiry: f64,
    /// Implied volatility captured from the contract
    pub default_volatility: f64,
    /// Spot captured from the quote
    pub default_underlying: f64,
}

impl Repricer {
    /// Theoretical price with optional volatility/spot overrides.
    ///
    /// A `None` argument falls back to the value captured at enrichment
    /// time, so `price(None, None)` reproduces the model price the
    /// analytics were computed against.
    pub fn price(&self, volatility: Option<f64>, underlying: Option<f64>) -> Result<f64> {
        let params = OptionParameters::new(
            underlying.unwrap_or(self.default_underlying),
            self.strike,
            self.rate,
            volatility.unwrap_or(self.default_volatility),
            self.time_to_expiry,
            self.option_type,
        );
        black_scholes::price(&params)
    }
}
