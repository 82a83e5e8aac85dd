//! Contract enrichment
//!
//! Attaches model analytics (Greeks, leverage, a re-pricer) to every raw
//! contract on one side of a chain. The caller supplies the evaluation
//! instant, so enrichment is a pure function of its arguments.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::{Error, OptionContract, OptionType, Quote, Repricer, Result};
use crate::models::black_scholes::{self, OptionParameters};

/// Risk-free rate used when the caller has no curve to supply.
///
/// All current call sites price at zero carry; pass a different rate to
/// [`enrich`] to change that.
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.0;

const SECONDS_PER_YEAR: f64 = 365.0 * 86_400.0;

/// Enrich one side of a chain with analytics.
///
/// Each contract is augmented in place: Greeks, the side marker, leverage,
/// and a [`Repricer`] capturing the inputs used. Time to expiry is derived
/// per contract from its own expiration timestamp against `now`.
///
/// An empty batch is a no-op. A single bad contract (missing strike,
/// missing implied volatility, expired) aborts the whole batch; there is no
/// per-contract isolation. A quote without a market price fails before any
/// contract is touched.
pub fn enrich(
    quote: &Quote,
    mut contracts: Vec<OptionContract>,
    side: OptionType,
    now: DateTime<Utc>,
    rate: f64,
) -> Result<Vec<OptionContract>> {
    if contracts.is_empty() {
        return Ok(contracts);
    }

    let underlying = quote.underlying_price()?;
    debug!(
        side = ?side,
        contracts = contracts.len(),
        underlying,
        "enriching chain side"
    );

    for contract in &mut contracts {
        enrich_contract(contract, underlying, side, now, rate)?;
    }

    Ok(contracts)
}

fn enrich_contract(
    contract: &mut OptionContract,
    underlying: f64,
    side: OptionType,
    now: DateTime<Utc>,
    rate: f64,
) -> Result<()> {
    let strike = contract
        .strike
        .ok_or_else(|| Error::invalid_parameter("contract has no strike"))?;
    let volatility = contract
        .implied_volatility
        .ok_or_else(|| Error::invalid_parameter("contract has no implied volatility"))?;
    let expiration = contract
        .expiration
        .ok_or_else(|| Error::invalid_parameter("contract has no expiration"))?;

    let time_to_expiry = (expiration - now.timestamp()) as f64 / SECONDS_PER_YEAR;

    let params = OptionParameters::new(underlying, strike, rate, volatility, time_to_expiry, side);
    let greeks = black_scholes::greeks(&params)?;

    contract.leverage = Some(leverage(greeks.delta, underlying, contract.last_price));
    contract.greeks = Some(greeks);
    contract.option_type = Some(side);
    contract.repricer = Some(Repricer {
        strike,
        rate,
        option_type: side,
        time_to_expiry,
        default_volatility: volatility,
        default_underlying: underlying,
    });

    Ok(())
}

/// Leverage: |delta * spot / last traded price|.
///
/// A missing or zero last price falls back to a divisor of 1, yielding an
/// inflated but finite value. This mirrors the long-standing upstream
/// behavior; callers that need to distinguish the fallback can check
/// `last_price` themselves.
fn leverage(delta: f64, underlying: f64, last_price: Option<f64>) -> f64 {
    let divisor = match last_price {
        Some(last) if last != 0.0 => last,
        _ => 1.0,
    };
    (delta * underlying / divisor).abs()
}
