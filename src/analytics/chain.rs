//! Chain assembly
//!
//! Builds the final strike-indexed option chain from raw call and put
//! contracts plus the underlying quote.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;

use crate::core::{OptionChain, OptionContract, OptionType, Quote, Result, Strike};

use super::enrich::enrich;

/// Assemble the enriched chain for one expiration.
///
/// Enriches calls then puts and indexes each side by strike. Any enrichment
/// failure fails the whole chain; no partial chain is returned. Duplicate
/// strikes within a side resolve last-write-wins.
pub fn assemble(
    quote: &Quote,
    raw_calls: Vec<OptionContract>,
    raw_puts: Vec<OptionContract>,
    now: DateTime<Utc>,
    rate: f64,
) -> Result<OptionChain> {
    let calls = enrich(quote, raw_calls, OptionType::Call, now, rate)?;
    let puts = enrich(quote, raw_puts, OptionType::Put, now, rate)?;

    let expiration = calls
        .first()
        .or_else(|| puts.first())
        .and_then(|c| c.expiration);

    Ok(OptionChain {
        underlying: quote.symbol.clone(),
        expiration,
        spot: quote.regular_market_price.unwrap_or_default(),
        calls: index_by_strike(calls),
        puts: index_by_strike(puts),
        assembled_at: now,
    })
}

fn index_by_strike(contracts: Vec<OptionContract>) -> BTreeMap<Strike, OptionContract> {
    contracts
        .into_iter()
        .filter_map(|c| c.strike.map(|strike| (OrderedFloat(strike), c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn quote(price: f64) -> Quote {
        Quote {
            symbol: Some("QQQ".into()),
            regular_market_price: Some(price),
            ..Quote::default()
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()
    }

    fn contract(strike: f64) -> OptionContract {
        OptionContract {
            strike: Some(strike),
            implied_volatility: Some(0.2),
            expiration: Some(fixed_now().timestamp() + 30 * 86_400),
            last_price: Some(3.1),
            ..OptionContract::default()
        }
    }

    #[test]
    fn test_assemble_indexes_both_sides() {
        let chain = assemble(
            &quote(502.0),
            vec![contract(500.0), contract(505.0)],
            vec![contract(500.0)],
            fixed_now(),
            0.0,
        )
        .unwrap();

        assert_eq!(chain.underlying.as_deref(), Some("QQQ"));
        assert_eq!(chain.spot, 502.0);
        assert_eq!(chain.calls.len(), 2);
        assert_eq!(chain.puts.len(), 1);

        let call = chain.call_at(505.0).unwrap();
        assert_eq!(call.option_type, Some(OptionType::Call));
        assert!(call.greeks.is_some());

        let put = chain.put_at(500.0).unwrap();
        assert_eq!(put.option_type, Some(OptionType::Put));
    }

    #[test]
    fn test_assemble_empty_sides() {
        let chain = assemble(&quote(502.0), Vec::new(), Vec::new(), fixed_now(), 0.0).unwrap();
        assert!(chain.calls.is_empty());
        assert!(chain.puts.is_empty());
        assert_eq!(chain.expiration, None);
    }

    #[test]
    fn test_assemble_duplicate_strike_keeps_last() {
        let mut first = contract(500.0);
        first.last_price = Some(1.0);
        let mut second = contract(500.0);
        second.last_price = Some(2.0);

        let chain = assemble(
            &quote(502.0),
            vec![first, second],
            Vec::new(),
            fixed_now(),
            0.0,
        )
        .unwrap();

        assert_eq!(chain.calls.len(), 1);
        assert_eq!(chain.call_at(500.0).unwrap().last_price, Some(2.0));
    }

    #[test]
    fn test_assemble_propagates_enrichment_failure() {
        let mut bad = contract(500.0);
        bad.implied_volatility = None;

        let result = assemble(
            &quote(502.0),
            vec![contract(495.0)],
            vec![bad],
            fixed_now(),
            0.0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_assemble_records_expiration() {
        let chain = assemble(
            &quote(502.0),
            vec![contract(500.0)],
            Vec::new(),
            fixed_now(),
            0.0,
        )
        .unwrap();
        assert_eq!(
            chain.expiration,
            Some(fixed_now().timestamp() + 30 * 86_400)
        );
    }
}
