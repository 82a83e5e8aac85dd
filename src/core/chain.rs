//! Enriched option chain
//!
//! The final product of chain assembly: both sides of one expiration,
//! indexed by strike.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use super::contract::OptionContract;

/// Strike key for the per-side contract maps
pub type Strike = OrderedFloat<f64>;

/// Expiration metadata: a unix timestamp with its calendar date and a
/// human-readable label (e.g. "March 20, 2026"). Pass-through data for
/// callers picking an expiration; the analytics engine does not consume it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpirationDate {
    /// Unix seconds
    pub timestamp: i64,
    pub date: NaiveDate,
    pub label: String,
}

impl ExpirationDate {
    /// Build from unix seconds; `None` if the timestamp is out of range.
    pub fn from_timestamp(timestamp: i64) -> Option<Self> {
        let dt = DateTime::from_timestamp(timestamp, 0)?;
        let date = dt.date_naive();
        Some(Self {
            timestamp,
            date,
            label: date.format("%B %d, %Y").to_string(),
        })
    }
}

/// Enriched option chain for one symbol and one expiration.
///
/// Contracts are indexed by strike per side; duplicate strikes are a
/// data-quality anomaly and resolve last-write-wins.
#[derive(Debug, Clone, Default)]
pub struct OptionChain {
    /// Underlying symbol
    pub underlying: Option<String>,
    /// Chain expiration as unix seconds
    pub expiration: Option<i64>,
    /// Underlying spot at fetch time
    pub spot: f64,
    /// Call contracts by strike
    pub calls: BTreeMap<Strike, OptionContract>,
    /// Put contracts by strike
    pub puts: BTreeMap<Strike, OptionContract>,
    /// When the chain was assembled
    pub assembled_at: DateTime<Utc>,
}

impl OptionChain {
    /// Get call at strike
    pub fn call_at(&self, strike: f64) -> Option<&OptionContract> {
        self.calls.get(&OrderedFloat(strike))
    }

    /// Get put at strike
    pub fn put_at(&self, strike: f64) -> Option<&OptionContract> {
        self.puts.get(&OrderedFloat(strike))
    }

    /// All strikes on either side, ascending
    pub fn strikes(&self) -> Vec<f64> {
        let mut strikes: Vec<Strike> = self.calls.keys().chain(self.puts.keys()).copied().collect();
        strikes.sort();
        strikes.dedup();
        strikes.into_iter().map(OrderedFloat::into_inner).collect()
    }

    /// Strike closest to the spot price
    pub fn atm_strike(&self) -> Option<f64> {
        self.strikes().into_iter().min_by(|a, b| {
            let da = (self.spot - a).abs();
            let db = (self.spot - b).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(strike: f64) -> OptionContract {
        OptionContract {
            strike: Some(strike),
            ..OptionContract::default()
        }
    }

    #[test]
    fn test_expiration_label() {
        // 2026-03-20 00:00:00 UTC
        let exp = ExpirationDate::from_timestamp(1773964800).unwrap();
        assert_eq!(exp.date, NaiveDate::from_ymd_opt(2026, 3, 20).unwrap());
        assert_eq!(exp.label, "March 20, 2026");
    }

    #[test]
    fn test_strike_lookup() {
        let mut chain = OptionChain {
            spot: 502.0,
            ..OptionChain::default()
        };
        chain.calls.insert(OrderedFloat(500.0), contract(500.0));
        chain.calls.insert(OrderedFloat(505.0), contract(505.0));
        chain.puts.insert(OrderedFloat(500.0), contract(500.0));

        assert!(chain.call_at(500.0).is_some());
        assert!(chain.call_at(510.0).is_none());
        assert_eq!(chain.strikes(), vec![500.0, 505.0]);
        assert_eq!(chain.atm_strike(), Some(500.0));
    }

    #[test]
    fn test_duplicate_strike_last_write_wins() {
        let mut chain = OptionChain::default();
        let mut first = contract(500.0);
        first.last_price = Some(1.0);
        let mut second = contract(500.0);
        second.last_price = Some(2.0);

        chain.calls.insert(OrderedFloat(500.0), first);
        chain.calls.insert(OrderedFloat(500.0), second);

        assert_eq!(chain.calls.len(), 1);
        assert_eq!(chain.call_at(500.0).unwrap().last_price, Some(2.0));
    }
}
