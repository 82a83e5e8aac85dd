//! Yahoo Finance data fetcher
//!
//! Fetches equity quotes and option chains from Yahoo Finance's unofficial
//! v7 API and returns chains already enriched with analytics.
//!
//! Note: Yahoo Finance data is delayed ~15 minutes and intended for
//! personal use.

use chrono::Utc;
use serde::Deserialize;

use crate::analytics::{assemble, DEFAULT_RISK_FREE_RATE};
use crate::core::{Error, ExpirationDate, OptionChain, OptionContract, Quote, Result};

/// Yahoo Finance API client
pub struct YahooClient {
    client: reqwest::blocking::Client,
    base_url: String,
    risk_free_rate: f64,
}

impl YahooClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: "https://query1.finance.yahoo.com/v7/finance".to_string(),
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
        }
    }

    /// Use a non-default risk-free rate for all analytics from this client.
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    /// Get current quote for a symbol
    pub fn get_quote(&self, symbol: &str) -> Result<Quote> {
        let url = format!("{}/quote?symbols={}", self.base_url, symbol);

        let response: QuoteResponse = self
            .client
            .get(&url)
            .send()
            .map_err(|e| Error::Network(e.to_string()))?
            .json()
            .map_err(|e| Error::Data(format!("Failed to parse quote: {}", e)))?;

        response
            .quote_response
            .result
            .into_iter()
            .next()
            .ok_or_else(|| Error::Data(format!("Symbol {} was not found", symbol)))
    }

    /// Get available option expiration dates for a symbol
    pub fn get_expirations(&self, symbol: &str) -> Result<Vec<ExpirationDate>> {
        let chain = self.fetch_chain(symbol, None)?;

        Ok(chain
            .expiration_dates
            .iter()
            .filter_map(|&ts| ExpirationDate::from_timestamp(ts))
            .collect())
    }

    /// Get the enriched option chain for a symbol.
    ///
    /// `expiration` is a unix timestamp from [`get_expirations`]; `None`
    /// fetches the nearest expiration. Greeks, leverage, and re-pricers are
    /// attached to every contract before the chain is returned.
    ///
    /// [`get_expirations`]: YahooClient::get_expirations
    pub fn get_option_chain(&self, symbol: &str, expiration: Option<i64>) -> Result<OptionChain> {
        let data = self.fetch_chain(symbol, expiration)?;

        let options = data
            .options
            .into_iter()
            .next()
            .ok_or_else(|| Error::Data(format!("No option data returned for {}", symbol)))?;

        assemble(
            &data.quote,
            options.calls,
            options.puts,
            Utc::now(),
            self.risk_free_rate,
        )
    }

    /// Get enriched chains for every available expiration.
    ///
    /// Expirations that fail to fetch or enrich are logged and skipped.
    pub fn get_all_chains(&self, symbol: &str) -> Result<Vec<OptionChain>> {
        let expirations = self.get_expirations(symbol)?;
        let mut chains = Vec::with_capacity(expirations.len());

        for expiry in expirations {
            match self.get_option_chain(symbol, Some(expiry.timestamp)) {
                Ok(chain) => chains.push(chain),
                Err(e) => {
                    tracing::warn!("Failed to get chain for {}: {}", expiry.label, e);
                }
            }
        }

        Ok(chains)
    }

    fn fetch_chain(&self, symbol: &str, expiration: Option<i64>) -> Result<OptionChainData> {
        let url = match expiration {
            Some(ts) => format!("{}/options/{}?date={}", self.base_url, symbol, ts),
            None => format!("{}/options/{}", self.base_url, symbol),
        };

        let response: OptionsResponse = self
            .client
            .get(&url)
            .send()
            .map_err(|e| Error::Network(e.to_string()))?
            .json()
            .map_err(|e| Error::Data(format!("Failed to parse options: {}", e)))?;

        response
            .option_chain
            .result
            .into_iter()
            .next()
            .ok_or_else(|| Error::Data(format!("No options data returned for {}", symbol)))
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

// Yahoo Finance API response envelopes

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    #[serde(rename = "quoteResponse")]
    quote_response: QuoteResult,
}

#[derive(Debug, Deserialize)]
struct QuoteResult {
    result: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct OptionsResponse {
    #[serde(rename = "optionChain")]
    option_chain: OptionChainResult,
}

#[derive(Debug, Deserialize)]
struct OptionChainResult {
    result: Vec<OptionChainData>,
}

#[derive(Debug, Deserialize)]
struct OptionChainData {
    #[serde(rename = "expirationDates", default)]
    expiration_dates: Vec<i64>,
    #[serde(default)]
    strikes: Vec<f64>,
    quote: Quote,
    #[serde(default)]
    options: Vec<OptionsBlock>,
}

#[derive(Debug, Deserialize)]
struct OptionsBlock {
    #[serde(rename = "expirationDate")]
    #[allow(dead_code)]
    expiration_date: Option<i64>,
    #[serde(default)]
    calls: Vec<OptionContract>,
    #[serde(default)]
    puts: Vec<OptionContract>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const CHAIN_FIXTURE: &str = r#"{
        "optionChain": {
            "result": [{
                "underlyingSymbol": "QQQ",
                "expirationDates": [1773964800, 1776384000],
                "strikes": [495.0, 500.0, 505.0],
                "quote": {
                    "symbol": "QQQ",
                    "regularMarketPrice": 502.1,
                    "marketState": "REGULAR"
                },
                "options": [{
                    "expirationDate": 1773964800,
                    "calls": [
                        {
                            "contractSymbol": "QQQ260320C00500000",
                            "strike": 500.0,
                            "lastPrice": 9.4,
                            "bid": 9.3,
                            "ask": 9.5,
                            "impliedVolatility": 0.21,
                            "expiration": 1773964800
                        }
                    ],
                    "puts": [
                        {
                            "contractSymbol": "QQQ260320P00500000",
                            "strike": 500.0,
                            "lastPrice": 7.1,
                            "bid": 7.0,
                            "ask": 7.2,
                            "impliedVolatility": 0.22,
                            "expiration": 1773964800
                        }
                    ]
                }],
                "error": null
            }],
            "error": null
        }
    }"#;

    #[test]
    fn test_decode_and_assemble_fixture() {
        let response: OptionsResponse = serde_json::from_str(CHAIN_FIXTURE).unwrap();
        let data = response.option_chain.result.into_iter().next().unwrap();

        assert_eq!(data.expiration_dates.len(), 2);
        assert_eq!(data.strikes, vec![495.0, 500.0, 505.0]);
        assert_eq!(data.quote.regular_market_price, Some(502.1));

        let options = data.options.into_iter().next().unwrap();
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
        let chain = assemble(&data.quote, options.calls, options.puts, now, 0.0).unwrap();

        assert_eq!(chain.underlying.as_deref(), Some("QQQ"));
        let call = chain.call_at(500.0).unwrap();
        assert!(call.greeks.unwrap().delta > 0.0);
        assert!(call.repricer.unwrap().price(None, None).unwrap() > 0.0);
        let put = chain.put_at(500.0).unwrap();
        assert!(put.greeks.unwrap().delta < 0.0);
    }

    #[test]
    fn test_decode_quote_envelope() {
        let json = r#"{
            "quoteResponse": {
                "result": [{"symbol": "QQQ", "regularMarketPrice": 502.1}],
                "error": null
            }
        }"#;

        let response: QuoteResponse = serde_json::from_str(json).unwrap();
        let quote = response.quote_response.result.into_iter().next().unwrap();
        assert_eq!(quote.symbol.as_deref(), Some("QQQ"));
    }

    #[test]
    #[ignore] // Requires network
    fn test_get_quote_live() {
        let client = YahooClient::new();
        let quote = client.get_quote("QQQ").unwrap();

        assert!(quote.regular_market_price.unwrap() > 0.0);
    }

    #[test]
    #[ignore] // Requires network
    fn test_get_option_chain_live() {
        let client = YahooClient::new();
        let expirations = client.get_expirations("QQQ").unwrap();
        assert!(!expirations.is_empty());

        let chain = client
            .get_option_chain("QQQ", Some(expirations[0].timestamp))
            .unwrap();
        assert!(!chain.calls.is_empty());
        assert!(!chain.puts.is_empty());
    }
}
