//! # Option Analytics - Quotes, Chains, and Greeks
//!
//! Fetches equity quotes and option-chain data from Yahoo Finance and
//! derives per-contract risk analytics: the Black-Scholes Greeks, leverage,
//! and a re-pricing handle for what-if evaluation.
//!
//! ## Key Components
//!
//! - **Pricing Model**: closed-form European price and the five standard
//!   Greeks ([`models::black_scholes`])
//! - **Enrichment Engine**: attaches Greeks, leverage, and a [`Repricer`]
//!   to every raw contract ([`analytics`])
//! - **Data Fetching**: Yahoo Finance quotes and chains ([`data::YahooClient`])
//!
//! ## Usage
//!
//! ```rust,no_run
//! use option_analytics::prelude::*;
//!
//! let client = YahooClient::new();
//!
//! // Quote plus nearest-expiration enriched chain
//! let quote = client.get_quote("QQQ").unwrap();
//! let chain = client.get_option_chain("QQQ", None).unwrap();
//!
//! if let Some(atm) = chain.atm_strike() {
//!     let call = chain.call_at(atm).unwrap();
//!     println!("delta {:.4}", call.greeks.unwrap().delta);
//!
//!     // What would it be worth at 30% vol?
//!     let what_if = call.repricer.unwrap().price(Some(0.30), None).unwrap();
//!     println!("at 30% vol: {:.2}", what_if);
//! }
//! # let _ = quote;
//! ```
//!
//! ## What This Crate Does Not Do
//!
//! - American early-exercise pricing (European closed-form only)
//! - Dividend-yield modeling (cost of carry fixed at the risk-free rate)
//! - Caching or persistence of quotes and analytics
//!
//! [`Repricer`]: core::Repricer

pub mod analytics;
pub mod core;
pub mod data;
pub mod models;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        Error, ExpirationDate, Greeks, OptionChain, OptionContract, OptionType, Quote, Repricer,
        Result, Strike,
    };

    // Analytics
    pub use crate::analytics::{assemble, enrich, DEFAULT_RISK_FREE_RATE};

    // Pricing model
    pub use crate::models::black_scholes::{self, OptionParameters};

    // Data fetching
    pub use crate::data::YahooClient;
}

// Re-export main types at crate root
pub use crate::core::{Error, OptionChain, OptionContract, OptionType, Quote, Result};
