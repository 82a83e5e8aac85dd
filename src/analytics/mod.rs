//! Analytics enrichment engine
//!
//! Turns raw option contracts plus an underlying quote into an enriched,
//! strike-indexed chain: Greeks, leverage, and a re-pricer per contract.

pub mod chain;
pub mod enrich;

pub use chain::*;
pub use enrich::*;
