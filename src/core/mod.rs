//! Core data types for option analytics
//!
//! Defines fundamental types:
//! - OptionType: call/put discriminator
//! - Quote: underlying market snapshot
//! - OptionContract: raw chain record plus attached analytics
//! - OptionChain: strike-indexed enriched chain
//! - Greeks: price sensitivities

pub mod chain;
pub mod contract;
pub mod error;
pub mod greeks;
pub mod option;
pub mod quote;

pub use chain::*;
pub use contract::*;
pub use error::*;
pub use greeks::*;
pub use option::*;
pub use quote::*;
