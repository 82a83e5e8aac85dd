//! Pricing models
//!
//! Black-Scholes closed-form pricing and Greeks for European options.

pub mod black_scholes;

pub use black_scholes::*;
