//! Data fetching
//!
//! Yahoo Finance API client for quotes, expirations, and option chains.

pub mod yahoo;

pub use yahoo::*;
