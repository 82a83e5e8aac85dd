//! Option Greeks
//!
//! First and second order sensitivities for a single option.
//! All values are in raw model units: theta per year, vega per unit
//! of volatility, rho per unit of rate.

use serde::{Deserialize, Serialize};

/// Option Greeks (sensitivities)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta: dV/dS (sensitivity to spot)
    pub delta: f64,
    /// Gamma: d²V/dS² (sensitivity of delta to spot)
    pub gamma: f64,
    /// Vega: dV/dσ (sensitivity to volatility)
    pub vega: f64,
    /// Theta: dV/dt (time decay, per year)
    pub theta: f64,
    /// Rho: dV/dr (sensitivity to interest rate)
    pub rho: f64,
}

impl Greeks {
    pub fn new(delta: f64, gamma: f64, vega: f64, theta: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            vega,
            theta,
            rho,
        }
    }
}
