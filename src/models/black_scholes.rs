//! Black-Scholes Model
//!
//! Closed-form European option pricing and the five standard Greeks.
//!
//! All outputs share one normalization: theta is per year (negative for a
//! long position under time decay), vega is per unit of volatility (1.0 =
//! 100 vol points), rho is per unit of rate. Cost of carry is fixed at the
//! risk-free rate; there is no dividend-yield input.
//!
//! Every function validates its inputs and fails fast with
//! [`Error::InvalidParameter`](crate::core::Error::InvalidParameter) rather
//! than propagating NaN. The degenerate cases `time == 0` and
//! `volatility == 0` return intrinsic-value prices and zero decay-sensitive
//! Greeks.

use std::f64::consts::PI;

use statrs::distribution::{ContinuousCDF, Normal};

use crate::core::{Error, Greeks, OptionType, Result};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Inputs for one pricing-model evaluation.
///
/// A pure value, constructed fresh per contract per evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParameters {
    /// Underlying spot price (must be positive)
    pub underlying: f64,
    /// Strike price (must be positive)
    pub strike: f64,
    /// Continuously-compounded risk-free rate (may be zero or negative)
    pub rate: f64,
    /// Annualized volatility as a decimal, e.g. 0.25 for 25%
    pub volatility: f64,
    /// Time to expiry in years (non-negative)
    pub time: f64,
    /// Call or put
    pub option_type: OptionType,
}

impl OptionParameters {
    pub fn new(
        underlying: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        time: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            underlying,
            strike,
            rate,
            volatility,
            time,
            option_type,
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.underlying.is_finite() || self.underlying <= 0.0 {
            return Err(Error::invalid_parameter(format!(
                "underlying price must be positive, got {}",
                self.underlying
            )));
        }
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(Error::invalid_parameter(format!(
                "strike must be positive, got {}",
                self.strike
            )));
        }
        if !self.rate.is_finite() {
            return Err(Error::invalid_parameter("rate must be finite"));
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(Error::invalid_parameter(format!(
                "volatility must be non-negative, got {}",
                self.volatility
            )));
        }
        if !self.time.is_finite() || self.time < 0.0 {
            return Err(Error::invalid_parameter(format!(
                "time to expiry must be non-negative, got {}",
                self.time
            )));
        }
        Ok(())
    }

    /// Expiry-now or zero-vol case, where the d1/d2 terms are undefined
    fn is_degenerate(&self) -> bool {
        self.time == 0.0 || self.volatility == 0.0
    }
}

/// Black-Scholes d1 term
pub fn d1(p: &OptionParameters) -> f64 {
    let variance_drift = p.rate + 0.5 * p.volatility * p.volatility;
    ((p.underlying / p.strike).ln() + variance_drift * p.time)
        / (p.volatility * p.time.sqrt())
}

/// Black-Scholes d2 term
pub fn d2(p: &OptionParameters) -> f64 {
    d1(p) - p.volatility * p.time.sqrt()
}

/// Theoretical European option price
pub fn price(p: &OptionParameters) -> Result<f64> {
    p.validate()?;

    if p.time == 0.0 {
        return Ok(p.option_type.intrinsic(p.underlying, p.strike));
    }
    if p.volatility == 0.0 {
        // Deterministic forward: discounted intrinsic
        let forward = p.underlying * (p.rate * p.time).exp();
        let df = (-p.rate * p.time).exp();
        return Ok(df * p.option_type.intrinsic(forward, p.strike));
    }

    let d1 = d1(p);
    let d2 = d2(p);
    let df = (-p.rate * p.time).exp();

    Ok(match p.option_type {
        OptionType::Call => p.underlying * norm_cdf(d1) - p.strike * df * norm_cdf(d2),
        OptionType::Put => p.strike * df * norm_cdf(-d2) - p.underlying * norm_cdf(-d1),
    })
}

/// Delta: dV/dS
pub fn delta(p: &OptionParameters) -> Result<f64> {
    p.validate()?;

    if p.is_degenerate() {
        return Ok(match p.option_type {
            OptionType::Call => {
                if p.underlying > p.strike {
                    1.0
                } else {
                    0.0
                }
            }
            OptionType::Put => {
                if p.underlying < p.strike {
                    -1.0
                } else {
                    0.0
                }
            }
        });
    }

    let d1 = d1(p);
    Ok(match p.option_type {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => norm_cdf(d1) - 1.0,
    })
}

/// Gamma: d²V/dS² (side-independent)
pub fn gamma(p: &OptionParameters) -> Result<f64> {
    p.validate()?;

    if p.is_degenerate() {
        return Ok(0.0);
    }

    let d1 = d1(p);
    Ok(norm_pdf(d1) / (p.underlying * p.volatility * p.time.sqrt()))
}

/// Vega: dV/dσ, per unit of volatility (side-independent)
pub fn vega(p: &OptionParameters) -> Result<f64> {
    p.validate()?;

    if p.is_degenerate() {
        return Ok(0.0);
    }

    let d1 = d1(p);
    Ok(p.underlying * norm_pdf(d1) * p.time.sqrt())
}

/// Theta: dV/dt, per year
pub fn theta(p: &OptionParameters) -> Result<f64> {
    p.validate()?;

    if p.is_degenerate() {
        return Ok(0.0);
    }

    let d1 = d1(p);
    let d2 = d2(p);
    let df = (-p.rate * p.time).exp();
    let decay = -p.underlying * norm_pdf(d1) * p.volatility / (2.0 * p.time.sqrt());

    Ok(match p.option_type {
        OptionType::Call => decay - p.rate * p.strike * df * norm_cdf(d2),
        OptionType::Put => decay + p.rate * p.strike * df * norm_cdf(-d2),
    })
}

/// Rho: dV/dr, per unit of rate
pub fn rho(p: &OptionParameters) -> Result<f64> {
    p.validate()?;

    if p.is_degenerate() {
        return Ok(0.0);
    }

    let d2 = d2(p);
    let df = (-p.rate * p.time).exp();

    Ok(match p.option_type {
        OptionType::Call => p.strike * p.time * df * norm_cdf(d2),
        OptionType::Put => -p.strike * p.time * df * norm_cdf(-d2),
    })
}

/// All five Greeks in one call
pub fn greeks(p: &OptionParameters) -> Result<Greeks> {
    Ok(Greeks::new(
        delta(p)?,
        gamma(p)?,
        vega(p)?,
        theta(p)?,
        rho(p)?,
    ))
}
