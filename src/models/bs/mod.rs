// Closed-form Black-Scholes pricing for European calls and puts, plus the
// delta/gamma Greeks surfaced alongside the headline prices.  Implied
// volatility and higher-order Greeks are intentionally omitted to keep the
// lightweight focus of pnlgrid-lib.

use anyhow::Result;
use statrs::distribution::{Continuous, Normal};

use crate::market_params::MarketParams;

/// Theoretical call and put prices for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionPrices {
    pub call: f64,
    pub put: f64,
}

/// Delta and gamma under the same closed form.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Call delta, Φ(d1), in (0, 1)
    pub call_delta: f64,
    /// Put delta, Φ(d1) - 1, in (-1, 0)
    pub put_delta: f64,
    /// Gamma is identical for the call and the put
    pub gamma: f64,
}

/// Standard normal CDF: 0.5 * [1 + erf(x / sqrt(2))]
pub(crate) fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / (2.0_f64).sqrt()))
}

/// The d1/d2 pair shared by prices and Greeks. Callers must have validated
/// the parameters first.
fn d1_d2(p: &MarketParams) -> (f64, f64) {
    let sqrt_t = p.time_to_maturity.sqrt();
    let d1 = ((p.spot / p.strike).ln()
        + (p.risk_free_rate + 0.5 * p.volatility.powi(2)) * p.time_to_maturity)
        / (p.volatility * sqrt_t);
    let d2 = d1 - p.volatility * sqrt_t;
    (d1, d2)
}

/// Price a European call and put under Black-Scholes assumptions.
///
/// Rejects non-positive spot, strike, maturity or volatility with a
/// descriptive error rather than letting NaN leak into downstream grids.
pub fn price(params: &MarketParams) -> Result<OptionPrices> {
    params.validate()?;
    let (d1, d2) = d1_d2(params);
    let disc_strike = params.strike * (-params.risk_free_rate * params.time_to_maturity).exp();
    let call = params.spot * norm_cdf(d1) - disc_strike * norm_cdf(d2);
    let put = disc_strike * norm_cdf(-d2) - params.spot * norm_cdf(-d1);
    Ok(OptionPrices { call, put })
}

/// Delta and gamma for the same parameter set.
pub fn greeks(params: &MarketParams) -> Result<Greeks> {
    params.validate()?;
    let (d1, _d2) = d1_d2(params);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let call_delta = norm_cdf(d1);
    let gamma =
        normal.pdf(d1) / (params.spot * params.volatility * params.time_to_maturity.sqrt());
    Ok(Greeks {
        call_delta,
        put_delta: call_delta - 1.0,
        gamma,
    })
}
