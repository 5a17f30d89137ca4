use anyhow::{anyhow, Result};

/// Market inputs for a single Black-Scholes evaluation.
///
/// Immutable per evaluation: the grid sweep constructs a fresh value for
/// every (spot, volatility) cell instead of mutating shared state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParams {
    /// Current price of the underlying asset
    pub spot: f64,
    /// Strike price of the option
    pub strike: f64,
    /// Time to expiration in years
    pub time_to_maturity: f64,
    /// Annualized volatility (as decimal, e.g. 0.2 for 20%)
    pub volatility: f64,
    /// Continuously compounded risk-free rate (as decimal)
    pub risk_free_rate: f64,
}

impl MarketParams {
    /// Validating constructor; see [`MarketParams::validate`] for the rules.
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_maturity: f64,
        volatility: f64,
        risk_free_rate: f64,
    ) -> Result<Self> {
        let params = Self {
            spot,
            strike,
            time_to_maturity,
            volatility,
            risk_free_rate,
        };
        params.validate()?;
        Ok(params)
    }

    /// Spot, strike, maturity and volatility must be strictly positive,
    /// otherwise d1/d2 are undefined (log of non-positive or division by
    /// zero). The rate may be negative but must be finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.spot > 0.0) {
            return Err(anyhow!("Spot price must be positive, got: {}", self.spot));
        }
        if !(self.strike > 0.0) {
            return Err(anyhow!(
                "Strike price must be positive, got: {}",
                self.strike
            ));
        }
        if !(self.time_to_maturity > 0.0) {
            return Err(anyhow!(
                "Time to maturity must be positive, got: {}",
                self.time_to_maturity
            ));
        }
        if !(self.volatility > 0.0) {
            return Err(anyhow!(
                "Volatility must be positive, got: {}",
                self.volatility
            ));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(anyhow!(
                "Risk-free rate must be finite, got: {}",
                self.risk_free_rate
            ));
        }
        Ok(())
    }

    /// Copy with spot and volatility replaced, everything else held fixed.
    /// This is the per-cell constructor used by the grid sweep.
    pub fn with_spot_vol(&self, spot: f64, volatility: f64) -> Self {
        Self {
            spot,
            volatility,
            ..*self
        }
    }
}
