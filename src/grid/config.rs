use anyhow::{anyhow, Result};

/// Sweep axes for the heatmap grid: spot on one axis, volatility on the
/// other, `resolution` evenly spaced points along each.
///
/// Invariants checked by [`GridSpec::validate`]: `spot_min < spot_max`,
/// `vol_min < vol_max`, all bounds positive, `resolution >= 2`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    #[cfg_attr(feature = "serde", serde(default = "default_spot_min"))]
    pub spot_min: f64,

    #[cfg_attr(feature = "serde", serde(default = "default_spot_max"))]
    pub spot_max: f64,

    #[cfg_attr(feature = "serde", serde(default = "default_vol_min"))]
    pub vol_min: f64,

    #[cfg_attr(feature = "serde", serde(default = "default_vol_max"))]
    pub vol_max: f64,

    /// Points per axis, so the grid holds resolution² cells
    #[cfg_attr(feature = "serde", serde(default = "default_resolution"))]
    pub resolution: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            spot_min: default_spot_min(),
            spot_max: default_spot_max(),
            vol_min: default_vol_min(),
            vol_max: default_vol_max(),
            resolution: default_resolution(),
        }
    }
}

impl GridSpec {
    /// Derive sweep bounds from headline inputs: spot swept over
    /// [0.8·S, 1.2·S] and volatility over [0.5·σ, 1.5·σ], with the
    /// volatility axis kept inside [0.01, 1.0].
    pub fn around(spot: f64, volatility: f64) -> Self {
        Self {
            spot_min: spot * 0.8,
            spot_max: spot * 1.2,
            vol_min: (volatility * 0.5).max(0.01),
            vol_max: (volatility * 1.5).min(1.0),
            ..Self::default()
        }
    }

    /// Denser 20x20 sweep for smoother heatmaps.
    pub fn fine() -> Self {
        Self {
            resolution: 20,
            ..Self::default()
        }
    }

    /// Sparse 5x5 sweep for quick checks.
    pub fn coarse() -> Self {
        Self {
            resolution: 5,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.spot_min > 0.0) || !self.spot_max.is_finite() {
            return Err(anyhow!(
                "Spot bounds must be positive and finite, got: [{}, {}]",
                self.spot_min,
                self.spot_max
            ));
        }
        if !(self.spot_min < self.spot_max) {
            return Err(anyhow!(
                "Spot bounds must satisfy min < max, got: [{}, {}]",
                self.spot_min,
                self.spot_max
            ));
        }
        if !(self.vol_min > 0.0) || !self.vol_max.is_finite() {
            return Err(anyhow!(
                "Volatility bounds must be positive and finite, got: [{}, {}]",
                self.vol_min,
                self.vol_max
            ));
        }
        if !(self.vol_min < self.vol_max) {
            return Err(anyhow!(
                "Volatility bounds must satisfy min < max, got: [{}, {}]",
                self.vol_min,
                self.vol_max
            ));
        }
        if self.resolution < 2 {
            return Err(anyhow!(
                "Grid resolution must be at least 2, got: {}",
                self.resolution
            ));
        }
        Ok(())
    }

    /// Parse and validate a spec from TOML text. Missing fields fall back
    /// to the defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let spec: Self = toml::from_str(raw)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Load a spec from a TOML file on disk.
    #[cfg(feature = "serde")]
    pub fn from_toml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}

fn default_spot_min() -> f64 {
    80.0
}

fn default_spot_max() -> f64 {
    120.0
}

fn default_vol_min() -> f64 {
    0.1
}

fn default_vol_max() -> f64 {
    0.3
}

fn default_resolution() -> usize {
    10
}
