/// Purchase prices paid for the call and the put, the baseline for P&L.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PurchasePrices {
    pub call: f64,
    pub put: f64,
}

/// P&L matrices over the (volatility, spot) sweep.
///
/// Rows index the volatility axis and columns the spot axis:
/// `call_pnl[i][j]` belongs to `vols[i]` and `spots[j]`. Renderers map the
/// matrix indices straight onto axis tick labels, so this layout is part of
/// the contract.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PnlGrid {
    /// Spot axis, evenly spaced, endpoints inclusive
    pub spots: Vec<f64>,
    /// Volatility axis, evenly spaced, endpoints inclusive
    pub vols: Vec<f64>,
    /// Call price minus call purchase price per cell
    pub call_pnl: Vec<Vec<f64>>,
    /// Put price minus put purchase price per cell
    pub put_pnl: Vec<Vec<f64>>,
}

impl PnlGrid {
    /// Number of points along each axis.
    pub fn resolution(&self) -> usize {
        self.spots.len()
    }
}

/// Raw call and put price matrices over the same sweep, same layout as
/// [`PnlGrid`] but without a purchase-price baseline.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceGrid {
    pub spots: Vec<f64>,
    pub vols: Vec<f64>,
    pub call: Vec<Vec<f64>>,
    pub put: Vec<Vec<f64>>,
}

impl PriceGrid {
    pub fn resolution(&self) -> usize {
        self.spots.len()
    }
}
