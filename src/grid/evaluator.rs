use anyhow::Result;

use crate::grid::config::GridSpec;
use crate::grid::types::{PnlGrid, PriceGrid, PurchasePrices};
use crate::market_params::MarketParams;
use crate::models::bs;

/// `n` evenly spaced values over [lo, hi], both endpoints included exactly.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| lo + step * i as f64).collect();
            // Accumulated rounding can drift the last tick off hi; renderers
            // label the endpoints, so pin it.
            values[n - 1] = hi;
            values
        }
    }
}

/// Sweep the spot/volatility plane and compute P&L against purchase prices.
///
/// Strike, maturity and rate are held at `base`'s values; `base.spot` and
/// `base.volatility` only seed the headline view and are ignored here in
/// favour of the grid axes. The first pricing error aborts the whole sweep,
/// no partial grid is ever returned.
pub fn evaluate(
    base: &MarketParams,
    purchase: &PurchasePrices,
    grid: &GridSpec,
) -> Result<PnlGrid> {
    base.validate()?;
    grid.validate()?;

    let spots = linspace(grid.spot_min, grid.spot_max, grid.resolution);
    let vols = linspace(grid.vol_min, grid.vol_max, grid.resolution);

    let mut call_pnl = vec![vec![0.0; spots.len()]; vols.len()];
    let mut put_pnl = vec![vec![0.0; spots.len()]; vols.len()];

    for (i, &vol) in vols.iter().enumerate() {
        for (j, &spot) in spots.iter().enumerate() {
            let prices = bs::price(&base.with_spot_vol(spot, vol))?;
            call_pnl[i][j] = prices.call - purchase.call;
            put_pnl[i][j] = prices.put - purchase.put;
        }
    }

    Ok(PnlGrid {
        spots,
        vols,
        call_pnl,
        put_pnl,
    })
}

/// Same sweep as [`evaluate`] but returning raw call/put prices, for the
/// price heatmaps shown next to the P&L ones.
pub fn price_grid(base: &MarketParams, grid: &GridSpec) -> Result<PriceGrid> {
    base.validate()?;
    grid.validate()?;

    let spots = linspace(grid.spot_min, grid.spot_max, grid.resolution);
    let vols = linspace(grid.vol_min, grid.vol_max, grid.resolution);

    let mut call = vec![vec![0.0; spots.len()]; vols.len()];
    let mut put = vec![vec![0.0; spots.len()]; vols.len()];

    for (i, &vol) in vols.iter().enumerate() {
        for (j, &spot) in spots.iter().enumerate() {
            let prices = bs::price(&base.with_spot_vol(spot, vol))?;
            call[i][j] = prices.call;
            put[i][j] = prices.put;
        }
    }

    Ok(PriceGrid {
        spots,
        vols,
        call,
        put,
    })
}
