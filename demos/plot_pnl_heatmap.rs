// demos/plot_pnl_heatmap.rs
// Sweeps the spot/volatility plane for one option setup and renders the four
// dashboard heatmaps (call/put price, call/put P&L) as SVG files, plus a CSV
// export of the call P&L matrix.
//
// Usage:
//     cargo run --example plot_pnl_heatmap [-- <grid_spec.toml>]
//
// Without an argument the sweep bounds are derived from the headline spot
// and volatility. Output files land in the working directory.

use std::env;
use std::fs::File;

use anyhow::Result;
use pnlgrid_lib::{
    evaluate, price, price_grid, render_heatmap, write_grid_csv, ColorScale, GridSpec,
    MarketParams, PurchasePrices,
};

fn main() -> Result<()> {
    let base = MarketParams::new(100.0, 100.0, 1.0, 0.2, 0.05)?;
    let purchase = PurchasePrices {
        call: 10.0,
        put: 10.0,
    };

    // Optional TOML override for the sweep axes
    let grid = match env::args().nth(1) {
        Some(path) => {
            println!("Loading grid spec from {}", path);
            GridSpec::from_toml_file(&path)?
        }
        None => GridSpec::around(base.spot, base.volatility),
    };

    let headline = price(&base)?;
    println!(
        "Headline: call ${:.4}, put ${:.4} (S={}, K={}, T={}y, vol={:.0}%, r={:.1}%)",
        headline.call,
        headline.put,
        base.spot,
        base.strike,
        base.time_to_maturity,
        base.volatility * 100.0,
        base.risk_free_rate * 100.0
    );
    println!(
        "Sweep: spot [{:.2}, {:.2}] x vol [{:.2}, {:.2}], resolution {}",
        grid.spot_min, grid.spot_max, grid.vol_min, grid.vol_max, grid.resolution
    );

    let prices = price_grid(&base, &grid)?;
    let pnl = evaluate(&base, &purchase, &grid)?;

    render_heatmap(
        &prices.call,
        &prices.spots,
        &prices.vols,
        "Call Price",
        ColorScale::Sequential,
        "call_price_heatmap.svg",
    )?;
    render_heatmap(
        &prices.put,
        &prices.spots,
        &prices.vols,
        "Put Price",
        ColorScale::Sequential,
        "put_price_heatmap.svg",
    )?;
    render_heatmap(
        &pnl.call_pnl,
        &pnl.spots,
        &pnl.vols,
        "Call Option P&L",
        ColorScale::Diverging,
        "call_pnl_heatmap.svg",
    )?;
    render_heatmap(
        &pnl.put_pnl,
        &pnl.spots,
        &pnl.vols,
        "Put Option P&L",
        ColorScale::Diverging,
        "put_pnl_heatmap.svg",
    )?;
    println!("Wrote call_price_heatmap.svg, put_price_heatmap.svg, call_pnl_heatmap.svg, put_pnl_heatmap.svg");

    let csv_file = File::create("call_pnl.csv")?;
    write_grid_csv(&pnl.call_pnl, &pnl.spots, &pnl.vols, csv_file)?;
    println!("Wrote call_pnl.csv");

    Ok(())
}
