// demos/pricing_demo.rs

//! Demonstration of Black-Scholes pricing and the P&L grid sweep
//!
//! This example shows how to:
//! 1. Build validated market parameters
//! 2. Compute headline call/put prices and Greeks
//! 3. Sweep the spot/volatility plane into P&L matrices
//! 4. Check put-call parity on the headline values

use anyhow::Result;
use pnlgrid_lib::{evaluate, greeks, price, GridSpec, MarketParams, PurchasePrices};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing and P&L Grid Demo");
    println!("=======================================");

    let base = MarketParams::new(
        100.0, // spot
        100.0, // strike
        1.0,   // one year to maturity
        0.2,   // 20% annualized volatility
        0.05,  // 5% risk-free rate
    )?;
    let purchase = PurchasePrices {
        call: 10.0,
        put: 10.0,
    };

    println!("\nInputs:");
    println!("  Spot:             ${:.2}", base.spot);
    println!("  Strike:           ${:.2}", base.strike);
    println!("  Maturity:         {:.2} years", base.time_to_maturity);
    println!("  Volatility:       {:.1}%", base.volatility * 100.0);
    println!("  Risk-free rate:   {:.1}%", base.risk_free_rate * 100.0);
    println!("  Call purchased @  ${:.2}", purchase.call);
    println!("  Put purchased @   ${:.2}", purchase.put);

    println!("\nStep 1: Headline prices...");
    let headline = price(&base)?;
    println!("  CALL value: ${:.4}", headline.call);
    println!("  PUT value:  ${:.4}", headline.put);

    let g = greeks(&base)?;
    println!("  Call delta: {:.4}", g.call_delta);
    println!("  Put delta:  {:.4}", g.put_delta);
    println!("  Gamma:      {:.6}", g.gamma);

    // Put-call parity sanity check
    let parity_gap = headline.call - headline.put
        - (base.spot - base.strike * (-base.risk_free_rate * base.time_to_maturity).exp());
    println!("  Parity gap: {:.2e}", parity_gap);

    println!("\nStep 2: Sweeping the spot/volatility plane...");
    let grid = GridSpec::around(base.spot, base.volatility);
    println!(
        "  Spot axis: [{:.2}, {:.2}], vol axis: [{:.2}, {:.2}], {}x{} cells",
        grid.spot_min, grid.spot_max, grid.vol_min, grid.vol_max, grid.resolution, grid.resolution
    );

    let pnl = evaluate(&base, &purchase, &grid)?;

    println!("\nCall P&L by (volatility row, spot column):");
    print!("{:>8}", "vol\\spot");
    for spot in &pnl.spots {
        print!("{:>9.1}", spot);
    }
    println!();
    for (i, vol) in pnl.vols.iter().enumerate() {
        print!("{:>8.2}", vol);
        for value in &pnl.call_pnl[i] {
            print!("{:>9.2}", value);
        }
        println!();
    }

    // Summary statistics across the call P&L surface
    let cells: Vec<f64> = pnl.call_pnl.iter().flatten().copied().collect();
    let best = cells.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let worst = cells.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let profitable = cells.iter().filter(|&&v| v > 0.0).count();

    println!("\nSummary Statistics:");
    println!("  Best call P&L:  ${:.2}", best);
    println!("  Worst call P&L: ${:.2}", worst);
    println!(
        "  Profitable cells: {}/{} ({:.0}%)",
        profitable,
        cells.len(),
        100.0 * profitable as f64 / cells.len() as f64
    );

    Ok(())
}
