//! Spot/volatility grid sweep
//!
//! Builds the evenly spaced spot and volatility axes and evaluates the
//! Black-Scholes pricer at every cell, producing the P&L and price matrices
//! that back the heatmap views.

pub mod config;
pub mod evaluator;
pub mod types;

pub use config::GridSpec;
pub use evaluator::{evaluate, linspace, price_grid};
pub use types::{PnlGrid, PriceGrid, PurchasePrices};
