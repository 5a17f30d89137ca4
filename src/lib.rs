//! # Pnlgrid-Lib: Black-Scholes Pricing and P&L Heatmap Grids
//!
//! `pnlgrid-lib` computes closed-form Black-Scholes option prices and sweeps
//! them across spot/volatility ranges, producing the call and put P&L
//! matrices behind interactive heatmap dashboards.
//!
//! ## Core Features
//!
//! - **Pricer**: European call/put prices plus delta and gamma from the
//!   closed form, with fail-fast input validation
//! - **Grid Evaluator**: `resolution x resolution` P&L and price matrices
//!   over evenly spaced spot and volatility axes
//! - **Rendering Helpers**: annotated SVG heatmaps (`plotters`) and CSV
//!   export of any grid matrix
//!
//! ## Quick Start
//!
//! ```rust
//! use pnlgrid_lib::{evaluate, price, GridSpec, MarketParams, PurchasePrices};
//!
//! // Headline prices for a single parameter set
//! let base = MarketParams::new(100.0, 100.0, 1.0, 0.2, 0.05)?;
//! let headline = price(&base)?;
//! println!("call ${:.4} / put ${:.4}", headline.call, headline.put);
//!
//! // P&L sweep around the headline inputs
//! let purchase = PurchasePrices { call: 10.0, put: 10.0 };
//! let grid = GridSpec::around(base.spot, base.volatility);
//! let pnl = evaluate(&base, &purchase, &grid)?;
//! assert_eq!(pnl.resolution(), grid.resolution);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Axis Convention
//!
//! Grid matrices are indexed `[vol][spot]`: rows follow the volatility axis
//! and columns the spot axis. The `spots` and `vols` vectors on each grid
//! carry the tick values in matching order, so renderers can map matrix
//! indices directly to axis labels.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod grid;
pub mod market_params;
pub mod models;
pub mod render;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Core parameter and result types
pub use market_params::MarketParams;
pub use models::bs::{Greeks, OptionPrices};

// Pricer entry points
pub use models::bs::{greeks, price};

// Grid sweep types and entry points
pub use grid::{evaluate, linspace, price_grid, GridSpec, PnlGrid, PriceGrid, PurchasePrices};

// Rendering helpers
pub use render::{render_heatmap, write_grid_csv, ColorScale};
