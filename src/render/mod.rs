//! Presentation helpers: annotated SVG heatmaps and CSV export for the grid
//! matrices. The numeric core never depends on this module; it exists so
//! the demo binaries and downstream dashboards share one rendering path.

pub mod export;
pub mod heatmap;

pub use export::write_grid_csv;
pub use heatmap::{render_heatmap, ColorScale};
