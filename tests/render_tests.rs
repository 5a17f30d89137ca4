use pnlgrid_lib::{
    evaluate, render_heatmap, write_grid_csv, ColorScale, GridSpec, MarketParams, PurchasePrices,
};

fn small_pnl_grid() -> pnlgrid_lib::PnlGrid {
    let base = MarketParams::new(100.0, 100.0, 1.0, 0.2, 0.05).expect("valid params");
    let purchase = PurchasePrices {
        call: 10.0,
        put: 10.0,
    };
    let grid = GridSpec {
        spot_min: 80.0,
        spot_max: 120.0,
        vol_min: 0.1,
        vol_max: 0.3,
        resolution: 3,
    };
    evaluate(&base, &purchase, &grid).expect("evaluate failed")
}

/// Diverging scale: losses land on the red side, gains on the green side,
/// zero sits at the near-white midpoint.
#[test]
fn test_diverging_color_scale_sign() {
    let scale = ColorScale::Diverging;

    let loss = scale.color(-5.0, -5.0, 5.0);
    let gain = scale.color(5.0, -5.0, 5.0);
    let zero = scale.color(0.0, -5.0, 5.0);

    assert!(loss.0 > loss.1, "Loss should be red-dominant: {:?}", loss);
    assert!(gain.1 > gain.0, "Gain should be green-dominant: {:?}", gain);
    assert_eq!(zero, scale.color(0.0, -1.0, 1.0), "Zero is scale-invariant");
    // Midpoint is near-white
    assert!(zero.0 > 230 && zero.1 > 230 && zero.2 > 230);

    // Symmetric magnitudes map to full saturation regardless of which side
    // of the range is wider
    let deep_loss = scale.color(-10.0, -10.0, 2.0);
    assert_eq!(deep_loss, scale.color(-10.0, -10.0, 10.0));
}

/// Sequential scale ramps monotonically from the range minimum to maximum.
#[test]
fn test_sequential_color_scale_ramp() {
    let scale = ColorScale::Sequential;

    let low = scale.color(0.0, 0.0, 10.0);
    let mid = scale.color(5.0, 0.0, 10.0);
    let high = scale.color(10.0, 0.0, 10.0);

    // Red channel fades as values climb toward green
    assert!(low.0 >= mid.0 && mid.0 >= high.0);
    // Flat matrices do not divide by zero
    let flat = scale.color(3.0, 3.0, 3.0);
    assert!(flat.0 > 0);
}

/// CSV layout: header of spot ticks, one row per vol tick, leading vol column.
#[test]
fn test_write_grid_csv_layout() {
    let pnl = small_pnl_grid();

    let mut out = Vec::new();
    write_grid_csv(&pnl.call_pnl, &pnl.spots, &pnl.vols, &mut out).expect("CSV export failed");

    let text = String::from_utf8(out).expect("CSV should be UTF-8");
    let lines: Vec<&str> = text.trim_end().lines().collect();

    // Header + one line per volatility tick
    assert_eq!(lines.len(), 1 + pnl.vols.len());
    assert!(lines[0].starts_with("vol/spot,80.0000,100.0000,120.0000"));
    assert!(lines[1].starts_with("0.1000,"));
    assert!(lines[3].starts_with("0.3000,"));

    // Every data row carries one cell per spot tick plus the vol column
    for line in &lines[1..] {
        assert_eq!(line.split(',').count(), pnl.spots.len() + 1);
    }
}

/// Shape mismatches are rejected by both exporters.
#[test]
fn test_shape_mismatch_rejected() {
    let pnl = small_pnl_grid();
    let wrong_vols = vec![0.1, 0.2];

    let mut out = Vec::new();
    assert!(write_grid_csv(&pnl.call_pnl, &pnl.spots, &wrong_vols, &mut out).is_err());

    let path = std::env::temp_dir().join("pnlgrid_shape_mismatch.svg");
    let result = render_heatmap(
        &pnl.call_pnl,
        &pnl.spots,
        &wrong_vols,
        "Call P&L",
        ColorScale::Diverging,
        path.to_str().expect("temp path should be valid UTF-8"),
    );
    assert!(result.is_err());
}

/// Smoke test: rendering produces a non-empty SVG document.
#[test]
fn test_render_heatmap_smoke() {
    let pnl = small_pnl_grid();
    let path = std::env::temp_dir().join("pnlgrid_call_pnl_test.svg");
    let path_str = path.to_str().expect("temp path should be valid UTF-8");

    render_heatmap(
        &pnl.call_pnl,
        &pnl.spots,
        &pnl.vols,
        "Call Option P&L",
        ColorScale::Diverging,
        path_str,
    )
    .expect("render failed");

    let contents = std::fs::read_to_string(&path).expect("SVG file should exist");
    assert!(contents.contains("<svg"), "Output should be an SVG document");
    assert!(!contents.is_empty());

    let _ = std::fs::remove_file(&path);
}
