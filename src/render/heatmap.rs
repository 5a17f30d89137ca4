use anyhow::{anyhow, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

// Anchor colors for the diverging scale: losses in red, gains in green,
// near-white around zero.
const LOSS: (u8, u8, u8) = (178, 24, 43);
const GAIN: (u8, u8, u8) = (26, 150, 65);
const MID: (u8, u8, u8) = (247, 247, 247);

/// Mapping from cell values to fill colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorScale {
    /// Red through white to green, centred at zero. For P&L matrices.
    Diverging,
    /// White-to-green ramp over the observed range. For price matrices.
    Sequential,
}

fn lerp(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    RGBColor(channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
}

impl ColorScale {
    /// Fill color for `value` given the observed [min, max] of the matrix.
    pub fn color(&self, value: f64, min: f64, max: f64) -> RGBColor {
        match self {
            ColorScale::Diverging => {
                let extent = min.abs().max(max.abs());
                if extent <= 0.0 {
                    return lerp(MID, MID, 0.0);
                }
                let t = (value / extent).clamp(-1.0, 1.0);
                if t < 0.0 {
                    lerp(MID, LOSS, -t)
                } else {
                    lerp(MID, GAIN, t)
                }
            }
            ColorScale::Sequential => {
                let span = max - min;
                if span <= 0.0 {
                    return lerp(MID, GAIN, 0.5);
                }
                lerp(MID, GAIN, (value - min) / span)
            }
        }
    }
}

fn axis_label(axis: &[f64], idx: i32) -> String {
    match usize::try_from(idx) {
        Ok(i) if i < axis.len() => format!("{:.2}", axis[i]),
        _ => String::new(),
    }
}

/// Render a grid matrix as an annotated SVG heatmap.
///
/// `matrix` follows the grid layout: rows = `vols`, columns = `spots`.
/// Every cell is filled from `scale` and annotated with its value, the way
/// the dashboard heatmaps label each cell.
pub fn render_heatmap(
    matrix: &[Vec<f64>],
    spots: &[f64],
    vols: &[f64],
    title: &str,
    scale: ColorScale,
    path: &str,
) -> Result<()> {
    if matrix.len() != vols.len() || matrix.iter().any(|row| row.len() != spots.len()) {
        return Err(anyhow!(
            "Matrix shape does not match axes: {} rows vs {} vols, expected {} columns",
            matrix.len(),
            vols.len(),
            spots.len()
        ));
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in matrix {
        for &value in row {
            min = min.min(value);
            max = max.max(value);
        }
    }

    let cols = spots.len() as i32;
    let rows = vols.len() as i32;

    let root = SVGBackend::new(path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 30))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..cols, 0..rows)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(spots.len())
        .y_labels(vols.len())
        .x_label_formatter(&|idx| axis_label(spots, *idx))
        .y_label_formatter(&|idx| axis_label(vols, *idx))
        .x_desc("Spot Price")
        .y_desc("Volatility")
        .draw()?;

    // Filled cells
    chart.draw_series(matrix.iter().enumerate().flat_map(|(i, row)| {
        row.iter().enumerate().map(move |(j, &value)| {
            Rectangle::new(
                [(j as i32, i as i32), (j as i32 + 1, i as i32 + 1)],
                scale.color(value, min, max).filled(),
            )
        })
    }))?;

    // Per-cell value annotations
    let annot_style = ("sans-serif", 13)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Bottom));
    for (i, row) in matrix.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            chart.draw_series(std::iter::once(Text::new(
                format!("{:.2}", value),
                (j as i32, i as i32),
                annot_style.clone(),
            )))?;
        }
    }

    root.present()?;
    Ok(())
}
