use anyhow::{anyhow, Result};
use std::io::Write;

/// Write a grid matrix as CSV: a header row of spot ticks, then one row per
/// volatility tick with the vol value in the leading column.
pub fn write_grid_csv<W: Write>(
    matrix: &[Vec<f64>],
    spots: &[f64],
    vols: &[f64],
    out: W,
) -> Result<()> {
    if matrix.len() != vols.len() || matrix.iter().any(|row| row.len() != spots.len()) {
        return Err(anyhow!(
            "Matrix shape does not match axes: {} rows vs {} vols, expected {} columns",
            matrix.len(),
            vols.len(),
            spots.len()
        ));
    }

    let mut writer = csv::Writer::from_writer(out);

    let mut header = vec!["vol/spot".to_string()];
    header.extend(spots.iter().map(|s| format!("{:.4}", s)));
    writer.write_record(&header)?;

    for (i, row) in matrix.iter().enumerate() {
        let mut record = vec![format!("{:.4}", vols[i])];
        record.extend(row.iter().map(|v| format!("{:.6}", v)));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
