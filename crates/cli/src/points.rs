//! CSV point I/O: an `x,y` table read and written through polars.

use anyhow::{anyhow, bail, Context, Result};
use nearest::Point;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Read points from a CSV with numeric `x` and `y` columns.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let xs = column_f64(&df, "x")?;
    let ys = column_f64(&df, "y")?;
    let points: Vec<Point> = xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| Point::new(x, y))
        .collect();
    validate_points(&points)?;
    Ok(points)
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.ok_or_else(|| anyhow!("null `{name}` at row {row}")))
        .collect()
}

/// Solvers assume finite coordinates; reject anything else up front.
pub fn validate_points(points: &[Point]) -> Result<()> {
    if let Some((row, p)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
    {
        bail!("non-finite coordinate at row {row}: ({}, {})", p.x, p.y);
    }
    Ok(())
}

/// Write points as an `x,y` CSV with header.
pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = DataFrame::new(vec![Series::new("x".into(), xs), Series::new("y".into(), ys)])?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
