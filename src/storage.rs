use crate::models::Dataset;
use crate::prepare::{self, PopulationRecord};
use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn read_table<P: AsRef<Path>>(path: P) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for rec in rdr.records() {
        let rec = rec.with_context(|| format!("read {}", path.display()))?;
        rows.push(rec.iter().map(str::to_string).collect());
    }
    Ok((headers, rows))
}

/// Load a wide GDP table (`Country`, then one column per year) into a [`Dataset`].
pub fn load_dataset_csv<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let (headers, rows) = read_table(path)?;
    log::info!("loaded {} rows from {}", rows.len(), path.display());
    prepare::build_dataset(&headers, rows).with_context(|| format!("prepare {}", path.display()))
}

/// Load a population table for [`prepare::merge_population`].
pub fn load_population_csv<P: AsRef<Path>>(path: P) -> Result<Vec<PopulationRecord>> {
    let path = path.as_ref();
    let (headers, rows) = read_table(path)?;
    prepare::population_records(&headers, rows).with_context(|| format!("prepare {}", path.display()))
}

/// Save flat records as CSV with header.
pub fn save_csv<T: Serialize, P: AsRef<Path>>(rows: &[T], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save any result as pretty JSON.
pub fn save_json<T: Serialize + ?Sized, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(value)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MetricFamily, YearValue};
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let pts = vec![YearValue::new(2021, 1.5), YearValue::new(2022, 2.5)];
        save_csv(&pts, &csvp).unwrap();
        save_json(&pts, &jsonp).unwrap();
        let txt = std::fs::read_to_string(&csvp).unwrap();
        assert!(txt.starts_with("year,value"));
        assert_eq!(txt.lines().count(), 3);
        assert!(jsonp.exists());
    }

    #[test]
    fn loads_wide_table() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("gdp.csv");
        std::fs::write(&p, "Country,2024,2025\nChile,300,330\nPeru,,250\n").unwrap();
        let ds = load_dataset_csv(&p).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.row("Chile").unwrap().value(MetricFamily::Total, 2025), Some(330.0));
        assert_eq!(ds.row("Peru").unwrap().value(MetricFamily::Total, 2024), None);
    }
}
