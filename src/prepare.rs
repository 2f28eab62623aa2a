//! In-memory data preparation: header standardization, value coercion,
//! population merge and per-capita derivation.

use crate::models::{CountryRow, Dataset, MetricColumn, MetricFamily};
use ahash::AHashMap;
use anyhow::{Result, bail};
use regex::Regex;
use std::sync::OnceLock;

/// GDP in the source tables is expressed in billions of USD.
pub const GDP_UNIT: f64 = 1_000_000_000.0;

const COUNTRY_HEADERS: &[&str] = &["Country", "Country/Territory"];
const POPULATION_HEADERS: &[&str] = &["2022 Population", "Population"];

/// `"2021"` -> `"GDP_2021"`; every other header is returned trimmed.
pub fn standardize_header(header: &str) -> String {
    let h = header.trim();
    if h.len() == 4 && h.chars().all(|c| c.is_ascii_digit()) {
        MetricFamily::Total.column_name(h.parse().unwrap_or_default())
    } else {
        h.to_string()
    }
}

fn grouped_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?\d{1,3}(,\d{3})+(\.\d*)?$").expect("static grouping pattern is valid")
    })
}

/// Numeric cell, or `None` for empty / non-numeric / non-finite text.
///
/// Surrounding whitespace is tolerated, and so are `,` thousands separators
/// when every group after the first has exactly three digits. Anything else
/// with a comma (`"1,5"`) is ambiguous and yields `None`.
pub fn coerce_number(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    let parsed = if cell.contains(',') {
        if !grouped_regex().is_match(cell) {
            return None;
        }
        cell.replace(',', "").parse::<f64>()
    } else {
        cell.parse::<f64>()
    };
    parsed.ok().filter(|v| v.is_finite())
}

fn find_header(headers: &[String], candidates: &[&str]) -> Option<usize> {
    candidates
        .iter()
        .find_map(|c| headers.iter().position(|h| h == c))
}

/// Build a [`Dataset`] from a header row and string records.
///
/// Bare year headers are renamed to `GDP_<year>` first. A `Country` column is
/// required; a `Population` column is optional. Other columns are ignored.
pub fn build_dataset<I, R>(headers: &[String], records: I) -> Result<Dataset>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[String]>,
{
    let headers: Vec<String> = headers.iter().map(|h| standardize_header(h)).collect();
    let Some(country_idx) = find_header(&headers, COUNTRY_HEADERS) else {
        bail!("table has no Country column (headers: {})", headers.join(", "));
    };
    let population_idx = headers.iter().position(|h| h == "Population");
    let metric_cols: Vec<(usize, MetricColumn)> = headers
        .iter()
        .enumerate()
        .filter_map(|(i, h)| MetricColumn::parse(h).map(|c| (i, c)))
        .collect();

    let mut ds = Dataset::new();
    for (_, col) in &metric_cols {
        ds.add_column(*col);
    }
    for record in records {
        let record = record.as_ref();
        let Some(country) = record.get(country_idx).map(|s| s.trim()) else {
            continue;
        };
        if country.is_empty() {
            continue;
        }
        let mut row = CountryRow::new(country)
            .with_population(population_idx.and_then(|i| record.get(i)).and_then(|s| coerce_number(s)));
        for (i, col) in &metric_cols {
            row.set(*col, record.get(*i).and_then(|s| coerce_number(s)));
        }
        ds.push(row);
    }
    log::info!(
        "prepared dataset: {} countries, {} metric columns",
        ds.len(),
        metric_cols.len()
    );
    Ok(ds)
}

/// Population of one country at the reference year.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationRecord {
    pub country: String,
    pub population: Option<f64>,
}

/// Extract population records; the key column is `Country/Territory` or
/// `Country`, the value column `2022 Population` or `Population`.
pub fn population_records<I, R>(headers: &[String], records: I) -> Result<Vec<PopulationRecord>>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[String]>,
{
    let headers: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
    let Some(country_idx) = find_header(&headers, COUNTRY_HEADERS) else {
        bail!("population table has no country column");
    };
    let Some(pop_idx) = find_header(&headers, POPULATION_HEADERS) else {
        bail!("population table has no population column");
    };
    Ok(records
        .into_iter()
        .filter_map(|r| {
            let r = r.as_ref();
            let country = r.get(country_idx)?.trim().to_string();
            Some(PopulationRecord {
                country,
                population: r.get(pop_idx).and_then(|s| coerce_number(s)),
            })
        })
        .collect())
}

/// Left-join population onto `dataset` by country name and derive
/// `GDP_per_capita_<year>` for every total-GDP year.
///
/// Returns a new dataset; the input is untouched. Countries without a positive
/// population get empty per-capita cells.
pub fn merge_population(dataset: &Dataset, population: &[PopulationRecord]) -> Dataset {
    let by_country: AHashMap<&str, Option<f64>> = population
        .iter()
        .map(|p| (p.country.as_str(), p.population))
        .collect();
    let years = dataset.years(MetricFamily::Total);

    let mut out = Dataset::new();
    for col in dataset.columns() {
        out.add_column(col);
    }
    for &y in &years {
        out.add_column(MetricColumn::new(MetricFamily::PerCapita, y));
    }

    let mut unmatched = 0usize;
    for row in dataset.rows() {
        let pop = match by_country.get(row.country.as_str()) {
            Some(p) => *p,
            None => {
                unmatched += 1;
                row.population
            }
        };
        let mut merged = row.clone().with_population(pop);
        for &y in &years {
            let per_capita = match (row.value(MetricFamily::Total, y), pop) {
                (Some(gdp), Some(p)) if p > 0.0 => Some(gdp * GDP_UNIT / p),
                _ => None,
            };
            merged.set(MetricColumn::new(MetricFamily::PerCapita, y), per_capita);
        }
        out.push(merged);
    }
    if unmatched > 0 {
        log::warn!("{unmatched} country row(s) had no population match");
    }
    out
}
