//! Analytical aggregation over a [`Dataset`].
//!
//! All functions are pure: they borrow the dataset immutably and return
//! freshly built records. Missing data is reported as [`AnalysisError`],
//! never as a panic or a `NaN`.

use crate::continent::ContinentResolver;
use crate::error::AnalysisError;
use crate::geo::RegionLookup;
use crate::models::{
    AnalysisConfig, ComparisonResult, Continent, ContinentGrowth, CountryMetrics, CountryRow,
    CountryWinner, Dataset, MetricColumn, MetricFamily, SelectionSummary, ShareSlice, WorldMetrics,
    YearValue,
};
use crate::stats::{
    average_growth, extremes, growth_points, mean, mean_growth, pct_change, positive_growth_points,
};
use std::cmp::Ordering;
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, AnalysisError>;

/// Years of `family`, failing when the dataset has none.
fn family_years(dataset: &Dataset, family: MetricFamily) -> Result<Vec<i32>> {
    let years = dataset.years(family);
    if years.is_empty() {
        return Err(AnalysisError::NoMetricColumns(family));
    }
    Ok(years)
}

fn reference_column(
    dataset: &Dataset,
    family: MetricFamily,
    config: &AnalysisConfig,
) -> Result<MetricColumn> {
    let column = MetricColumn::new(family, config.reference_year);
    if !dataset.has_column(column) {
        return Err(AnalysisError::MissingColumn(column));
    }
    Ok(column)
}

fn row_series(row: &CountryRow, family: MetricFamily, years: &[i32]) -> Vec<(i32, Option<f64>)> {
    years.iter().map(|&y| (y, row.value(family, y))).collect()
}

fn lookup_row<'a>(dataset: &'a Dataset, country: &str) -> Result<&'a CountryRow> {
    dataset
        .row(country)
        .ok_or_else(|| AnalysisError::CountryNotFound(country.to_string()))
}

/// Actual value, extremes and average growth of one country.
pub fn analyze_country(
    dataset: &Dataset,
    country: &str,
    family: MetricFamily,
    config: &AnalysisConfig,
) -> Result<CountryMetrics> {
    let row = lookup_row(dataset, country)?;
    let years = family_years(dataset, family)?;
    let column = reference_column(dataset, family, config)?;
    let actual = row.get(column).ok_or_else(|| AnalysisError::MissingValue {
        country: country.to_string(),
        column,
    })?;

    let series = row_series(row, family, &years);
    // `actual` is present, so the series has at least one value.
    let (max, min) = extremes(&series).unwrap_or((
        YearValue::new(column.year, actual),
        YearValue::new(column.year, actual),
    ));

    Ok(CountryMetrics {
        family,
        actual,
        max,
        min,
        avg_growth_percent: average_growth(&series),
    })
}

/// Year-over-year growth points for one country (first year and unusable pairs omitted).
pub fn growth_series(
    dataset: &Dataset,
    country: &str,
    family: MetricFamily,
) -> Result<Vec<YearValue>> {
    let row = lookup_row(dataset, country)?;
    let years = family_years(dataset, family)?;
    Ok(growth_points(&row_series(row, family, &years)))
}

/// First element with the greatest key; later equal keys do not replace it.
fn first_max_by<T>(items: &[T], mut cmp: impl FnMut(&T, &T) -> Ordering) -> Option<&T> {
    let mut best: Option<&T> = None;
    for item in items {
        match best {
            Some(b) if cmp(item, b) != Ordering::Greater => {}
            _ => best = Some(item),
        }
    }
    best
}

/// Category winners across several countries. Countries that cannot be
/// analyzed are dropped; ties go to the earlier country in `countries`.
pub fn compare_countries(
    dataset: &Dataset,
    countries: &[String],
    family: MetricFamily,
    config: &AnalysisConfig,
) -> Result<ComparisonResult> {
    if countries.is_empty() {
        return Err(AnalysisError::EmptySelection);
    }

    let entries: Vec<CountryWinner> = countries
        .iter()
        .filter_map(|c| match analyze_country(dataset, c, family, config) {
            Ok(metrics) => Some(CountryWinner {
                country: c.clone(),
                metrics,
            }),
            Err(e) => {
                log::info!("dropping '{c}' from comparison: {e}");
                None
            }
        })
        .collect();

    let overall_max_gdp = first_max_by(&entries, |a, b| {
        a.metrics.max.value.total_cmp(&b.metrics.max.value)
    })
    .cloned()
    .ok_or(AnalysisError::NoComparableCountries)?;
    let overall_min_gdp = first_max_by(&entries, |a, b| {
        b.metrics.min.value.total_cmp(&a.metrics.min.value)
    })
    .cloned()
    .ok_or(AnalysisError::NoComparableCountries)?;

    let with_growth: Vec<&CountryWinner> = entries
        .iter()
        .filter(|e| e.metrics.avg_growth_percent.is_some())
        .collect();
    let highest_growth = first_max_by(&with_growth, |a, b| {
        let ga = a.metrics.avg_growth_percent.unwrap_or(f64::NEG_INFINITY);
        let gb = b.metrics.avg_growth_percent.unwrap_or(f64::NEG_INFINITY);
        ga.total_cmp(&gb)
    })
    .map(|w| (*w).clone());

    Ok(ComparisonResult {
        overall_max_gdp,
        overall_min_gdp,
        highest_growth,
    })
}

/// Column-wise sums over all countries (missing cells count as zero).
fn world_series(dataset: &Dataset, family: MetricFamily, years: &[i32]) -> Vec<(i32, Option<f64>)> {
    years
        .iter()
        .map(|&y| {
            let total: f64 = dataset
                .rows()
                .iter()
                .filter_map(|r| r.value(family, y))
                .sum();
            (y, Some(total))
        })
        .collect()
}

/// World totals per year plus the same summary shape as [`analyze_country`].
pub fn analyze_world(
    dataset: &Dataset,
    family: MetricFamily,
    config: &AnalysisConfig,
) -> Result<WorldMetrics> {
    let years = family_years(dataset, family)?;
    let column = reference_column(dataset, family, config)?;
    let series = world_series(dataset, family, &years);
    // Non-positive world totals never serve as a growth base.
    let growth = positive_growth_points(&series);

    let actual = series
        .iter()
        .find(|(y, _)| *y == column.year)
        .and_then(|(_, v)| *v)
        .unwrap_or(0.0);
    let (max, min) = extremes(&series).unwrap_or((
        YearValue::new(column.year, actual),
        YearValue::new(column.year, actual),
    ));

    Ok(WorldMetrics {
        family,
        actual,
        max,
        min,
        avg_growth_percent: mean_growth(&growth),
        world_total: series
            .iter()
            .filter_map(|&(y, v)| v.map(|v| YearValue::new(y, v)))
            .collect(),
        world_growth_data: growth,
    })
}

/// Mean total-GDP growth per continent for `year`, highest first.
///
/// Empty when `year` or `year - 1` is not a column of the dataset.
pub fn continent_growth<L: RegionLookup>(
    dataset: &Dataset,
    year: i32,
    resolver: &ContinentResolver<L>,
) -> Vec<ContinentGrowth> {
    continent_growth_for(dataset, MetricFamily::Total, year, resolver)
}

/// Same as [`continent_growth`] for an arbitrary metric family.
pub fn continent_growth_for<L: RegionLookup>(
    dataset: &Dataset,
    family: MetricFamily,
    year: i32,
    resolver: &ContinentResolver<L>,
) -> Vec<ContinentGrowth> {
    let Some(previous_year) = year.checked_sub(1) else {
        return Vec::new();
    };
    let current = MetricColumn::new(family, year);
    let previous = MetricColumn::new(family, previous_year);
    if !dataset.has_column(current) || !dataset.has_column(previous) {
        log::debug!("no {previous} -> {current} pair in dataset");
        return Vec::new();
    }

    // Private per-row records; the dataset itself is never touched.
    let rows: Vec<(Continent, f64)> = dataset
        .rows()
        .iter()
        .filter_map(|r| {
            match pct_change(r.get(previous), r.get(current)) {
                Some(g) => Some((resolver.resolve(&r.country), g)),
                None => {
                    log::debug!("'{}' has no usable {previous} -> {current} growth", r.country);
                    None
                }
            }
        })
        .collect();

    let mut groups: BTreeMap<Continent, Vec<f64>> = BTreeMap::new();
    for (continent, g) in rows {
        groups.entry(continent).or_default().push(g);
    }

    let mut out: Vec<ContinentGrowth> = groups
        .into_iter()
        .filter_map(|(continent, growths)| {
            mean(&growths).map(|growth| ContinentGrowth {
                continent,
                growth,
                countries: growths.len(),
            })
        })
        .collect();
    out.sort_by(|a, b| b.growth.total_cmp(&a.growth));
    out
}

/// Top `n` countries by reference-year value plus an "Others" slice with the rest.
///
/// Countries without a reference-year value are left out. The "Others" slice
/// is only present when more than `n` countries qualify.
pub fn top_share(
    dataset: &Dataset,
    family: MetricFamily,
    config: &AnalysisConfig,
    n: usize,
) -> Result<Vec<ShareSlice>> {
    family_years(dataset, family)?;
    let column = reference_column(dataset, family, config)?;

    let mut ranked: Vec<(&str, f64)> = dataset
        .rows()
        .iter()
        .filter_map(|r| r.get(column).map(|v| (r.country.as_str(), v)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let total: f64 = ranked.iter().map(|(_, v)| v).sum();
    let percent = |v: f64| if total != 0.0 { v / total * 100.0 } else { 0.0 };

    let mut out: Vec<ShareSlice> = ranked
        .iter()
        .take(n)
        .map(|&(label, value)| ShareSlice {
            label: label.to_string(),
            value,
            percent: percent(value),
        })
        .collect();
    if ranked.len() > n {
        let rest: f64 = ranked[n..].iter().map(|(_, v)| v).sum();
        out.push(ShareSlice {
            label: "Others".to_string(),
            value: rest,
            percent: percent(rest),
        });
    }
    Ok(out)
}

/// Empty selection -> world view; one country -> its metrics; more -> comparison.
pub fn summarize_selection(
    dataset: &Dataset,
    selection: &[String],
    family: MetricFamily,
    config: &AnalysisConfig,
) -> Result<SelectionSummary> {
    match selection {
        [] => analyze_world(dataset, family, config).map(SelectionSummary::World),
        [country] => analyze_country(dataset, country, family, config).map(|metrics| {
            SelectionSummary::Country(CountryWinner {
                country: country.clone(),
                metrics,
            })
        }),
        many => compare_countries(dataset, many, family, config).map(SelectionSummary::Comparison),
    }
}
