//! Series primitives shared by the per-country and world analyses.
//!
//! A series is a year-ascending slice of `(year, Option<value>)`. Gaps are
//! `None`; nothing here ever produces `NaN`.

use crate::models::YearValue;

/// Round to 2 decimal places.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Percent change from `prev` to `cur`; `None` if either is missing or `prev` is zero.
pub fn pct_change(prev: Option<f64>, cur: Option<f64>) -> Option<f64> {
    match (prev, cur) {
        (Some(p), Some(c)) if p != 0.0 => Some((c - p) / p * 100.0),
        _ => None,
    }
}

/// Largest and smallest present values with their years.
/// Ties go to the earliest year.
pub fn extremes(series: &[(i32, Option<f64>)]) -> Option<(YearValue, YearValue)> {
    let mut present = series
        .iter()
        .filter_map(|&(year, v)| v.map(|v| YearValue::new(year, v)));
    let first = present.next()?;
    let (mut max, mut min) = (first, first);
    for yv in present {
        if yv.value > max.value {
            max = yv;
        }
        if yv.value < min.value {
            min = yv;
        }
    }
    Some((max, min))
}

fn growth_points_where(
    series: &[(i32, Option<f64>)],
    usable_base: impl Fn(f64) -> bool,
) -> Vec<YearValue> {
    series
        .windows(2)
        .filter(|w| w[1].0 == w[0].0 + 1)
        .filter(|w| w[0].1.is_some_and(&usable_base))
        .filter_map(|w| pct_change(w[0].1, w[1].1).map(|g| YearValue::new(w[1].0, g)))
        .collect()
}

/// Year-over-year growth for every year whose predecessor (`year - 1`) is in
/// the series with a present, nonzero value and whose own value is present.
pub fn growth_points(series: &[(i32, Option<f64>)]) -> Vec<YearValue> {
    growth_points_where(series, |_| true)
}

/// Like [`growth_points`], but a predecessor must be strictly positive.
pub fn positive_growth_points(series: &[(i32, Option<f64>)]) -> Vec<YearValue> {
    growth_points_where(series, |prev| prev > 0.0)
}

/// Mean of already computed growth points, rounded to 2 decimals.
pub fn mean_growth(points: &[YearValue]) -> Option<f64> {
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    mean(&values).map(round2)
}

/// Mean of the valid growth points, rounded to 2 decimals.
pub fn average_growth(series: &[(i32, Option<f64>)]) -> Option<f64> {
    let points = growth_points(series);
    let skipped = series.len().saturating_sub(1) - points.len();
    if skipped > 0 {
        log::debug!("skipped {skipped} year pair(s) without a usable predecessor");
    }
    mean_growth(&points)
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
