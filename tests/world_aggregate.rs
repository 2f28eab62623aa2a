//! World totals, growth series and distribution share.

use gdp_insights::analysis::{analyze_world, top_share};
use gdp_insights::{AnalysisConfig, AnalysisError, CountryRow, Dataset, MetricFamily};

const T: MetricFamily = MetricFamily::Total;

fn dataset() -> Dataset {
    Dataset::from_rows([
        CountryRow::new("A")
            .with_value(T, 2023, Some(100.0))
            .with_value(T, 2024, Some(120.0))
            .with_value(T, 2025, Some(150.0)),
        CountryRow::new("B")
            .with_value(T, 2023, Some(50.0))
            .with_value(T, 2024, None)
            .with_value(T, 2025, Some(60.0)),
        CountryRow::new("C")
            .with_value(T, 2023, Some(50.0))
            .with_value(T, 2024, Some(80.0))
            .with_value(T, 2025, Some(90.0)),
    ])
}

#[test]
fn sums_match_per_country_values() {
    let ds = dataset();
    let w = analyze_world(&ds, T, &AnalysisConfig::default()).unwrap();
    assert_eq!(w.world_total.len(), 3);
    for point in &w.world_total {
        let expected: f64 = ds
            .rows()
            .iter()
            .map(|r| r.value(T, point.year).unwrap_or(0.0))
            .sum();
        assert!((point.value - expected).abs() < 1e-9, "year {}", point.year);
    }
    assert_eq!(w.actual, 300.0);
    assert_eq!(w.max.year, 2025);
    assert_eq!(w.min.year, 2023);
    assert_eq!(w.min.value, 200.0);
}

#[test]
fn growth_series_has_one_point_fewer() {
    let w = analyze_world(&dataset(), T, &AnalysisConfig::default()).unwrap();
    // 200 -> 200 -> 300
    assert_eq!(w.world_growth_data.len(), w.world_total.len() - 1);
    assert_eq!(w.world_growth_data[0].year, 2024);
    assert!((w.world_growth_data[0].value - 0.0).abs() < 1e-9);
    assert!((w.world_growth_data[1].value - 50.0).abs() < 1e-9);
    assert_eq!(w.avg_growth_percent, Some(25.0));
}

#[test]
fn world_errors() {
    let ds = dataset();
    assert!(matches!(
        analyze_world(&ds, MetricFamily::PerCapita, &AnalysisConfig::default()),
        Err(AnalysisError::NoMetricColumns(_))
    ));
    assert!(matches!(
        analyze_world(&ds, T, &AnalysisConfig::with_reference_year(2019)),
        Err(AnalysisError::MissingColumn(_))
    ));
}

#[test]
fn share_groups_the_tail_into_others() {
    let ds = dataset();
    let slices = top_share(&ds, T, &AnalysisConfig::default(), 1).unwrap();
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].label, "A");
    assert_eq!(slices[0].value, 150.0);
    assert!((slices[0].percent - 50.0).abs() < 1e-9);
    assert_eq!(slices[1].label, "Others");
    assert_eq!(slices[1].value, 150.0);

    let all = top_share(&ds, T, &AnalysisConfig::default(), 5).unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|s| s.label != "Others"));
}

#[test]
fn non_positive_world_totals_are_not_a_growth_base() {
    let ds = Dataset::from_rows([CountryRow::new("A")
        .with_value(T, 2022, Some(-100.0))
        .with_value(T, 2023, Some(50.0))
        .with_value(T, 2024, Some(0.0))
        .with_value(T, 2025, Some(20.0))]);
    let w = analyze_world(&ds, T, &AnalysisConfig::default()).unwrap();
    assert_eq!(w.world_total.len(), 4);
    // -100 -> 50 and 0 -> 20 drop out; only 50 -> 0 counts
    assert_eq!(w.world_growth_data.len(), 1);
    assert_eq!(w.world_growth_data[0].year, 2024);
    assert!((w.world_growth_data[0].value + 100.0).abs() < 1e-9);
    assert_eq!(w.avg_growth_percent, Some(-100.0));
}

#[test]
fn negative_base_alone_leaves_growth_undefined() {
    let ds = Dataset::from_rows([CountryRow::new("A")
        .with_value(T, 2024, Some(-100.0))
        .with_value(T, 2025, Some(50.0))]);
    let w = analyze_world(&ds, T, &AnalysisConfig::default()).unwrap();
    assert!(w.world_growth_data.is_empty());
    assert_eq!(w.avg_growth_percent, None);
}
