//! Multi-country comparison and selection dispatch.

use gdp_insights::analysis::{compare_countries, summarize_selection};
use gdp_insights::models::SelectionSummary;
use gdp_insights::{AnalysisConfig, AnalysisError, CountryRow, Dataset, MetricFamily};

const T: MetricFamily = MetricFamily::Total;

fn country(name: &str, vals: [Option<f64>; 3]) -> CountryRow {
    CountryRow::new(name)
        .with_value(T, 2023, vals[0])
        .with_value(T, 2024, vals[1])
        .with_value(T, 2025, vals[2])
}

fn names(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn sample() -> Dataset {
    Dataset::from_rows([
        country("Big", [Some(1000.0), Some(1100.0), Some(1210.0)]), // 10%
        country("Small", [Some(5.0), Some(6.0), Some(7.2)]),        // 20%
        country("Flat", [Some(50.0), Some(50.0), Some(50.0)]),      // 0%
    ])
}

#[test]
fn picks_category_winners() {
    let ds = sample();
    let cmp = compare_countries(&ds, &names(&["Flat", "Big", "Small"]), T, &AnalysisConfig::default())
        .unwrap();
    assert_eq!(cmp.overall_max_gdp.country, "Big");
    assert_eq!(cmp.overall_max_gdp.metrics.max.value, 1210.0);
    assert_eq!(cmp.overall_min_gdp.country, "Small");
    assert_eq!(cmp.overall_min_gdp.metrics.min.year, 2023);
    let g = cmp.highest_growth.unwrap();
    assert_eq!(g.country, "Small");
    assert_eq!(g.metrics.avg_growth_percent, Some(20.0));
}

#[test]
fn single_country_wins_everything() {
    let ds = sample();
    let cmp = compare_countries(&ds, &names(&["Big"]), T, &AnalysisConfig::default()).unwrap();
    assert_eq!(cmp.overall_max_gdp.country, "Big");
    assert_eq!(cmp.overall_min_gdp.country, "Big");
    assert_eq!(cmp.highest_growth.unwrap().country, "Big");
}

#[test]
fn ties_go_to_first_in_input_order() {
    let ds = Dataset::from_rows([
        country("X", [Some(10.0), Some(20.0), Some(20.0)]),
        country("Y", [Some(10.0), Some(20.0), Some(20.0)]),
    ]);
    let cfg = AnalysisConfig::default();
    let xy = compare_countries(&ds, &names(&["X", "Y"]), T, &cfg).unwrap();
    let yx = compare_countries(&ds, &names(&["Y", "X"]), T, &cfg).unwrap();
    assert_eq!(xy.overall_max_gdp.country, "X");
    assert_eq!(xy.overall_min_gdp.country, "X");
    assert_eq!(xy.highest_growth.unwrap().country, "X");
    assert_eq!(yx.overall_max_gdp.country, "Y");
    assert_eq!(yx.overall_min_gdp.country, "Y");
    assert_eq!(yx.highest_growth.unwrap().country, "Y");
}

#[test]
fn undefined_growth_never_wins() {
    let ds = Dataset::from_rows([
        // only 2025 present: no growth pair
        country("NoGrowth", [None, None, Some(900.0)]),
        country("Shrinking", [Some(100.0), Some(50.0), Some(25.0)]),
    ]);
    let cfg = AnalysisConfig::default();
    let cmp = compare_countries(&ds, &names(&["NoGrowth", "Shrinking"]), T, &cfg).unwrap();
    let g = cmp.highest_growth.unwrap();
    assert_eq!(g.country, "Shrinking");
    assert_eq!(g.metrics.avg_growth_percent, Some(-50.0));

    let only = compare_countries(&ds, &names(&["NoGrowth"]), T, &cfg).unwrap();
    assert!(only.highest_growth.is_none());
    assert_eq!(only.overall_max_gdp.country, "NoGrowth");
}

#[test]
fn unknown_countries_are_dropped() {
    let ds = sample();
    let cfg = AnalysisConfig::default();
    let cmp = compare_countries(&ds, &names(&["Atlantis", "Flat"]), T, &cfg).unwrap();
    assert_eq!(cmp.overall_max_gdp.country, "Flat");

    assert_eq!(
        compare_countries(&ds, &names(&["Atlantis", "Lemuria"]), T, &cfg),
        Err(AnalysisError::NoComparableCountries)
    );
    assert_eq!(
        compare_countries(&ds, &[], T, &cfg),
        Err(AnalysisError::EmptySelection)
    );
}

#[test]
fn selection_dispatch() {
    let ds = sample();
    let cfg = AnalysisConfig::default();
    assert!(matches!(
        summarize_selection(&ds, &[], T, &cfg),
        Ok(SelectionSummary::World(_))
    ));
    match summarize_selection(&ds, &names(&["Big"]), T, &cfg) {
        Ok(SelectionSummary::Country(w)) => assert_eq!(w.country, "Big"),
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(
        summarize_selection(&ds, &names(&["Big", "Small"]), T, &cfg),
        Ok(SelectionSummary::Comparison(_))
    ));
}

#[test]
fn winner_serializes_flat() {
    let ds = sample();
    let cmp = compare_countries(&ds, &names(&["Big"]), T, &AnalysisConfig::default()).unwrap();
    let v = serde_json::to_value(&cmp).unwrap();
    assert_eq!(v["overall_max_gdp"]["country"], "Big");
    assert_eq!(v["overall_max_gdp"]["max"]["year"], 2025);
    assert_eq!(v["highest_growth"]["avg_growth_percent"], 10.0);
}
