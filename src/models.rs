use ahash::AHashMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::OnceLock;

/// Which of the two parallel column groups a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricFamily {
    /// Total GDP, `GDP_<year>` (billions of USD).
    Total,
    /// GDP per capita, `GDP_per_capita_<year>` (USD).
    PerCapita,
}

impl MetricFamily {
    /// Column-name prefix for this family.
    pub fn prefix(&self) -> &'static str {
        match self {
            MetricFamily::Total => "GDP_",
            MetricFamily::PerCapita => "GDP_per_capita_",
        }
    }

    /// Column name for a given year, e.g. `GDP_2025`.
    pub fn column_name(&self, year: i32) -> String {
        format!("{}{}", self.prefix(), year)
    }
}

impl fmt::Display for MetricFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricFamily::Total => write!(f, "total GDP"),
            MetricFamily::PerCapita => write!(f, "GDP per capita"),
        }
    }
}

fn column_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^GDP_(per_capita_)?(\d{4})$").expect("static column pattern is valid")
    })
}

/// A metric-year column: family plus the 4-digit year parsed from its suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MetricColumn {
    pub family: MetricFamily,
    pub year: i32,
}

impl MetricColumn {
    pub fn new(family: MetricFamily, year: i32) -> Self {
        Self { family, year }
    }

    /// Parse `GDP_2021` / `GDP_per_capita_2021`. Anything else is not a metric column.
    pub fn parse(name: &str) -> Option<Self> {
        let caps = column_regex().captures(name.trim())?;
        let family = if caps.get(1).is_some() {
            MetricFamily::PerCapita
        } else {
            MetricFamily::Total
        };
        let year = caps.get(2)?.as_str().parse::<i32>().ok()?;
        Some(Self { family, year })
    }
}

impl fmt::Display for MetricColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.family.prefix(), self.year)
    }
}

/// One row of the dataset. Missing or non-finite values are simply absent.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRow {
    pub country: String,
    pub population: Option<f64>,
    values: BTreeMap<MetricColumn, f64>,
}

impl CountryRow {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            population: None,
            values: BTreeMap::new(),
        }
    }

    /// Builder-style setter; `None` and non-finite numbers leave the cell empty.
    pub fn with_value(mut self, family: MetricFamily, year: i32, value: Option<f64>) -> Self {
        self.set(MetricColumn::new(family, year), value);
        self
    }

    pub fn with_population(mut self, population: Option<f64>) -> Self {
        self.population = population.filter(|p| p.is_finite());
        self
    }

    pub fn set(&mut self, column: MetricColumn, value: Option<f64>) {
        match value.filter(|v| v.is_finite()) {
            Some(v) => {
                self.values.insert(column, v);
            }
            None => {
                self.values.remove(&column);
            }
        }
    }

    pub fn get(&self, column: MetricColumn) -> Option<f64> {
        self.values.get(&column).copied()
    }

    pub fn value(&self, family: MetricFamily, year: i32) -> Option<f64> {
        self.get(MetricColumn::new(family, year))
    }

    /// Columns this row carries a value for.
    pub fn columns(&self) -> impl Iterator<Item = MetricColumn> + '_ {
        self.values.keys().copied()
    }
}

/// In-memory table: one row per country, keyed by exact country name.
///
/// The column set is tracked separately from row values so that a column
/// known to the table but empty for a given country is distinguishable
/// from a column the table never had.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: BTreeSet<MetricColumn>,
    rows: Vec<CountryRow>,
    index: AHashMap<String, usize>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from rows; the column set is the union of the rows' columns.
    pub fn from_rows(rows: impl IntoIterator<Item = CountryRow>) -> Self {
        let mut ds = Self::new();
        for row in rows {
            ds.push(row);
        }
        ds
    }

    pub fn add_column(&mut self, column: MetricColumn) {
        self.columns.insert(column);
    }

    /// Insert a row. A row for an already-present country replaces it.
    pub fn push(&mut self, row: CountryRow) {
        self.columns.extend(row.columns());
        match self.index.get(&row.country) {
            Some(&i) => {
                log::warn!("duplicate country row '{}', keeping the last one", row.country);
                self.rows[i] = row;
            }
            None => {
                self.index.insert(row.country.clone(), self.rows.len());
                self.rows.push(row);
            }
        }
    }

    pub fn row(&self, country: &str) -> Option<&CountryRow> {
        self.index.get(country).map(|&i| &self.rows[i])
    }

    pub fn rows(&self) -> &[CountryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: MetricColumn) -> bool {
        self.columns.contains(&column)
    }

    /// Years present for a family, ascending.
    pub fn years(&self, family: MetricFamily) -> Vec<i32> {
        self.columns
            .iter()
            .filter(|c| c.family == family)
            .map(|c| c.year)
            .collect()
    }

    pub fn columns(&self) -> impl Iterator<Item = MetricColumn> + '_ {
        self.columns.iter().copied()
    }
}

/// Runtime knobs shared by all analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Year whose value answers "actual" queries.
    pub reference_year: i32,
}

impl AnalysisConfig {
    pub const DEFAULT_REFERENCE_YEAR: i32 = 2025;

    pub fn with_reference_year(reference_year: i32) -> Self {
        Self { reference_year }
    }

    /// Use the latest year the dataset has for `family`, if any.
    pub fn latest_available(dataset: &Dataset, family: MetricFamily) -> Option<Self> {
        dataset
            .years(family)
            .last()
            .copied()
            .map(Self::with_reference_year)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reference_year: Self::DEFAULT_REFERENCE_YEAR,
        }
    }
}

/// A value tagged with the year it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

impl YearValue {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

/// Summary of one country across one metric family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryMetrics {
    pub family: MetricFamily,
    /// Value at the reference year.
    pub actual: f64,
    pub max: YearValue,
    pub min: YearValue,
    /// Mean year-over-year change in percent, 2 decimals. `None` when no valid pair exists.
    pub avg_growth_percent: Option<f64>,
}

/// A category winner: the country's full metrics plus its name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryWinner {
    pub country: String,
    #[serde(flatten)]
    pub metrics: CountryMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub overall_max_gdp: CountryWinner,
    pub overall_min_gdp: CountryWinner,
    /// `None` when no compared country has a defined average growth.
    pub highest_growth: Option<CountryWinner>,
}

/// Aggregate over all countries (column-wise sums).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldMetrics {
    pub family: MetricFamily,
    pub actual: f64,
    pub max: YearValue,
    pub min: YearValue,
    pub avg_growth_percent: Option<f64>,
    /// Year -> summed value, ascending.
    pub world_total: Vec<YearValue>,
    /// Year -> percent change from the prior year; the first year has no point.
    pub world_growth_data: Vec<YearValue>,
}

/// Continent a country is bucketed into. `Other` is the sentinel for
/// names that cannot be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Continent {
    Africa,
    Antarctica,
    Asia,
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    Oceania,
    Other,
}

impl Continent {
    pub fn name(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Antarctica => "Antarctica",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
            Continent::Other => "Other",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mean growth of the countries of one continent for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinentGrowth {
    pub continent: Continent,
    pub growth: f64,
    /// Number of countries that contributed to the mean.
    pub countries: usize,
}

/// One slice of the world distribution: a country or the "Others" bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareSlice {
    pub label: String,
    pub value: f64,
    pub percent: f64,
}

/// Result of dispatching on how many countries are selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum SelectionSummary {
    World(WorldMetrics),
    Country(CountryWinner),
    Comparison(ComparisonResult),
}
