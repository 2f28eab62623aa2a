//! gdp_insights
//!
//! A lightweight Rust library for summarizing per-country GDP time series.
//! Pairs with the `gdpi` CLI.
//!
//! ### Features
//! - Per-country actual / max / min / average growth for total or per-capita GDP
//! - Multi-country comparison with category winners
//! - World totals and a year-by-year world growth series
//! - Average growth per continent for a given year
//! - Population merge to derive per-capita columns
//!
//! ### Example
//! ```no_run
//! use gdp_insights::{AnalysisConfig, MetricFamily, analysis, storage};
//!
//! let data = storage::load_dataset_csv("data/2020-2025.csv")?;
//! let cfg = AnalysisConfig::default();
//! let world = analysis::analyze_world(&data, MetricFamily::Total, &cfg)?;
//! println!("{:#?}", world.world_growth_data);
//! let de = analysis::analyze_country(&data, "Germany", MetricFamily::Total, &cfg)?;
//! println!("{:?}", de.avg_growth_percent);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod analysis;
pub mod continent;
pub mod error;
pub mod format;
pub mod geo;
pub mod models;
pub mod prepare;
pub mod stats;
pub mod storage;

pub use continent::{ContinentResolver, OverrideTable};
pub use error::{AnalysisError, LookupFailed};
pub use models::{AnalysisConfig, Continent, CountryRow, Dataset, MetricFamily};
