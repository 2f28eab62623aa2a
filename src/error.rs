//! Error types for the analytical layer.
//!
//! Every [`AnalysisError`] means "the requested data is not there": callers
//! render a placeholder instead of failing.

use crate::models::{MetricColumn, MetricFamily};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("country not found: {0}")]
    CountryNotFound(String),
    #[error("dataset has no {0} columns")]
    NoMetricColumns(MetricFamily),
    #[error("dataset has no column {0}")]
    MissingColumn(MetricColumn),
    #[error("{country} has no value for {column}")]
    MissingValue {
        country: String,
        column: MetricColumn,
    },
    #[error("no countries selected")]
    EmptySelection,
    #[error("none of the selected countries could be analyzed")]
    NoComparableCountries,
}

/// Why the generic name -> continent lookup could not answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupFailed {
    #[error("unknown country name: {0}")]
    UnknownCountry(String),
    #[error("no continent for alpha-2 code {0}")]
    UnmappedAlpha2(String),
    #[error("unrecognized continent code {0}")]
    UnmappedContinentCode(String),
}
