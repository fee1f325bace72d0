//! Enumeration of the filter controls available for a loaded dataset.
//!
//! Rebuilt every time a dataset is (re)loaded, never cached on its own.

use std::collections::BTreeSet;

use polars::prelude::*;

use crate::dataset::DatasetSpec;
use crate::error::DashboardError;

/// Set-membership criterion over a categorical column. An empty
/// selection means "no constraint".
#[derive(Clone, Debug, PartialEq)]
pub struct CategoricalCriterion {
    pub column: String,
    /// Sorted distinct non-null values of the column.
    pub choices: Vec<String>,
    pub selected: BTreeSet<String>,
}

impl CategoricalCriterion {
    pub fn is_active(&self) -> bool {
        !self.selected.is_empty()
    }
}

/// Inclusive `[low, high]` criterion over a numeric column. The default
/// bounds span the column's full range, which means "no constraint".
#[derive(Clone, Debug, PartialEq)]
pub struct RangeCriterion {
    pub column: String,
    pub full: (f64, f64),
    pub low: f64,
    pub high: f64,
}

impl RangeCriterion {
    pub fn is_active(&self) -> bool {
        self.low > self.full.0 || self.high < self.full.1
    }
}

/// One filter panel's worth of controls, all at their default
/// (unconstrained) values right after construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    pub categorical: Vec<CategoricalCriterion>,
    pub ranges: Vec<RangeCriterion>,
    /// Numeric columns with no non-null values. Their controls render
    /// disabled instead of getting a degenerate range.
    pub unavailable: Vec<String>,
}

impl FilterCriteria {
    pub fn from_frame(df: &DataFrame, spec: &DatasetSpec) -> Self {
        let mut criteria = FilterCriteria::default();
        for column in spec.categorical {
            criteria.categorical.push(CategoricalCriterion {
                column: column.to_string(),
                choices: distinct_values(df, column),
                selected: BTreeSet::new(),
            });
        }
        for column in spec.numeric {
            match range_bounds(df, column) {
                Ok((low, high)) => criteria.ranges.push(RangeCriterion {
                    column: column.to_string(),
                    full: (low, high),
                    low,
                    high,
                }),
                Err(e) => {
                    log::warn!("{}: disabling range control: {}", spec.title, e);
                    criteria.unavailable.push(column.to_string());
                }
            }
        }
        criteria
    }
}

/// Sorted distinct non-null values of a string column. A criterion over
/// a column that does not exist is a programmer error.
pub fn distinct_values(df: &DataFrame, column: &str) -> Vec<String> {
    let series = df
        .column(column)
        .unwrap_or_else(|_| panic!("no column '{}' in frame", column));
    let ca = series
        .str()
        .unwrap_or_else(|_| panic!("column '{}' is not a string column", column));
    let mut values: Vec<String> = ca.into_iter().flatten().map(str::to_string).collect();
    values.sort();
    values.dedup();
    values
}

/// `(min, max)` over a numeric column's non-null values.
pub fn range_bounds(df: &DataFrame, column: &str) -> Result<(f64, f64), DashboardError> {
    let series = df
        .column(column)
        .unwrap_or_else(|_| panic!("no column '{}' in frame", column));
    let casted = series.cast(&DataType::Float64).map_err(|e| {
        DashboardError::unavailable(format!("column '{}' is not numeric: {}", column, e))
    })?;
    let ca = casted.f64().expect("cast to Float64 yields an f64 array");
    match (ca.min(), ca.max()) {
        (Some(low), Some(high)) => Ok((low, high)),
        _ => Err(DashboardError::NoDataForRange(column.to_string())),
    }
}
