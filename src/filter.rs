//! Conjunctive filtering of a loaded dataset.

use polars::prelude::*;

use crate::criteria::FilterCriteria;

/// Keep the rows satisfying every active criterion. Inactive criteria
/// (empty categorical selection, full-range bounds) contribute no
/// predicate, so null values pass them; active predicates evaluate to
/// null on null input and the row is dropped. Row order is preserved.
pub fn apply_filters(df: &DataFrame, criteria: &FilterCriteria) -> PolarsResult<DataFrame> {
    let mut predicates: Vec<Expr> = Vec::new();

    for crit in &criteria.categorical {
        assert_column(df, &crit.column);
        if !crit.is_active() {
            continue;
        }
        let selected: Vec<String> = crit.selected.iter().cloned().collect();
        predicates.push(col(&crit.column).is_in(lit(Series::new(&crit.column, selected))));
    }
    for crit in &criteria.ranges {
        assert_column(df, &crit.column);
        if !crit.is_active() {
            continue;
        }
        predicates.push(
            col(&crit.column)
                .gt_eq(lit(crit.low))
                .and(col(&crit.column).lt_eq(lit(crit.high))),
        );
    }

    match predicates.into_iter().reduce(|a, b| a.and(b)) {
        None => Ok(df.clone()),
        Some(predicate) => df.clone().lazy().filter(predicate).collect(),
    }
}

fn assert_column(df: &DataFrame, column: &str) {
    assert!(
        df.get_column_names().iter().any(|c| *c == column),
        "filter criterion references unknown column '{}'",
        column
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{CategoricalCriterion, RangeCriterion};
    use std::collections::BTreeSet;

    fn odds_frame() -> DataFrame {
        df!(
            "market" => ["h2h", "h2h", "totals"],
            "bookmaker" => ["A", "B", "A"],
            "roi" => [5.0_f64, 15.0, 5.0],
        )
        .unwrap()
    }

    fn market_criterion(selected: &[&str]) -> CategoricalCriterion {
        CategoricalCriterion {
            column: "market".to_string(),
            choices: vec!["h2h".to_string(), "totals".to_string()],
            selected: selected.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
        }
    }

    fn roi_criterion(low: f64, high: f64) -> RangeCriterion {
        RangeCriterion {
            column: "roi".to_string(),
            full: (5.0, 15.0),
            low,
            high,
        }
    }

    #[test]
    fn test_default_criteria_return_the_full_frame() {
        let df = odds_frame();
        let criteria = FilterCriteria {
            categorical: vec![market_criterion(&[])],
            ranges: vec![roi_criterion(5.0, 15.0)],
            unavailable: vec![],
        };
        let filtered = apply_filters(&df, &criteria).unwrap();
        assert!(filtered.equals_missing(&df));
    }

    #[test]
    fn test_and_semantics() {
        let df = odds_frame();
        let criteria = FilterCriteria {
            categorical: vec![market_criterion(&["h2h"])],
            ranges: vec![roi_criterion(10.0, 20.0)],
            unavailable: vec![],
        };
        let filtered = apply_filters(&df, &criteria).unwrap();
        assert_eq!(filtered.height(), 1);
        assert_eq!(filtered.column("bookmaker").unwrap().str().unwrap().get(0), Some("B"));
    }

    #[test]
    fn test_categorical_membership_preserves_order() {
        let df = odds_frame();
        let criteria = FilterCriteria {
            categorical: vec![market_criterion(&["h2h", "totals"])],
            ranges: vec![],
            unavailable: vec![],
        };
        let filtered = apply_filters(&df, &criteria).unwrap();
        let bookmakers: Vec<&str> = filtered
            .column("bookmaker")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(bookmakers, ["A", "B", "A"]);
    }

    #[test]
    fn test_tightening_criteria_is_monotone() {
        let df = odds_frame();
        let loose = FilterCriteria {
            categorical: vec![market_criterion(&[])],
            ranges: vec![roi_criterion(5.0, 14.0)],
            unavailable: vec![],
        };
        let mut tight = loose.clone();
        tight.categorical[0] = market_criterion(&["totals"]);
        tight.ranges[0] = roi_criterion(5.0, 10.0);

        let loose_rows = apply_filters(&df, &loose).unwrap();
        let tight_rows = apply_filters(&df, &tight).unwrap();
        assert_eq!(loose_rows.height(), 2);
        assert_eq!(tight_rows.height(), 1);
        // the surviving row also survives the looser criteria
        let loose_books: Vec<&str> = loose_rows
            .column("bookmaker")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(tight_rows.column("bookmaker").unwrap().str().unwrap().get(0), Some("A"));
        assert!(loose_books.contains(&"A"));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let df = odds_frame();
        let criteria = FilterCriteria {
            categorical: vec![],
            ranges: vec![roi_criterion(5.0, 14.9)],
            unavailable: vec![],
        };
        let filtered = apply_filters(&df, &criteria).unwrap();
        // rows at exactly the 5.0 bound stay in
        assert_eq!(filtered.height(), 2);
    }

    #[test]
    fn test_null_fails_active_criteria_but_passes_defaults() {
        let df = df!(
            "market" => [Some("h2h"), None],
            "roi" => [Some(5.0_f64), None],
        )
        .unwrap();

        let default_criteria = FilterCriteria {
            categorical: vec![CategoricalCriterion {
                column: "market".to_string(),
                choices: vec!["h2h".to_string()],
                selected: BTreeSet::new(),
            }],
            ranges: vec![RangeCriterion {
                column: "roi".to_string(),
                full: (5.0, 5.0),
                low: 5.0,
                high: 5.0,
            }],
            unavailable: vec![],
        };
        assert_eq!(apply_filters(&df, &default_criteria).unwrap().height(), 2);

        let mut active = default_criteria.clone();
        active.categorical[0].selected.insert("h2h".to_string());
        assert_eq!(apply_filters(&df, &active).unwrap().height(), 1);

        let df = df!(
            "market" => ["h2h", "h2h", "h2h"],
            "roi" => [Some(5.0_f64), None, Some(10.0)],
        )
        .unwrap();
        let narrowed = FilterCriteria {
            categorical: vec![],
            ranges: vec![RangeCriterion {
                column: "roi".to_string(),
                full: (5.0, 10.0),
                low: 5.0,
                high: 9.0,
            }],
            unavailable: vec![],
        };
        assert_eq!(apply_filters(&df, &narrowed).unwrap().height(), 1);
    }

    #[test]
    #[should_panic(expected = "unknown column")]
    fn test_criterion_over_unknown_column_panics() {
        let df = odds_frame();
        let criteria = FilterCriteria {
            categorical: vec![CategoricalCriterion {
                column: "player_name".to_string(),
                choices: vec![],
                selected: BTreeSet::new(),
            }],
            ranges: vec![],
            unavailable: vec![],
        };
        let _ = apply_filters(&df, &criteria);
    }
}
