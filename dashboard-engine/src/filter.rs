//! FILENAME: dashboard-engine/src/filter.rs
//! PURPOSE: Filter state, the record predicate, and the option-list computation.
//! CONTEXT: The caller owns a `FilterState` and passes it into every recompute.
//! This module turns that state into a predicate over canonical records and
//! keeps the state internally consistent: product selections are only valid
//! within the currently selected region's scope, so narrowing the region can
//! silently clear a stale product selection. There is no error path here.

use engine::SaleRecord;
use serde::{Deserialize, Serialize};

use crate::aggregate::unique_nonempty;

// ============================================================================
// FILTER STATE
// ============================================================================

/// User-selected filters. Every field empty means "show everything".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    /// Selected region, or empty for all regions.
    pub region: String,

    /// Selected products, or empty for all. A single selection is just the
    /// one-element case.
    pub products: Vec<String>,

    /// Inclusive `YYYY-MM-DD` lower bound, or empty for unbounded.
    pub date_start: String,

    /// Inclusive `YYYY-MM-DD` upper bound, or empty for unbounded.
    pub date_end: String,
}

impl FilterState {
    /// Whether a record belongs to the currently displayed subset.
    ///
    /// Date bounds compare lexicographically, which is calendar order for
    /// `YYYY-MM-DD` strings. A record with an empty date always passes the
    /// date bounds: the normalizer legitimately emits empty dates for
    /// malformed input, and those records must not vanish from the tables.
    pub fn matches(&self, record: &SaleRecord) -> bool {
        let region_ok = self.region.is_empty() || record.region == self.region;
        let product_ok =
            self.products.is_empty() || self.products.iter().any(|p| *p == record.product);
        let start_ok = self.date_start.is_empty()
            || record.date.is_empty()
            || record.date >= self.date_start;
        let end_ok =
            self.date_end.is_empty() || record.date.is_empty() || record.date <= self.date_end;
        region_ok && product_ok && start_ok && end_ok
    }
}

// ============================================================================
// OPTION LISTS
// ============================================================================

/// The selectable values for the filter controls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    /// Regions present anywhere in the record set (not just the filtered
    /// subset), first-occurrence order.
    pub regions: Vec<String>,

    /// Products present within the selected region's scope, or across all
    /// records when no region is selected.
    pub products: Vec<String>,
}

/// Computes the option lists for the current record set and region selection.
pub fn compute_options(records: &[SaleRecord], state: &FilterState) -> FilterOptions {
    let regions = unique_nonempty(records.iter().map(|r| r.region.as_str()));
    let products = unique_nonempty(
        records
            .iter()
            .filter(|r| state.region.is_empty() || r.region == state.region)
            .map(|r| r.product.as_str()),
    );
    FilterOptions { regions, products }
}

/// Enforces the cross-field consistency rule: any selected product that is no
/// longer in the current product option set is cleared. Runs on every
/// recompute, not just when the region control changes.
pub fn reconcile(state: &FilterState, options: &FilterOptions) -> FilterState {
    let mut next = state.clone();
    next.products
        .retain(|selected| options.products.iter().any(|p| p == selected));
    if next.products.len() != state.products.len() {
        log::debug!(
            "cleared {} product selection(s) outside region '{}'",
            state.products.len() - next.products.len(),
            state.region
        );
    }
    next
}

/// Applies the predicate over a record set, producing the displayed subset.
pub fn filter_records(records: &[SaleRecord], state: &FilterState) -> Vec<SaleRecord> {
    records
        .iter()
        .filter(|record| state.matches(record))
        .cloned()
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, region: &str, product: &str) -> SaleRecord {
        SaleRecord {
            date: date.to_string(),
            region: region.to_string(),
            product: product.to_string(),
            ..SaleRecord::default()
        }
    }

    #[test]
    fn it_is_the_identity_filter_when_empty() {
        let records = vec![
            record("2024-01-01", "A", "X"),
            record("", "", ""),
            record("2024-02-01", "B", "Y"),
        ];
        let filtered = filter_records(&records, &FilterState::default());
        assert_eq!(filtered, records);
    }

    #[test]
    fn it_filters_by_region_and_product() {
        let records = vec![
            record("2024-01-01", "A", "X"),
            record("2024-01-02", "A", "Y"),
            record("2024-01-03", "B", "X"),
        ];
        let state = FilterState {
            region: "A".to_string(),
            products: vec!["X".to_string()],
            ..FilterState::default()
        };
        let filtered = filter_records(&records, &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date, "2024-01-01");
    }

    #[test]
    fn it_applies_inclusive_date_bounds() {
        let records = vec![
            record("2024-01-01", "A", "X"),
            record("2024-01-15", "A", "X"),
            record("2024-02-01", "A", "X"),
        ];
        let state = FilterState {
            date_start: "2024-01-15".to_string(),
            date_end: "2024-02-01".to_string(),
            ..FilterState::default()
        };
        let filtered = filter_records(&records, &state);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].date, "2024-01-15");
        assert_eq!(filtered[1].date, "2024-02-01");
    }

    #[test]
    fn it_lets_empty_dates_pass_date_bounds() {
        let records = vec![record("", "A", "X"), record("2023-12-31", "A", "X")];
        let state = FilterState {
            date_start: "2024-01-01".to_string(),
            ..FilterState::default()
        };
        let filtered = filter_records(&records, &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date, "");
    }

    #[test]
    fn it_scopes_product_options_to_the_selected_region() {
        let records = vec![record("", "A", "X"), record("", "B", "Y")];

        let all = compute_options(&records, &FilterState::default());
        assert_eq!(all.regions, vec!["A", "B"]);
        assert_eq!(all.products, vec!["X", "Y"]);

        let scoped = compute_options(
            &records,
            &FilterState {
                region: "B".to_string(),
                ..FilterState::default()
            },
        );
        assert_eq!(scoped.regions, vec!["A", "B"]);
        assert_eq!(scoped.products, vec!["Y"]);
    }

    #[test]
    fn it_clears_products_outside_the_narrowed_region() {
        let records = vec![record("", "A", "X"), record("", "B", "Y")];

        // Select region A, then product X, then switch to region B. X was
        // chosen under A's scope and is not in B's option set, so it goes.
        let state = FilterState {
            region: "B".to_string(),
            products: vec!["X".to_string()],
            ..FilterState::default()
        };
        let options = compute_options(&records, &state);
        let reconciled = reconcile(&state, &options);
        assert!(reconciled.products.is_empty());
        assert_eq!(reconciled.region, "B");
    }

    #[test]
    fn it_keeps_valid_product_selections() {
        let records = vec![record("", "A", "X"), record("", "A", "Z")];
        let state = FilterState {
            region: "A".to_string(),
            products: vec!["Z".to_string()],
            ..FilterState::default()
        };
        let options = compute_options(&records, &state);
        let reconciled = reconcile(&state, &options);
        assert_eq!(reconciled, state);
    }
}
