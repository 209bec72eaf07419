//! FILENAME: dashboard-engine/src/lib.rs
//! Dashboard engine for sales analytics.
//!
//! This crate turns a snapshot of canonical sale records plus the caller's
//! filter state into every derived view the dashboard renders. It depends on
//! `engine` only for the canonical record model.
//!
//! Layers:
//! - `filter`: FilterState, the record predicate, option lists, and the
//!   region/product consistency rule
//! - `aggregate`: the insertion-ordered grouping-reduce every view is built on
//! - `view`: Metrics, trend, distribution, and top-product ranking
//! - `snapshot`: the recompute-everything entry point called once per cycle
//! - `export`: row shaping for the CSV/PDF export collaborator
//!
//! The whole crate is pure and synchronous: same inputs, same outputs, no
//! state retained between calls, no error path. Malformed data was already
//! degraded to defaults by the normalizer, and an upstream fetch failure is
//! handled by the caller passing an empty record set for that cycle.

pub mod aggregate;
pub mod export;
pub mod filter;
pub mod snapshot;
pub mod view;

pub use aggregate::{group_reduce, unique_nonempty};
pub use export::{export_rows, report, ExportRow, SalesReport, EXPORT_COLUMNS};
pub use filter::{compute_options, filter_records, reconcile, FilterOptions, FilterState};
pub use snapshot::{compute_dashboard, DashboardSnapshot};
pub use view::{
    distribution, metrics, top_products, trend, DistributionSlice, Metrics, RankedProduct,
    RankingKey, TrendPoint, TOP_PRODUCT_COUNT,
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // End-to-end: raw feed values through normalization into a snapshot.
    #[test]
    fn it_computes_views_from_a_raw_feed() {
        let raw = vec![
            json!({ "date": "2024-01-02", "reigon": "North", "product": "Widget",
                    "quantity": "2", "unit_price": 5, "total_price": 10 }),
            json!({ "date": "2024-01-01", "region": "South", "product": "Gadget",
                    "quantity": 1, "unit_price": 4, "total_price": 4 }),
            json!(null),
        ];
        let records = engine::normalize_records(&raw);
        let snapshot = compute_dashboard(&records, &FilterState::default(), RankingKey::default());

        // The null record normalized to all-defaults: counted in metrics,
        // absent from every categorical view.
        assert_eq!(snapshot.metrics.total_sales, 3);
        assert_eq!(snapshot.metrics.total_revenue, 14.0);
        assert_eq!(snapshot.trend.len(), 2);
        assert_eq!(snapshot.trend[0].date, "2024-01-01");
        assert_eq!(snapshot.options.regions, vec!["North", "South"]);
        assert_eq!(snapshot.top_products[0].name, "Widget");
    }
}
