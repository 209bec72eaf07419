//! FILENAME: dashboard-engine/src/snapshot.rs
//! PURPOSE: The recompute-everything entry point the caller invokes per cycle.
//! CONTEXT: The caller owns the refresh timer and the filter state; on every
//! tick and on every filter change it hands both into `compute_dashboard` and
//! receives a complete snapshot. Nothing is cached between calls, so every
//! snapshot is internally consistent: the same record set and the same
//! (reconciled) filter state produced every view in it.

use engine::SaleRecord;
use serde::{Deserialize, Serialize};

use crate::filter::{compute_options, filter_records, reconcile, FilterOptions, FilterState};
use crate::view::{
    self, DistributionSlice, Metrics, RankedProduct, RankingKey, TrendPoint, TOP_PRODUCT_COUNT,
};

/// Everything the dashboard renders for one refresh cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// The filter state the views were actually computed under, after the
    /// consistency rule cleared any stale product selections.
    pub filter: FilterState,

    /// Selectable values for the filter controls.
    pub options: FilterOptions,

    /// The filtered subset, in input order. Also what the exporter receives.
    pub rows: Vec<SaleRecord>,

    pub metrics: Metrics,
    pub trend: Vec<TrendPoint>,
    pub distribution: Vec<DistributionSlice>,
    pub top_products: Vec<RankedProduct>,
}

/// Recomputes every derived view from one (records, filter) snapshot.
///
/// On upstream fetch failure the caller passes an empty record set; every
/// view then comes back empty or zeroed and the dashboard still renders.
pub fn compute_dashboard(
    records: &[SaleRecord],
    state: &FilterState,
    ranking: RankingKey,
) -> DashboardSnapshot {
    let options = compute_options(records, state);
    let filter = reconcile(state, &options);
    let rows = filter_records(records, &filter);
    log::debug!(
        "dashboard recompute: {} of {} records match",
        rows.len(),
        records.len()
    );

    DashboardSnapshot {
        metrics: view::metrics(&rows),
        trend: view::trend(&rows),
        distribution: view::distribution(&rows),
        top_products: view::top_products(&rows, ranking, TOP_PRODUCT_COUNT),
        filter,
        options,
        rows,
    }
}

// ============================================================================
// TESTS
// ============================================================================
