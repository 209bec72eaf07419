//! FILENAME: dashboard-engine/src/view.rs
//! PURPOSE: The derived views the dashboard renders - metrics, trend,
//! distribution, and product ranking.
//! CONTEXT: Every function here takes the already-filtered record subset and
//! produces a plain value object. All of them are thin layers over
//! `aggregate::group_reduce`; none of them can fail. Malformed data degrades
//! numerically (missing numbers were already zeroed by the normalizer) and
//! structurally (empty categorical fields drop out of their grouping but
//! still count toward the summary metrics).

use std::cmp::Ordering;

use chrono::NaiveDate;
use engine::SaleRecord;
use serde::{Deserialize, Serialize};

use crate::aggregate::group_reduce;

/// How many products the ranking view keeps.
pub const TOP_PRODUCT_COUNT: usize = 5;

// ============================================================================
// VIEW VALUE OBJECTS
// ============================================================================

/// The headline numbers at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metrics {
    pub total_revenue: f64,
    pub total_sales: u64,
    /// Units sold across the subset.
    pub total_quantity: u64,
    pub avg_sale_value: f64,
}

/// One point of the revenue-over-time line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: String,
    pub revenue: f64,
}

/// One slice of the per-region revenue pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSlice {
    pub category: String,
    pub value: f64,
}

/// One row of the top-products table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedProduct {
    pub name: String,
    pub quantity: u64,
    pub revenue: f64,
}

/// Which metric the product ranking sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RankingKey {
    Revenue,
    Quantity,
}

impl Default for RankingKey {
    fn default() -> Self {
        RankingKey::Revenue
    }
}

// ============================================================================
// SUMMARY METRICS
// ============================================================================

/// Sums the subset into headline metrics. An empty subset yields all zeros;
/// the average is guarded so there is no division fault.
pub fn metrics(records: &[SaleRecord]) -> Metrics {
    let total_revenue: f64 = records.iter().map(|r| r.total_price).sum();
    let total_sales = records.len() as u64;
    let total_quantity: u64 = records.iter().map(|r| u64::from(r.quantity)).sum();
    Metrics {
        total_revenue,
        total_sales,
        total_quantity,
        avg_sale_value: total_revenue / total_sales.max(1) as f64,
    }
}

// ============================================================================
// TREND BY DATE
// ============================================================================

/// Revenue per date, ascending by calendar date. Records with an empty date
/// are skipped; non-empty dates that do not parse as `YYYY-MM-DD` keep their
/// bucket but sort after every parseable date, stable among themselves.
pub fn trend(records: &[SaleRecord]) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = group_reduce(
        records,
        |r| (!r.date.is_empty()).then(|| r.date.clone()),
        |revenue: &mut f64, r| *revenue += r.total_price,
    )
    .into_iter()
    .map(|(date, revenue)| TrendPoint { date, revenue })
    .collect();
    points.sort_by(|a, b| cmp_calendar(&a.date, &b.date));
    points
}

fn parse_day(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Calendar order where unparseable dates compare after parseable ones and
/// equal to each other (the sort is stable, so they keep grouping order).
fn cmp_calendar(a: &str, b: &str) -> Ordering {
    match (parse_day(a), parse_day(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ============================================================================
// DISTRIBUTION BY REGION
// ============================================================================

/// Revenue per region. Categorical: no order is promised beyond the
/// first-occurrence order the aggregator produces. Empty regions drop out.
pub fn distribution(records: &[SaleRecord]) -> Vec<DistributionSlice> {
    group_reduce(
        records,
        |r| (!r.region.is_empty()).then(|| r.region.clone()),
        |value: &mut f64, r| *value += r.total_price,
    )
    .into_iter()
    .map(|(category, value)| DistributionSlice { category, value })
    .collect()
}

// ============================================================================
// TOP PRODUCTS
// ============================================================================

#[derive(Default)]
struct ProductTotals {
    quantity: u64,
    revenue: f64,
}

/// The top `limit` products by the chosen key, descending. The sort is
/// stable, so products tied on the key keep their first-occurrence order;
/// no secondary key is applied. Empty product names drop out.
pub fn top_products(records: &[SaleRecord], key: RankingKey, limit: usize) -> Vec<RankedProduct> {
    let mut ranked: Vec<RankedProduct> = group_reduce(
        records,
        |r| (!r.product.is_empty()).then(|| r.product.clone()),
        |totals: &mut ProductTotals, r| {
            totals.quantity += u64::from(r.quantity);
            totals.revenue += r.total_price;
        },
    )
    .into_iter()
    .map(|(name, totals)| RankedProduct {
        name,
        quantity: totals.quantity,
        revenue: totals.revenue,
    })
    .collect();

    match key {
        RankingKey::Revenue => ranked.sort_by(|a, b| {
            b.revenue
                .partial_cmp(&a.revenue)
                .unwrap_or(Ordering::Equal)
        }),
        RankingKey::Quantity => ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity)),
    }
    ranked.truncate(limit);
    ranked
}

// ============================================================================
// TESTS
// ============================================================================
