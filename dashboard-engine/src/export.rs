//! FILENAME: dashboard-engine/src/export.rs
//! PURPOSE: Shapes the filtered subset for the export collaborator.
//! CONTEXT: CSV and PDF byte layout belong to the exporter, not the engine.
//! The engine only guarantees what the exporter is handed: rows in a fixed
//! column order plus the summary metrics stamped on the report header.

use engine::SaleRecord;
use serde::{Deserialize, Serialize};

use crate::view::{self, Metrics};

/// Column headers, in the order `ExportRow` serializes its fields.
pub const EXPORT_COLUMNS: [&str; 6] = [
    "Date",
    "Region",
    "Product",
    "Quantity",
    "Unit Price",
    "Total Price",
];

/// One exportable row. Field order is the contract with the exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRow {
    pub date: String,
    pub region: String,
    pub product: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

impl From<&SaleRecord> for ExportRow {
    fn from(record: &SaleRecord) -> Self {
        ExportRow {
            date: record.date.clone(),
            region: record.region.clone(),
            product: record.product.clone(),
            quantity: record.quantity,
            unit_price: record.unit_price,
            total_price: record.total_price,
        }
    }
}

/// The full payload handed to the exporter for one report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub metrics: Metrics,
    pub rows: Vec<ExportRow>,
}

/// Shapes the filtered subset into export rows, preserving row order.
pub fn export_rows(records: &[SaleRecord]) -> Vec<ExportRow> {
    records.iter().map(ExportRow::from).collect()
}

/// Builds the report payload: header metrics plus the rows.
pub fn report(records: &[SaleRecord]) -> SalesReport {
    SalesReport {
        metrics: view::metrics(records),
        rows: export_rows(records),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_preserves_row_order_and_field_values() {
        let records = vec![
            SaleRecord {
                date: "2024-01-02".to_string(),
                region: "B".to_string(),
                product: "Y".to_string(),
                quantity: 2,
                unit_price: 5.0,
                total_price: 10.0,
                ..SaleRecord::default()
            },
            SaleRecord {
                date: "2024-01-01".to_string(),
                region: "A".to_string(),
                product: "X".to_string(),
                ..SaleRecord::default()
            },
        ];
        let rows = export_rows(&records);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "2024-01-02");
        assert_eq!(rows[0].unit_price, 5.0);
        assert_eq!(rows[1].region, "A");
    }

    #[test]
    fn it_serializes_fields_in_the_contract_order() {
        let row = ExportRow {
            date: "2024-01-01".to_string(),
            region: "A".to_string(),
            product: "X".to_string(),
            quantity: 1,
            unit_price: 2.0,
            total_price: 2.0,
        };
        let json = serde_json::to_string(&row).unwrap();
        let date_at = json.find("\"date\"").unwrap();
        let region_at = json.find("\"region\"").unwrap();
        let total_at = json.find("\"totalPrice\"").unwrap();
        assert!(date_at < region_at && region_at < total_at);
    }

    #[test]
    fn it_exposes_one_header_per_row_field() {
        assert_eq!(EXPORT_COLUMNS.len(), 6);
        assert_eq!(EXPORT_COLUMNS[0], "Date");
        assert_eq!(EXPORT_COLUMNS[5], "Total Price");
    }

    #[test]
    fn it_stamps_summary_metrics_on_the_report() {
        let records = vec![SaleRecord {
            total_price: 42.0,
            quantity: 3,
            ..SaleRecord::default()
        }];
        let report = report(&records);
        assert_eq!(report.metrics.total_revenue, 42.0);
        assert_eq!(report.metrics.total_quantity, 3);
        assert_eq!(report.rows.len(), 1);
    }
}
