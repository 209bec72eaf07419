//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the sales record engine.
//! CONTEXT: Re-exports the canonical record model and the normalizer for use
//! by other crates. All schema tolerance is confined to this crate; consumers
//! only ever see `SaleRecord`.

pub mod normalize;
pub mod record;

// Re-export commonly used types at the crate root
pub use normalize::{normalize_record, normalize_records};
pub use record::{RawRecord, SaleRecord};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_builds_canonical_records() {
        let raw = vec![json!({ "region": "North", "total_price": 12.0 })];
        let records = normalize_records(&raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].region, "North");
        assert_eq!(records[0].total_price, 12.0);
    }

    #[test]
    fn it_serializes_records_in_camel_case() {
        let record = SaleRecord {
            sale_id: "s-1".to_string(),
            unit_price: 2.5,
            ..SaleRecord::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["saleId"], "s-1");
        assert_eq!(value["unitPrice"], 2.5);
    }
}
