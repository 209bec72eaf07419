//! FILENAME: engine/src/record.rs
//! PURPOSE: Defines the fundamental data structures for a single sale record.
//! CONTEXT: This file contains the `RawRecord` boundary type and the canonical
//! `SaleRecord` struct. It separates the upstream feed's loose shape from the
//! strictly-typed record every downstream view computes over.

use serde::{Deserialize, Serialize};

/// A record as it arrives from the upstream feed: an untyped JSON mapping
/// with no guaranteed keys, spellings, or value types.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// The canonical sale record. Immutable once produced by normalization;
/// every field is guaranteed present and typed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaleRecord {
    /// Source identifier; empty if the feed carried none.
    pub sale_id: String,

    /// `YYYY-MM-DD` date string, or empty if the source value was not a
    /// string. Kept as text; calendar parsing happens only where a view
    /// needs calendar order.
    pub date: String,

    /// Sales region; possibly empty.
    pub region: String,

    /// Product name; possibly empty.
    pub product: String,

    /// Units sold. Parse failures and negative values degrade to 0.
    pub quantity: u32,

    /// Price per unit. Parse failures degrade to 0.
    pub unit_price: f64,

    /// Revenue for this sale, used as given. No `quantity * unit_price`
    /// consistency is enforced; the feed is the source of truth.
    pub total_price: f64,
}
