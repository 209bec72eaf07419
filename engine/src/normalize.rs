//! FILENAME: engine/src/normalize.rs
//! PURPOSE: Repairs raw feed records into canonical `SaleRecord`s.
//! CONTEXT: The upstream feed has uneven schema quality: a misspelled region
//! key, a legacy id key, dates that are sometimes not strings, and numbers
//! that arrive as strings. All of that tolerance lives here and nowhere else.
//! Normalization is total (every input maps to exactly one record, none are
//! dropped or rejected) and idempotent (a canonical record passes through
//! unchanged).

use serde_json::Value;

use crate::record::{RawRecord, SaleRecord};

// ============================================================================
// FIELD KEY TOLERANCE
// ============================================================================

/// Accepted spellings for the region field. `reigon` is a known feed typo.
const REGION_KEYS: [&str; 2] = ["region", "reigon"];

/// Accepted keys for the sale identifier. `id` is the legacy feed key.
const SALE_ID_KEYS: [&str; 3] = ["saleId", "sale_id", "id"];

const UNIT_PRICE_KEYS: [&str; 2] = ["unitPrice", "unit_price"];
const TOTAL_PRICE_KEYS: [&str; 2] = ["totalPrice", "total_price"];

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Normalizes one raw feed value into a canonical record.
///
/// Never fails: malformed fields degrade to empty strings or zero, and a
/// value that is not a JSON object at all yields an all-default record.
pub fn normalize_record(raw: &Value) -> SaleRecord {
    let map = match raw.as_object() {
        Some(map) => map,
        None => return SaleRecord::default(),
    };

    SaleRecord {
        sale_id: first_string(map, &SALE_ID_KEYS),
        // Pass-through policy: the date is kept only if it is already a
        // string. Non-string date representations are not coerced here.
        date: first_string(map, &["date"]),
        region: first_string(map, &REGION_KEYS),
        product: first_string(map, &["product"]),
        quantity: parse_quantity(first_value(map, &["quantity"])),
        unit_price: parse_price(first_value(map, &UNIT_PRICE_KEYS)),
        total_price: parse_price(first_value(map, &TOTAL_PRICE_KEYS)),
    }
}

/// Normalizes a whole feed snapshot. Output length always equals input length.
pub fn normalize_records(raw: &[Value]) -> Vec<SaleRecord> {
    raw.iter().map(normalize_record).collect()
}

// ============================================================================
// FIELD COERCION HELPERS
// ============================================================================

/// Returns the value under the first key present in the map, if any.
fn first_value<'a>(map: &'a RawRecord, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| map.get(*key))
}

/// Returns the first key's value that is actually a string, else empty.
fn first_string(map: &RawRecord, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
        .unwrap_or("")
        .to_string()
}

/// Parses a quantity from a JSON number or numeric string.
/// Fractional values truncate; failures and negatives yield 0.
fn parse_quantity(value: Option<&Value>) -> u32 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() && n > 0.0 => n.trunc().min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

/// Parses a price from a JSON number or numeric string.
/// Failures, non-finite values, and negatives yield 0.
fn parse_price(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() && n >= 0.0 => n,
        _ => 0.0,
    }
}

// ============================================================================
// TESTS
// ============================================================================
