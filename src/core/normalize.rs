// src/core/normalize.rs
//
// Pulls zone / carbon / fossil-fuel out of the API's inconsistent JSON shapes.
// A field is present when the key exists and is not null; 0 and "" count.

use serde_json::Value;

use crate::config::consts::NOT_AVAILABLE;
use super::types::NormalizedReading;

type FieldPath = &'static [&'static str];

pub const ZONE_CHAIN: &[FieldPath] = &[
    &["zone"],
    &["data", "zone"],
];

pub const CARBON_CHAIN: &[FieldPath] = &[
    &["carbonIntensity"],
    &["data", "carbonIntensity"],
    &["mean"],
    &["carbon"],
];

pub const FOSSIL_CHAIN: &[FieldPath] = &[
    &["fossilFuelPercentage"],
    &["data", "fossil"],
    &["fossilFuel"],
];

/// Walk `path` through nested objects. Missing keys, non-object parents and
/// `null` leaves are all absent.
pub fn lookup<'a>(json: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = json;
    for key in path {
        cur = cur.as_object()?.get(*key)?;
    }
    if cur.is_null() { None } else { Some(cur) }
}

/// First present value along `chain`.
pub fn first_present<'a>(json: &'a Value, chain: &[FieldPath]) -> Option<&'a Value> {
    chain.iter().find_map(|path| lookup(json, path))
}

pub fn normalize(json: &Value, requested_region: &str) -> NormalizedReading {
    let zone = first_present(json, ZONE_CHAIN)
        .map(display_value)
        .unwrap_or_else(|| s!(requested_region));

    let carbon = first_present(json, CARBON_CHAIN)
        .cloned()
        .unwrap_or_else(not_available);

    let fossil_fuel = first_present(json, FOSSIL_CHAIN)
        .cloned()
        .unwrap_or_else(not_available);

    NormalizedReading { zone, carbon, fossil_fuel }
}

/// Text as the popup shows it: strings bare, anything else as JSON.
pub fn display_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn not_available() -> Value {
    Value::String(s!(NOT_AVAILABLE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_stops_at_non_object_parent() {
        let v = json!({ "data": 5 });
        assert_eq!(lookup(&v, &["data", "zone"]), None);
    }

    #[test]
    fn lookup_treats_null_as_absent() {
        let v = json!({ "zone": null });
        assert_eq!(lookup(&v, &["zone"]), None);
    }

    #[test]
    fn chain_order_wins_over_depth() {
        let v = json!({ "mean": 7, "data": { "carbonIntensity": 9 } });
        assert_eq!(first_present(&v, CARBON_CHAIN), Some(&json!(9)));
    }

    #[test]
    fn display_keeps_strings_bare() {
        assert_eq!(display_value(&json!("DE")), "DE");
        assert_eq!(display_value(&json!(12.5)), "12.5");
    }
}
