// src/core/validate.rs
//
// Input grammars: the data-type set and the region-code pattern.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::DATA_TYPES;

// Two-letter country, then zero or more "-SEG" groups.
static REGION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}(?:-[A-Z0-9]+)*$").expect("region pattern compiles")
});

pub fn is_valid_data_type(value: &str) -> bool {
    DATA_TYPES.contains(&value)
}

pub fn is_valid_region_code(value: &str) -> bool {
    REGION_RE.is_match(&normalize_region(value))
}

pub fn normalize_region(value: &str) -> String {
    // BOM is not Unicode whitespace, but browsers' trim drops it too.
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_uppercase()
}
