// src/core/mod.rs

pub mod normalize;
pub mod types;
pub mod validate;

pub use normalize::normalize;
pub use types::{DataType, FetchRequest, FetchResult, NormalizedReading};
pub use validate::{is_valid_data_type, is_valid_region_code};
