// src/config/consts.rs

// Net config
pub const API_BASE_URL: &str = "https://api.electricitymaps.com";
pub const API_VERSION: &str = "v3";
pub const API_ENDPOINT: &str = "latest";
pub const AUTH_HEADER: &str = "auth-token";
pub const USER_AGENT: &str = concat!("grid_carbon/", env!("CARGO_PKG_VERSION"));

// Environment
pub const ENV_TOKEN: &str = "GRID_CARBON_TOKEN";
pub const ENV_BASE_URL: &str = "GRID_CARBON_BASE_URL";
pub const ENV_LOG: &str = "GRID_CARBON_LOG";

/// Build-time secret, if one was injected.
pub const BUILD_TOKEN: Option<&str> = option_env!("GRID_CARBON_TOKEN");

// Local state
pub const STATE_DIR: &str = ".grid_carbon";
pub const LOG_FILE: &str = "debug.log";

// Message contract with the background worker
pub const ACTION_FETCH: &str = "fetchCarbon";

// Data types accepted by the API
pub const DATA_TYPES: [&str; 2] = ["carbon-intensity", "electricity-mix"];

// Normalized output sentinel
pub const NOT_AVAILABLE: &str = "N/A";

// User-facing messages
pub const MSG_REGION_INVALID: &str = "Region code invalid. Use formats like \"US-NEISO\" or \"CM\".";
pub const MSG_DATA_TYPE_INVALID: &str = "Please select a valid data type.";
pub const MSG_NO_RESPONSE: &str = "No response from background.";
pub const MSG_FETCH_FAILED: &str = "Failed to fetch data.";
pub const MSG_MISSING_FIELDS: &str = "Missing data_type or region";

// GUI
pub const WINDOW_W: f32 = 360.0;
pub const WINDOW_H: f32 = 320.0;
