// src/form.rs
//
// Popup form state: live per-field validity, submit gate, clear.
// No UI types here so the whole flow is testable without a window.

use crate::config::consts::{MSG_DATA_TYPE_INVALID, MSG_REGION_INVALID};
use crate::core::validate::{is_valid_data_type, is_valid_region_code, normalize_region};
use crate::core::{DataType, FetchRequest};

/// Border state for one field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Untouched,
    Valid,
    Invalid,
}

impl FieldState {
    pub fn from_valid(ok: bool) -> Self {
        if ok { FieldState::Valid } else { FieldState::Invalid }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormInput {
    /// Raw selector value; "" until the user picks something.
    pub data_type: String,
    /// Raw text as typed.
    pub region_code: String,
}

impl FormInput {
    pub fn new(data_type: impl Into<String>, region_code: impl Into<String>) -> Self {
        Self { data_type: data_type.into(), region_code: region_code.into() }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FormState {
    pub input: FormInput,
    pub region_state: FieldState,
    pub data_type_state: FieldState,
    /// Shown in order, one line each.
    pub errors: Vec<String>,
}

impl FormState {
    /// Region text changed.
    pub fn on_region_input(&mut self) {
        self.region_state = FieldState::from_valid(is_valid_region_code(&self.input.region_code));
    }

    /// Data-type selection changed.
    pub fn on_data_type_change(&mut self) {
        self.data_type_state = FieldState::from_valid(is_valid_data_type(&self.input.data_type));
    }

    /// Gate a submission. On failure the errors list is filled (region first)
    /// and both field states reflect the check.
    pub fn submit(&mut self) -> Option<FetchRequest> {
        self.errors.clear();

        let data_type_ok = is_valid_data_type(&self.input.data_type);
        let region_ok = is_valid_region_code(&self.input.region_code);

        self.region_state = FieldState::from_valid(region_ok);
        self.data_type_state = FieldState::from_valid(data_type_ok);

        if !region_ok {
            self.errors.push(s!(MSG_REGION_INVALID));
        }
        if !data_type_ok {
            self.errors.push(s!(MSG_DATA_TYPE_INVALID));
        }
        if !self.errors.is_empty() {
            logd!("Form: Blocked ({} error(s))", self.errors.len());
            return None;
        }

        // Both checks passed, so the parse cannot miss.
        let data_type = self.input.data_type.parse::<DataType>().ok()?;
        Some(FetchRequest {
            data_type,
            region: normalize_region(&self.input.region_code),
            api_key: None,
        })
    }

    /// Reset borders and errors. Field values stay.
    pub fn clear(&mut self) {
        self.region_state = FieldState::Untouched;
        self.data_type_state = FieldState::Untouched;
        self.errors.clear();
    }
}
