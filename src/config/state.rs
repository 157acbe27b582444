// src/config/state.rs
use super::consts::{WINDOW_H, WINDOW_W};
use super::options::ApiOptions;
use crate::form::FormState;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub form: FormState,
    pub window_w: f32,
    pub window_h: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            form: FormState::default(),
            window_w: WINDOW_W,
            window_h: WINDOW_H,
        }
    }
}

impl GuiState {
    pub fn viewport_size(&self) -> [f32; 2] {
        [self.window_w, self.window_h]
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: ApiOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: ApiOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ApiOptions::default())
    }
}
