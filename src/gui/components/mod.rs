// src/gui/components/mod.rs
pub mod form_panel;
pub mod result_panel;
