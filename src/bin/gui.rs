// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use grid_carbon::{
    config::{options::ApiOptions, state::AppState},
    gui,
};

fn main() {
    let state = AppState::new(ApiOptions::from_env());
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(state.gui.viewport_size())
            .with_resizable(false),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
