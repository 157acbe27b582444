// src/gui/components/result_panel.rs

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{core::normalize::display_value, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(reading) = &app.reading else {
        return;
    };

    let rows = [
        ("Region", reading.zone.clone()),
        ("Carbon", display_value(&reading.carbon)),
        ("Fossil fuel %", display_value(&reading.fossil_fuel)),
    ];

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(100.0))
        .column(Column::remainder())
        .body(|mut body| {
            for (name, value) in rows {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.strong(name);
                    });
                    row.col(|ui| {
                        ui.monospace(value);
                    });
                });
            }
        });
}
