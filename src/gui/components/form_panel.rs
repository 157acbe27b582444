// src/gui/components/form_panel.rs
//
// Region field, data-type selector, Submit / Clear, error list.

use eframe::egui::{self, Color32, Response, Stroke, widgets::Spinner};

use crate::{core::DataType, form::FieldState, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let form = &mut app.state.gui.form;

        // --- Region ---
        ui.horizontal(|ui| {
            ui.label("Region:");
            let resp = bordered(ui, form.region_state, |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut form.input.region_code)
                        .hint_text("US-NEISO")
                        .font(egui::TextStyle::Monospace),
                )
            });
            if resp.changed() {
                form.on_region_input();
                logd!("UI: region → {:?} ({:?})", form.input.region_code, form.region_state);
            }
        });

        // --- Data type ---
        ui.horizontal(|ui| {
            ui.label("Data:");
            let mut changed = false;
            let _ = bordered(ui, form.data_type_state, |ui| {
                egui::ComboBox::from_id_salt("data_type")
                    .selected_text(selected_label(&form.input.data_type))
                    .show_ui(ui, |ui| {
                        changed |= ui
                            .selectable_value(&mut form.input.data_type, s!(), "Select…")
                            .changed();
                        for dt in DataType::ALL {
                            changed |= ui
                                .selectable_value(&mut form.input.data_type, s!(dt.as_str()), dt.label())
                                .changed();
                        }
                    })
                    .response
            });
            if changed {
                form.on_data_type_change();
                logf!("UI: data type → {:?}", form.input.data_type);
            }
        });
    }

    // --- Actions ---
    let mut submit_clicked = false;
    ui.horizontal(|ui| {
        submit_clicked = ui.button("Submit").clicked();

        if ui.button("Clear").clicked() {
            app.state.gui.form.clear();
            logd!("UI: Form cleared");
        }

        if app.loading() {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());
    });

    // Enter submits
    if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        submit_clicked = true;
    }

    if submit_clicked {
        let ctx = ui.ctx().clone();
        app.submit(&ctx);
    }

    // --- Errors ---
    for err in &app.state.gui.form.errors {
        ui.colored_label(Color32::RED, err);
    }
}

fn selected_label(value: &str) -> &'static str {
    value
        .parse::<DataType>()
        .map(DataType::label)
        .unwrap_or("Select…")
}

/// Green / red outline per validity; none while untouched.
fn bordered(
    ui: &mut egui::Ui,
    state: FieldState,
    add_contents: impl FnOnce(&mut egui::Ui) -> Response,
) -> Response {
    let stroke = match state {
        FieldState::Untouched => Stroke::NONE,
        FieldState::Valid => Stroke::new(2.0, Color32::GREEN),
        FieldState::Invalid => Stroke::new(2.0, Color32::RED),
    };
    egui::Frame::new()
        .stroke(stroke)
        .inner_margin(egui::Margin::same(2))
        .show(ui, add_contents)
        .inner
}
