// src/gui/components/url_form.rs

use eframe::egui::{self, widgets::Spinner};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let enabled = app.can_submit();

    ui.add_space(6.0);
    ui.add_enabled_ui(enabled, |ui| {
        egui::Grid::new("url_form")
            .num_columns(2)
            .spacing([10.0, 10.0])
            .show(ui, |ui| {
                ui.label("Car Data Page URL:");
                ui.add(
                    egui::TextEdit::singleline(&mut app.state.gui.url_text)
                        .desired_width(420.0)
                        .hint_text("https://…"),
                );
                ui.end_row();

                ui.label("");
                ui.horizontal(|ui| {
                    if ui.button("Scrape Data").clicked() {
                        actions::submit(app, ui.ctx());
                    }
                    if app.is_submitting() {
                        ui.add(Spinner::new());
                    }
                });
                ui.end_row();
            });
    });

    ui.separator();
    ui.horizontal(|ui| {
        ui.label("Status:");
        ui.monospace(app.status_text());
    });
}
