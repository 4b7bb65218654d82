// src/gui/components/dialog.rs
//
// Outcome popup. Centered, not collapsible; the form stays disabled until OK.

use eframe::egui;

use crate::{
    dialog::DialogLevel,
    gui::app::App,
};

fn badge(level: DialogLevel) -> (&'static str, egui::Color32) {
    match level {
        DialogLevel::Info => ("ℹ", egui::Color32::from_rgb(60, 140, 220)),
        DialogLevel::Warning => ("⚠", egui::Color32::from_rgb(230, 170, 30)),
        DialogLevel::Error => ("❌", egui::Color32::from_rgb(220, 30, 30)),
    }
}

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(dialog) = &app.dialog else { return };

    let mut close = false;
    egui::Window::new(dialog.title.as_str())
        .id(egui::Id::new("outcome_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let (icon, color) = badge(dialog.level);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icon).color(color).size(20.0));
                ui.label(dialog.message.as_str());
            });
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
            if ui.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)) {
                close = true;
            }
        });

    if close {
        logd!("UI: dialog '{}' dismissed", dialog.title);
        app.dialog = None;
    }
}
