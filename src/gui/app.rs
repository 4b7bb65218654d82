// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc::Receiver},
    time::Duration,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    dialog::Dialog,
    pipeline::{Outcome, Services},
};

use super::{actions, components};

pub const WINDOW_TITLE: &str = "Car Data Scraper";

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    let services = Services::live(&state.options)?;
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state, services)))),
    )?;
    Ok(())
}

/// Idle → Submitting on press; back to Idle once the worker reports.
pub enum FormState {
    Idle,
    Submitting(Receiver<Outcome>),
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub services: Services,

    pub form: FormState,

    /// Outcome of the last submission, shown until dismissed
    pub dialog: Option<Dialog>,

    // status line (worker writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState, services: Services) -> Self {
        logf!(
            "Init: sheet id={} tab='{}'",
            state.options.sheet.spreadsheet_id,
            state.options.sheet.worksheet_name
        );
        Self {
            state,
            services,
            form: FormState::Idle,
            dialog: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    #[inline]
    pub fn is_submitting(&self) -> bool {
        matches!(self.form, FormState::Submitting(_))
    }

    /// No new submission while one is running or a dialog is still up.
    #[inline]
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.dialog.is_none()
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn set_status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll(self);

        egui::CentralPanel::default().show(ctx, |ui| {
            components::url_form::draw(ui, self);
        });

        components::dialog::draw(ctx, self);

        if self.is_submitting() {
            // Worker repaints on finish; this keeps the spinner moving meanwhile.
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
