// src/gui/actions/submit.rs
use std::{sync::mpsc, thread};

use chrono::Local;
use eframe::egui;

use crate::{
    dialog::Dialog,
    gui::{
        app::{App, FormState},
        progress::GuiProgress,
    },
    pipeline::{self, Outcome},
};

/// Button handler. Blank input is answered on the spot; anything else runs
/// the pipeline on a worker thread.
pub fn submit(app: &mut App, ctx: &egui::Context) {
    if !app.can_submit() {
        return;
    }

    let Some(url) = pipeline::normalize_url(&app.state.gui.url_text).map(str::to_owned) else {
        logf!("UI: empty URL, not submitting");
        app.dialog = Some(Dialog::input_error());
        return;
    };

    logf!("UI: Submit url={}", url);
    app.set_status("Starting…");

    let (tx, rx) = mpsc::channel();
    let services = app.services.clone();
    let config = app.state.options.sheet.clone();
    let mut prog = GuiProgress::new(app.status.clone(), ctx.clone());
    let ctx = ctx.clone();

    thread::spawn(move || {
        let today = Local::now().date_naive();
        let outcome = services.pipeline(&config).submit(&url, today, &mut prog);
        // Receiver gone means the window closed; nothing left to tell.
        let _ = tx.send(outcome);
        ctx.request_repaint();
    });

    app.form = FormState::Submitting(rx);
}

/// Called every frame. Moves Submitting → Idle once the worker has answered.
pub fn poll(app: &mut App) {
    let FormState::Submitting(rx) = &app.form else { return };

    let outcome = match rx.try_recv() {
        Ok(outcome) => outcome,
        Err(mpsc::TryRecvError::Empty) => return,
        Err(mpsc::TryRecvError::Disconnected) => {
            loge!("UI: worker exited without an outcome");
            let dialog = Dialog::aborted();
            app.set_status(dialog.title.clone());
            app.dialog = Some(dialog);
            app.form = FormState::Idle;
            return;
        }
    };

    let dialog = outcome.dialog();
    match &outcome {
        Outcome::Added { row, .. } => app.set_status(format!("Added row {row}")),
        _ => app.set_status(dialog.title.clone()),
    }
    app.dialog = Some(dialog);
    app.form = FormState::Idle;
}
