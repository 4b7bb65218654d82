// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::progress::{Progress, Stage};

/// Mirrors pipeline progress into the status line and wakes the UI.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(format!("{} ({}/{})", msg, self.done + 1, self.total));
    }
    fn stage_done(&mut self, stage: Stage) {
        self.done += 1;
        logd!("UI: stage {:?} done ({}/{})", stage, self.done, self.total);
    }
    fn finish(&mut self) {
        if self.done == self.total {
            self.set_status(s!("Done"));
        } else {
            self.set_status(format!("Stopped after {}/{} steps", self.done, self.total));
        }
    }
}
