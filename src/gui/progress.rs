// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::progress::Progress;

/// Mirrors conversion progress into the status line and wakes the UI.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: Option<egui::Context>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, ctx: None, done: 0, failed: 0, total: 0 }
    }

    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.ctx = Some(ctx);
        self
    }

    fn set_status(&self, msg: impl Into<String>) {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = msg.into();
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Converting {total} file(s)…"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, _slot: usize, name: &str) {
        self.done += 1;
        self.set_status(format!("Read {} ({}/{})", name, self.done + self.failed, self.total));
    }
    fn item_failed(&mut self, _slot: usize, name: &str, _reason: &str) {
        self.failed += 1;
        self.set_status(format!("Failed {} ({}/{})", name, self.done + self.failed, self.total));
    }
    fn finish(&mut self) {
        if self.failed == 0 {
            self.set_status(format!("Converted {} game(s)", self.done));
        } else {
            self.set_status(format!("Converted {} game(s), {} failed", self.done, self.failed));
        }
    }
}
