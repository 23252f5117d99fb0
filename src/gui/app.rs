// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    convert::{Report, Source},
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Rink Stats",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // files queued for the next conversion, in selection order
    pub selection: Vec<Source>,

    // last finished conversion
    pub report: Option<Report>,

    // worker → UI handoff
    pub pending: Arc<Mutex<Option<Report>>>,
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    // modal prompt (drop rejected, nothing selected, copy failed)
    pub alert: Option<String>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: window={}x{}", state.gui.window_w, state.gui.window_h);
        Self {
            state,
            selection: Vec::new(),
            report: None,
            pending: Arc::new(Mutex::new(None)),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            alert: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = msg.into();
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    #[inline]
    pub fn alert<T: Into<String>>(&mut self, msg: T) {
        let msg = msg.into();
        logd!("Alert: {}", msg);
        self.alert = Some(msg);
    }

    /// Replace the selection, keeping the first three.
    pub fn set_selection(&mut self, sources: Vec<Source>) {
        self.selection = crate::convert::select(sources);
        self.set_selection_message();
    }

    pub fn set_selection_message(&self) {
        let n = self.selection.len();
        self.status(format!("Selection: {n} file(s), not converted yet"));
    }

    /// Move a finished report from the worker into view.
    fn poll_pending(&mut self) {
        let done = self.pending.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(report) = done {
            self.report = Some(report);
            self.running = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending();
        actions::take_dropped(self, ctx);

        egui::SidePanel::left("files")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                components::file_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::games_view::draw(ui, self);
        });

        components::alert::draw(ctx, self);
    }
}
