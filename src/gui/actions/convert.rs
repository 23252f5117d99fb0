// src/gui/actions/convert.rs
use std::thread;

use eframe::egui;

use crate::{
    convert,
    error::ConvertError,
    gui::{app::App, progress::GuiProgress},
};

/// Start a conversion of the current selection on a background thread. The
/// previous output is cleared first.
pub fn convert(app: &mut App, ctx: &egui::Context) {
    if app.running {
        logd!("Convert: Clicked while running, ignored");
        return;
    }
    if app.selection.is_empty() {
        app.alert(ConvertError::NoFiles.to_string());
        return;
    }

    app.report = None;
    app.running = true;

    let sources = app.selection.clone();
    let pending = app.pending.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();

    logf!("Convert: Dispatch files={}", sources.len());

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status).with_repaint(ctx.clone());

        // → This is where the conversion happens ←
        let report = match convert::convert(&sources, Some(&mut prog)) {
            Ok(r) => r,
            Err(e) => {
                // only NoFiles, already ruled out above
                loge!("Convert: {}", e);
                Default::default()
            }
        };

        *pending.lock().unwrap_or_else(|e| e.into_inner()) = Some(report);
        ctx.request_repaint();
    });
}
