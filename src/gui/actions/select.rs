// src/gui/actions/select.rs
use std::path::PathBuf;

use eframe::egui;

use crate::{
    config::consts::{MAX_FILES, MSG_DROP_BUSY},
    convert::{accept_dropped, Dropped, Source},
    gui::app::App,
};

fn to_dropped(f: &egui::DroppedFile) -> Option<Dropped> {
    let name = if !f.name.is_empty() {
        f.name.clone()
    } else {
        f.path.as_ref()?.file_name()?.to_string_lossy().into_owned()
    };

    let source = match (&f.path, &f.bytes) {
        (Some(path), _) => Source::from_path(path.clone()),
        (None, Some(bytes)) => Source::from_bytes(name.clone(), bytes.clone()),
        (None, None) => return None,
    };
    Some(Dropped { name, mime: f.mime.clone(), source })
}

/// Replace the selection with whatever JSON was dropped this frame.
pub fn take_dropped(app: &mut App, ctx: &egui::Context) {
    let files = ctx.input(|i| i.raw.dropped_files.clone());
    if !files.is_empty() {
        apply_drop(app, &files);
    }
}

fn apply_drop(app: &mut App, files: &[egui::DroppedFile]) {
    if app.running {
        logd!("Drop: {} file(s) ignored, conversion running", files.len());
        app.status(MSG_DROP_BUSY);
        return;
    }

    let items: Vec<Dropped> = files.iter().filter_map(to_dropped).collect();
    logd!("Drop: {} file(s), {} usable", files.len(), items.len());

    match accept_dropped(items) {
        Ok(sources) => app.set_selection(sources),
        Err(e) => app.alert(e.to_string()),
    }
}

/// Append the path typed into the side panel.
pub fn add_path(app: &mut App) {
    let text = app.state.gui.path_text.trim().to_string();
    if text.is_empty() {
        return;
    }
    if app.selection.len() >= MAX_FILES {
        app.status(format!("Already {MAX_FILES} files selected"));
        return;
    }

    let path = PathBuf::from(&text);
    logf!("Select: add {}", path.display());
    app.selection.push(Source::from_path(path));
    app.state.gui.path_text.clear();
    app.set_selection_message();
}

pub fn clear(app: &mut App) {
    app.selection.clear();
    app.report = None;
    app.status("Idle");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::state::AppState;
    use std::sync::Arc;

    fn dropped(name: &str, mime: &str) -> egui::DroppedFile {
        egui::DroppedFile {
            name: s!(name),
            mime: s!(mime),
            bytes: Some(Arc::from(&b"{}"[..])),
            ..Default::default()
        }
    }

    #[test]
    fn drop_replaces_selection() {
        let mut app = App::new(AppState::default());
        apply_drop(&mut app, &[dropped("a.json", ""), dropped("notes.txt", "text/plain")]);
        let names: Vec<_> = app.selection.iter().map(Source::name).collect();
        assert_eq!(names, ["a.json"]);
        assert!(app.alert.is_none());
    }

    #[test]
    fn rejected_drop_keeps_selection() {
        let mut app = App::new(AppState::default());
        app.selection.push(Source::from_path("kept.json"));
        apply_drop(&mut app, &[dropped("pic.png", "image/png")]);
        assert_eq!(app.selection.len(), 1);
        assert_eq!(app.alert.as_deref(), Some("Please drop JSON files."));
    }

    #[test]
    fn drop_while_running_is_reported() {
        let mut app = App::new(AppState::default());
        app.running = true;
        apply_drop(&mut app, &[dropped("a.json", "")]);
        assert!(app.selection.is_empty());
        assert_eq!(app.status_text(), MSG_DROP_BUSY);
    }
}
