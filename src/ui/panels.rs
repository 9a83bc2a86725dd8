use std::path::Path;

use eframe::egui::{self, Color32, DroppedFile, RichText, ScrollArea, Ui};

use crate::data::loader;
use crate::data::model::LabelEntry;
use crate::error::{Severity, ViewError};
use crate::state::AppState;
use crate::ui::{plot, table};

const PREVIEW_HEIGHT: f32 = 220.0;

// ---------------------------------------------------------------------------
// Left side panel – row and series selectors
// ---------------------------------------------------------------------------

/// Render the left selection panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Step 1: Label rows");
    ui.separator();

    if state.grid.is_none() {
        ui.label("No file loaded.");
        return;
    }

    let options: Vec<String> = state.label_index.iter().map(LabelEntry::display).collect();
    if options.is_empty() {
        ui.label(RichText::new("Column 0 has no labels.").color(ui.visuals().error_fg_color));
    } else {
        ui.label("Starting row");
        if let Some(label) = label_combo(ui, "start_row", state.selection.start.as_deref(), &options) {
            state.set_start(label);
        }
        ui.label("Ending row");
        if let Some(label) = label_combo(ui, "end_row", state.selection.end.as_deref(), &options) {
            state.set_end(label);
        }
    }

    ui.add_space(8.0);
    ui.heading("Step 2: Series");
    ui.separator();

    let names = match &state.catalog {
        Some(Ok(catalog)) => catalog.names(),
        Some(Err(e)) => {
            ui.label(RichText::new(e.to_string()).color(ui.visuals().error_fg_color));
            return;
        }
        None => return,
    };

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
        ui.label(format!("{}/{}", state.selection.series.len(), names.len()));
    });

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for name in &names {
                let mut checked = state.selection.series.contains(name);
                let text = RichText::new(name).color(state.colors.color_for(name));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_series(name);
                }
            }
        });
}

/// Drop-down over the label index. Returns the newly picked option, if any.
fn label_combo(ui: &mut Ui, id: &str, current: Option<&str>, options: &[String]) -> Option<String> {
    let mut picked = None;
    egui::ComboBox::from_id_salt(id)
        .width(ui.available_width())
        .selected_text(current.unwrap_or(""))
        .show_ui(ui, |ui: &mut Ui| {
            for option in options {
                if ui
                    .selectable_label(current == Some(option.as_str()), option)
                    .clicked()
                {
                    picked = Some(option.clone());
                }
            }
        });
    picked
}

// ---------------------------------------------------------------------------
// Central panel – preview, notices, chart
// ---------------------------------------------------------------------------

/// Render the data preview and the result of the current pass.
pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    let Some(grid) = &state.grid else {
        state.chart_rect = None;
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a CSV file to begin  (File → Open… or drop it here)");
        });
        return;
    };

    egui::CollapsingHeader::new(RichText::new("Full Data Preview").strong())
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            table::data_preview(ui, grid, PREVIEW_HEIGHT);
        });
    ui.separator();

    match state.outcome().cloned() {
        Some(Ok(chart)) => {
            state.chart_rect = Some(plot::scatter_plot(ui, &chart));
        }
        Some(Err(e)) => {
            state.chart_rect = None;
            notice(ui, &e);
        }
        None => state.chart_rect = None,
    }
}

fn notice(ui: &mut Ui, err: &ViewError) {
    let (icon, color) = match err.severity() {
        Severity::Info => ("ℹ", ui.visuals().text_color()),
        Severity::Warning => ("⚠", ui.visuals().warn_fg_color),
        Severity::Error => ("✖", ui.visuals().error_fg_color),
    };
    ui.label(RichText::new(format!("{icon} {err}")).color(color).size(15.0));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_export = state.chart_rect.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export chart…"))
                .clicked()
            {
                export_dialog(ui.ctx(), state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(name), Some(grid)) = (&state.file_name, &state.grid) {
            ui.label(format!(
                "{name}: {} rows × {} columns",
                grid.len(),
                grid.width()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs and uploads
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open CSV file")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        load_path(state, &path);
    }
}

/// Load a file from disk, replacing the current grid.
pub fn load_path(state: &mut AppState, path: &Path) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    finish_load(state, name, loader::load_file(path));
}

/// Load the first of the files dropped onto the window.
pub fn load_dropped(state: &mut AppState, files: &[DroppedFile]) {
    let Some(file) = files.first() else {
        return;
    };
    if files.len() > 1 {
        log::warn!("{} files dropped, loading only the first", files.len());
    }

    if let Some(path) = &file.path {
        load_path(state, path);
    } else if let Some(bytes) = &file.bytes {
        finish_load(state, file.name.clone(), loader::load_bytes(&file.name, bytes));
    }
}

fn finish_load(
    state: &mut AppState,
    name: String,
    result: anyhow::Result<crate::data::model::Grid>,
) {
    match result {
        Ok(grid) => {
            log::info!(
                "Loaded {name}: {} rows, {} columns",
                grid.len(),
                grid.width()
            );
            state.set_grid(name, grid);
        }
        Err(e) => {
            log::error!("Failed to load file: {e:#}");
            state.clear_grid(format!("Error: {e:#}"));
        }
    }
}

/// Ask where to save the chart, then request a screenshot of the viewport.
/// The image arrives as an event on a later frame.
fn export_dialog(ctx: &egui::Context, state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export chart")
        .add_filter("PNG image", &["png"])
        .set_file_name("scatter.png")
        .save_file();

    if let Some(path) = file {
        state.pending_export = Some(path.with_extension("png"));
        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
    }
}
