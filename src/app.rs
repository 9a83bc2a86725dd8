use eframe::egui;

use crate::export;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct SeriesViewerApp {
    pub state: AppState,
}

impl SeriesViewerApp {
    /// Files dropped onto the window act like File → Open….
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if !dropped.is_empty() {
            panels::load_dropped(&mut self.state, &dropped);
        }
    }

    /// Finish a pending chart export once the screenshot arrives.
    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        let screenshot = ctx.input(|i| {
            i.raw.events.iter().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        // The screenshot lands a frame or two after the request.
        let Some(image) = screenshot else {
            return;
        };
        let Some(path) = self.state.pending_export.take() else {
            return;
        };

        let region = self
            .state
            .chart_rect
            .map(|rect| rect.intersect(ctx.screen_rect()));
        match export::save_png(&path, &image, region, ctx.pixels_per_point()) {
            Ok(()) => {
                log::info!("Exported chart to {}", path.display());
                self.state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export chart: {e:#}");
                self.state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

impl eframe::App for SeriesViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.handle_screenshot(ctx);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: selectors ----
        egui::SidePanel::left("selection_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: preview and chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::central_panel(ui, &mut self.state);
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use eframe::egui::{Color32, ColorImage, RawInput, UserData, ViewportId};

    fn run_frame(app: &mut SeriesViewerApp, input: RawInput) {
        let ctx = egui::Context::default();
        let _ = ctx.run(input, |ctx| app.handle_screenshot(ctx));
    }

    #[test]
    fn pending_export_waits_for_screenshot_event() {
        let path = std::env::temp_dir().join("series_viewer_pending.png");
        let mut app = SeriesViewerApp::default();
        app.state.pending_export = Some(path.clone());

        run_frame(&mut app, RawInput::default());
        assert_eq!(app.state.pending_export.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn screenshot_event_writes_pending_export() {
        let path = std::env::temp_dir().join("series_viewer_screenshot.png");
        let _ = std::fs::remove_file(&path);
        let mut app = SeriesViewerApp::default();
        app.state.pending_export = Some(path.clone());

        let input = RawInput {
            events: vec![egui::Event::Screenshot {
                viewport_id: ViewportId::ROOT,
                user_data: UserData::default(),
                image: Arc::new(ColorImage::new([4, 4], Color32::WHITE)),
            }],
            ..RawInput::default()
        };
        run_frame(&mut app, input);

        assert!(app.state.pending_export.is_none());
        assert!(path.exists());
        assert!(app.state.status_message.is_none());
        let _ = std::fs::remove_file(&path);
    }
}
