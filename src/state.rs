use std::path::PathBuf;

use eframe::egui::Rect;

use crate::chart::ScatterChart;
use crate::color::SeriesColors;
use crate::data::catalog::SeriesCatalog;
use crate::data::labels::{build_label_index, default_end_entry};
use crate::data::model::{Grid, LabelEntry};
use crate::data::pipeline::{Selection, run_pass};
use crate::error::ViewError;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded grid (None until a file is loaded successfully).
    pub grid: Option<Grid>,

    /// Name of the loaded file, for the top bar.
    pub file_name: Option<String>,

    /// Selectable row labels for the current grid.
    pub label_index: Vec<LabelEntry>,

    /// Series names of the current grid, or why there are none.
    pub catalog: Option<Result<SeriesCatalog, ViewError>>,

    /// Colour per series name.
    pub colors: SeriesColors,

    /// Current row and series picks.
    pub selection: Selection,

    /// Result of the last pass (cached until the next change).
    outcome: Option<Result<ScatterChart, ViewError>>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Screen rectangle of the chart in the last frame.
    pub chart_rect: Option<Rect>,

    /// Where the next screenshot goes.
    pub pending_export: Option<PathBuf>,
}

impl AppState {
    /// Ingest a newly loaded grid and reset every selection to its default.
    pub fn set_grid(&mut self, name: String, grid: Grid) {
        self.label_index = build_label_index(&grid);

        let catalog = SeriesCatalog::from_grid(&grid);
        match &catalog {
            Ok(c) => log::debug!(
                "Catalog: {} series columns, {} distinct names",
                c.entries().len(),
                c.names().len()
            ),
            Err(e) => log::warn!("No series catalog: {e}"),
        }
        self.colors = match &catalog {
            Ok(c) => SeriesColors::new(c),
            Err(_) => SeriesColors::default(),
        };

        let start = self.label_index.first().map(LabelEntry::display);
        let end = default_end_entry(self.label_index.len())
            .map(|i| self.label_index[i].display());
        let series = match &catalog {
            Ok(c) => c.names(),
            Err(_) => Vec::new(),
        };
        self.selection = Selection { start, end, series };

        self.catalog = Some(catalog);
        self.grid = Some(grid);
        self.file_name = Some(name);
        self.status_message = None;
        self.chart_rect = None;
        self.invalidate();
    }

    /// Drop the current grid after a failed upload.
    pub fn clear_grid(&mut self, message: String) {
        *self = AppState {
            status_message: Some(message),
            ..AppState::default()
        };
    }

    /// Forget the cached pass; the next frame recomputes it.
    pub fn invalidate(&mut self) {
        self.outcome = None;
    }

    /// Recompute the pass if anything changed since the last one.
    pub fn outcome(&mut self) -> Option<&Result<ScatterChart, ViewError>> {
        let grid = self.grid.as_ref()?;
        if self.outcome.is_none() {
            let result = run_pass(grid, &self.selection).map(|output| {
                let chart = ScatterChart::new(&output, &self.colors);
                log::debug!(
                    "Pass over rows {}..={}: {} series, {} points",
                    output.range.start,
                    output.range.end,
                    chart.series.len(),
                    chart.point_count()
                );
                chart
            });
            if let Err(e) = &result {
                log::warn!("Pass stopped: {e}");
            }
            self.outcome = Some(result);
        }
        self.outcome.as_ref()
    }

    pub fn set_start(&mut self, label: String) {
        self.selection.start = Some(label);
        self.invalidate();
    }

    pub fn set_end(&mut self, label: String) {
        self.selection.end = Some(label);
        self.invalidate();
    }

    /// Toggle one series, keeping the selection in catalog order.
    pub fn toggle_series(&mut self, name: &str) {
        let Some(Ok(catalog)) = &self.catalog else {
            return;
        };
        let mut picked = std::mem::take(&mut self.selection.series);
        if let Some(pos) = picked.iter().position(|n| n == name) {
            picked.remove(pos);
        } else {
            picked.push(name.to_string());
        }
        self.selection.series = catalog
            .names()
            .into_iter()
            .filter(|n| picked.contains(n))
            .collect();
        self.invalidate();
    }

    /// Select every series.
    pub fn select_all(&mut self) {
        if let Some(Ok(catalog)) = &self.catalog {
            self.selection.series = catalog.names();
            self.invalidate();
        }
    }

    /// Deselect every series.
    pub fn select_none(&mut self) {
        self.selection.series.clear();
        self.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_grid;

    fn sample_grid(rows: usize) -> Grid {
        let mut text = String::new();
        for row in 0..rows {
            let mut cells = vec![String::new(); 39];
            cells[0] = format!("L{row}");
            for col in 14..=38 {
                cells[col] = if row == 6 {
                    format!("S{col}")
                } else {
                    format!("{}%", row + col)
                };
            }
            text.push_str(&cells.join(","));
            text.push('\n');
        }
        read_grid(text.as_bytes()).unwrap()
    }

    #[test]
    fn loading_sets_defaults() {
        let mut state = AppState::default();
        state.set_grid("a.csv".into(), sample_grid(10));
        assert_eq!(state.selection.start.as_deref(), Some("L0  [Row 0]"));
        assert_eq!(state.selection.end.as_deref(), Some("L5  [Row 5]"));
        assert_eq!(state.selection.series.len(), 25);
    }

    #[test]
    fn end_defaults_to_last_label_when_few() {
        let mut state = AppState::default();
        state.set_grid("a.csv".into(), sample_grid(3));
        assert_eq!(state.selection.end.as_deref(), Some("L2  [Row 2]"));
    }

    #[test]
    fn toggling_keeps_catalog_order_and_invalidates() {
        let mut state = AppState::default();
        state.set_grid("a.csv".into(), sample_grid(10));
        state.select_none();
        state.toggle_series("S20");
        state.toggle_series("S14");
        assert_eq!(state.selection.series, vec!["S14", "S20"]);

        let chart = state.outcome().unwrap().as_ref().unwrap();
        assert_eq!(chart.series[0].name, "S14");
        assert_eq!(chart.series[0].points[0], [0.0, 14.0]);

        // Rows 5–7 include the name row, so the pass stops on it.
        state.set_start("L5  [Row 5]".into());
        state.set_end("L7  [Row 7]".into());
        assert!(matches!(
            state.outcome(),
            Some(Err(ViewError::NotNumeric { row: 6, .. }))
        ));

        state.set_start("L7  [Row 7]".into());
        state.set_end("L9  [Row 9]".into());
        let chart = state.outcome().unwrap().as_ref().unwrap();
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.categories, vec!["L7", "L8", "L9"]);
    }

    #[test]
    fn failed_upload_clears_everything() {
        let mut state = AppState::default();
        state.set_grid("a.csv".into(), sample_grid(10));
        state.clear_grid("Error: bad".into());
        assert!(state.grid.is_none());
        assert!(state.outcome().is_none());
        assert_eq!(state.status_message.as_deref(), Some("Error: bad"));
    }
}
