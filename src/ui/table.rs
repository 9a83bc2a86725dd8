use eframe::egui::{ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Grid;

const ROW_HEIGHT: f32 = 18.0;

/// Scrollable preview of every cell in the grid, headed by column positions.
pub fn data_preview(ui: &mut Ui, grid: &Grid, max_height: f32) {
    ScrollArea::horizontal()
        .id_salt("data_preview_scroll")
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .max_scroll_height(max_height)
                .column(Column::auto().at_least(40.0))
                .columns(Column::auto().at_least(48.0).clip(true), grid.width())
                .header(ROW_HEIGHT, |mut header| {
                    header.col(|ui: &mut Ui| {
                        ui.strong("row");
                    });
                    for col in 0..grid.width() {
                        header.col(|ui: &mut Ui| {
                            ui.strong(col.to_string());
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, grid.len(), |mut row| {
                        let r = row.index();
                        row.col(|ui: &mut Ui| {
                            ui.weak(r.to_string());
                        });
                        for col in 0..grid.width() {
                            row.col(|ui: &mut Ui| {
                                ui.label(grid.raw(r, col));
                            });
                        }
                    });
                });
        });
}
