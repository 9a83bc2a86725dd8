use std::f32::consts::FRAC_PI_4;

use eframe::egui::{self, Align2, FontId, Painter, Rect, ScrollArea, Sense, Ui, vec2};
use egui_plot::{MarkerShape, Plot, PlotPoint, PlotPoints, PlotTransform, Points};

use crate::chart::{ScatterChart, TITLE, X_TITLE, Y_TITLE};

const LEGEND_WIDTH: f32 = 170.0;
const LABEL_BAND: f32 = 110.0;
const LABEL_FONT: f32 = 11.0;

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the scatter chart with its legend to the right of the plot area.
/// Returns the screen rectangle covered by the chart, legend included.
pub fn scatter_plot(ui: &mut Ui, chart: &ScatterChart) -> Rect {
    ui.scope(|ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.heading(TITLE);
        });

        ui.horizontal_top(|ui: &mut Ui| {
            let plot_width = (ui.available_width() - LEGEND_WIDTH).max(200.0);
            let plot_height = (ui.available_height() - LABEL_BAND).max(150.0);

            ui.vertical(|ui: &mut Ui| {
                ui.set_width(plot_width);
                let transform = draw_points(ui, chart, plot_width, plot_height);
                let (band, _) =
                    ui.allocate_exact_size(vec2(plot_width, LABEL_BAND), Sense::hover());
                draw_x_labels(ui.painter(), &transform, &chart.categories, band);
            });

            ui.vertical(|ui: &mut Ui| legend(ui, chart));
        });
    })
    .response
    .rect
}

fn draw_points(ui: &mut Ui, chart: &ScatterChart, width: f32, height: f32) -> PlotTransform {
    let hover_chart = chart.clone();
    let last_x = chart.categories.len().saturating_sub(1) as f64;

    Plot::new("scatter_plot")
        .width(width)
        .height(height)
        .show_axes([false, true])
        .y_axis_label(Y_TITLE)
        .include_x(-0.5)
        .include_x(last_x + 0.5)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(move |name, value| {
            let label = hover_chart.category_at(value.x).unwrap_or("");
            if name.is_empty() {
                format!("{label}\n{:.2}", value.y)
            } else {
                format!("{name}\n{label}: {:.2}", value.y)
            }
        })
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let points = Points::new(PlotPoints::from(series.points.clone()))
                    .name(&series.name)
                    .color(series.color)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(4.0);
                plot_ui.points(points);
            }
        })
        .transform
}

/// Category labels under their x positions, rotated 45° and right-aligned
/// so that each label ends at its tick.
fn draw_x_labels(painter: &Painter, transform: &PlotTransform, categories: &[String], band: Rect) {
    let color = painter.ctx().style().visuals.text_color();
    let frame = *transform.frame();
    let font = FontId::proportional(LABEL_FONT);

    // Thin out labels when the axis is too crowded to read them.
    let spacing = if categories.len() > 1 {
        let a = transform.position_from_point(&PlotPoint::new(0.0, 0.0)).x;
        let b = transform.position_from_point(&PlotPoint::new(1.0, 0.0)).x;
        (b - a).abs()
    } else {
        f32::INFINITY
    };
    let step = (LABEL_FONT * 1.5 / spacing).ceil().max(1.0) as usize;

    let (sin, cos) = (-FRAC_PI_4).sin_cos();
    for (i, text) in categories.iter().enumerate().step_by(step) {
        let x = transform.position_from_point(&PlotPoint::new(i as f64, 0.0)).x;
        if x < frame.left() || x > frame.right() {
            continue;
        }
        painter.vline(x, frame.bottom()..=band.top() + 3.0, (1.0, color));

        let galley = painter.layout_no_wrap(text.clone(), font.clone(), color);
        let w = galley.size().x;
        let tick = egui::pos2(x, band.top() + 6.0);
        let pos = egui::pos2(tick.x - w * cos, tick.y - w * sin);
        painter.add(egui::Shape::Text(
            egui::epaint::TextShape::new(pos, galley, color).with_angle(-FRAC_PI_4),
        ));
    }

    painter.text(
        band.center_bottom(),
        Align2::CENTER_BOTTOM,
        X_TITLE,
        FontId::proportional(14.0),
        color,
    );
}

fn legend(ui: &mut Ui, chart: &ScatterChart) {
    ui.strong("Series");
    ScrollArea::vertical()
        .id_salt("legend_scroll")
        .show(ui, |ui: &mut Ui| {
            for series in &chart.series {
                ui.horizontal(|ui: &mut Ui| {
                    let (rect, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
                    ui.painter().circle_filled(rect.center(), 5.0, series.color);
                    ui.label(&series.name);
                });
            }
        });
}
