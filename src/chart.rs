use eframe::egui::Color32;

use crate::color::SeriesColors;
use crate::data::pipeline::PassOutput;

pub const TITLE: &str = "Scatter Plot of Selected Series";
pub const X_TITLE: &str = "Label";
pub const Y_TITLE: &str = "Value (%)";

// ---------------------------------------------------------------------------
// ScatterChart – what the plot panel draws
// ---------------------------------------------------------------------------

/// One point cloud per selected series over shared categorical x positions.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    /// X categories in row order; point `i` of every series sits at `x = i`.
    pub categories: Vec<String>,
    pub series: Vec<ScatterSeries>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub name: String,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

impl ScatterChart {
    pub fn new(output: &PassOutput, colors: &SeriesColors) -> Self {
        let series = output
            .data
            .series
            .iter()
            .map(|(name, values)| ScatterSeries {
                name: name.clone(),
                color: colors.color_for(name),
                points: values
                    .iter()
                    .enumerate()
                    .map(|(i, &y)| [i as f64, y])
                    .collect(),
            })
            .collect();

        ScatterChart {
            categories: output.labels.clone(),
            series,
        }
    }

    /// Category shown under x position `x`, if `x` rounds onto one.
    pub fn category_at(&self, x: f64) -> Option<&str> {
        let i = x.round();
        if i < 0.0 {
            return None;
        }
        self.categories.get(i as usize).map(String::as_str)
    }

    /// Total number of plotted points.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{RowRange, SeriesData};

    fn output() -> PassOutput {
        PassOutput {
            range: RowRange { start: 0, end: 3 },
            labels: ["A", "B", "C", "D"].map(String::from).to_vec(),
            data: SeriesData {
                series: vec![("X".into(), vec![1.0, 2.0, 3.0, 4.0])],
            },
        }
    }

    #[test]
    fn one_point_per_label() {
        let chart = ScatterChart::new(&output(), &SeriesColors::default());
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.point_count(), 4);
        assert_eq!(
            chart.series[0].points,
            vec![[0.0, 1.0], [1.0, 2.0], [2.0, 3.0], [3.0, 4.0]]
        );
    }

    #[test]
    fn categories_map_back_from_x() {
        let chart = ScatterChart::new(&output(), &SeriesColors::default());
        assert_eq!(chart.category_at(1.2), Some("B"));
        assert_eq!(chart.category_at(-0.8), None);
        assert_eq!(chart.category_at(9.0), None);
    }
}
