use super::catalog::SeriesCatalog;
use super::extract::{check_lengths, extract_series};
use super::labels::labels_in_range;
use super::layout::PREVIEW_ROWS;
use super::model::{Grid, RowRange, SeriesData};
use super::range::resolve_range;
use crate::error::ViewError;

// ---------------------------------------------------------------------------
// One recomputation pass
// ---------------------------------------------------------------------------

/// What the user has picked. Row selectors hold the display strings of
/// label entries; series names are in selector order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: Option<String>,
    pub end: Option<String>,
    pub series: Vec<String>,
}

/// Everything the plot needs from a successful pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PassOutput {
    pub range: RowRange,
    pub labels: Vec<String>,
    pub data: SeriesData,
}

/// Grid + selection → plottable data. Pure: the same inputs always give
/// the same output.
pub fn run_pass(grid: &Grid, selection: &Selection) -> Result<PassOutput, ViewError> {
    let (Some(start), Some(end)) = (&selection.start, &selection.end) else {
        return Err(ViewError::NoLabels(grid.len().min(PREVIEW_ROWS)));
    };

    let range = resolve_range(start, end)?;
    let labels = labels_in_range(grid, range);

    let catalog = SeriesCatalog::from_grid(grid)?;
    let data = extract_series(grid, range, &selection.series, &catalog)?;
    check_lengths(&labels, &data)?;

    Ok(PassOutput {
        range,
        labels,
        data,
    })
}
