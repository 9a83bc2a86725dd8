use super::catalog::SeriesCatalog;
use super::model::{Grid, RowRange, SeriesData};
use crate::error::ViewError;

/// Parse one series cell: every `%` is removed, surrounding whitespace
/// trimmed, and the rest read as a float.
pub fn parse_value(text: &str) -> Option<f64> {
    text.replace('%', "").trim().parse().ok()
}

/// Extract the selected series over `range`. Empty cells are dropped, so
/// the value vectors may be shorter than the range.
pub fn extract_series(
    grid: &Grid,
    range: RowRange,
    selected: &[String],
    catalog: &SeriesCatalog,
) -> Result<SeriesData, ViewError> {
    if selected.is_empty() {
        return Err(ViewError::NoSeriesSelected);
    }

    let mut data = SeriesData::default();
    for name in selected {
        let col = catalog
            .column_of(name)
            .ok_or_else(|| ViewError::UnknownSeries(name.clone()))?;

        let values = grid
            .column_slice(col, range)
            .map(|(row, text)| {
                parse_value(text).ok_or_else(|| ViewError::NotNumeric {
                    series: name.clone(),
                    row,
                    value: text.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        data.series.push((name.clone(), values));
    }
    Ok(data)
}

/// Every series must line up one-to-one with the labels.
pub fn check_lengths(labels: &[String], data: &SeriesData) -> Result<(), ViewError> {
    match data
        .series
        .iter()
        .find(|(_, values)| values.len() != labels.len())
    {
        Some((name, values)) => Err(ViewError::LengthMismatch {
            series: name.clone(),
            labels: labels.len(),
            values: values.len(),
        }),
        None => Ok(()),
    }
}
