use super::layout::{DEFAULT_END_ENTRY, LABEL_COLUMN, PREVIEW_ROWS};
use super::model::{Grid, LabelEntry, RowRange};

/// Build the selectable labels: non-empty label-column cells of the first
/// `PREVIEW_ROWS` rows, in row order. Positions need not be contiguous.
pub fn build_label_index(grid: &Grid) -> Vec<LabelEntry> {
    (0..grid.len().min(PREVIEW_ROWS))
        .filter_map(|row| {
            grid.cell(row, LABEL_COLUMN).map(|text| LabelEntry {
                row,
                text: text.to_string(),
            })
        })
        .collect()
}

/// Default index into the label index for the end selector.
pub fn default_end_entry(index_len: usize) -> Option<usize> {
    match index_len {
        0 => None,
        n => Some(DEFAULT_END_ENTRY.min(n - 1)),
    }
}

/// Labels for a resolved range, sliced fresh from the label column.
/// Not limited to `PREVIEW_ROWS`.
pub fn labels_in_range(grid: &Grid, range: RowRange) -> Vec<String> {
    grid.column_slice(LABEL_COLUMN, range)
        .map(|(_, text)| text.to_string())
        .collect()
}
