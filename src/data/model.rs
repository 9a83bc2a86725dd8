use std::fmt;

// ---------------------------------------------------------------------------
// Grid – the parsed sheet
// ---------------------------------------------------------------------------

/// Rectangular cell data from one uploaded file. No header row.
///
/// Cells hold their raw text; an empty string is an empty cell. Every row is
/// padded to the width of the widest row when the grid is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
    width: usize,
}

impl Grid {
    /// Build a grid from ragged rows, padding short rows with empty cells.
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Grid { rows, width }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns (width of the widest row).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Non-empty text at `(row, col)`; `None` for empty or out-of-range cells.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Raw text at `(row, col)`, empty string when missing. Used by the preview.
    pub fn raw(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map_or("", String::as_str)
    }

    /// Non-empty cells of one column over an inclusive row range, with their
    /// row positions. Rows past the end of the grid are ignored.
    pub fn column_slice(
        &self,
        col: usize,
        range: RowRange,
    ) -> impl Iterator<Item = (usize, &str)> + '_ {
        let end = range.end.min(self.len().saturating_sub(1));
        (range.start..=end)
            .filter(move |_| range.start < self.len())
            .filter_map(move |row| self.cell(row, col).map(|text| (row, text)))
    }
}

// ---------------------------------------------------------------------------
// LabelEntry – one selectable row label
// ---------------------------------------------------------------------------

/// A row label from the label column together with its row position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEntry {
    pub row: usize,
    pub text: String,
}

impl LabelEntry {
    /// Text shown in the row selectors, e.g. `"Jan  [Row 7]"`.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LabelEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  [Row {}]", self.text, self.row)
    }
}

// ---------------------------------------------------------------------------
// RowRange / SeriesData
// ---------------------------------------------------------------------------

/// Inclusive row bounds; `start <= end` once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

/// Extracted values per selected series, in selection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesData {
    pub series: Vec<(String, Vec<f64>)>,
}

#[cfg(test)]
impl SeriesData {
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Grid {
        Grid::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn ragged_rows_are_padded() {
        let g = grid(&[&["a", "b", "c"], &["d"]]);
        assert_eq!(g.width(), 3);
        assert_eq!(g.raw(1, 2), "");
        assert_eq!(g.cell(1, 2), None);
        assert_eq!(g.cell(0, 2), Some("c"));
    }

    #[test]
    fn out_of_range_cells_are_empty() {
        let g = grid(&[&["a"]]);
        assert_eq!(g.cell(5, 0), None);
        assert_eq!(g.cell(0, 5), None);
        assert_eq!(g.raw(5, 5), "");
    }

    #[test]
    fn column_slice_skips_empties_and_clamps() {
        let g = grid(&[&["a"], &[""], &["c"]]);
        let got: Vec<_> = g
            .column_slice(0, RowRange { start: 0, end: 10 })
            .collect();
        assert_eq!(got, vec![(0, "a"), (2, "c")]);

        let past_end: Vec<_> = g
            .column_slice(0, RowRange { start: 7, end: 9 })
            .collect();
        assert!(past_end.is_empty());
    }

    #[test]
    fn label_display_carries_row_suffix() {
        let entry = LabelEntry {
            row: 7,
            text: "Jan".into(),
        };
        assert_eq!(entry.display(), "Jan  [Row 7]");
    }
}
