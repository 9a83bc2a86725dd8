use std::collections::BTreeMap;

use super::layout::{MIN_COLUMNS, NAME_ROW, PLACEHOLDER_NAME, SERIES_COLUMNS};
use super::model::Grid;
use crate::error::ViewError;

// ---------------------------------------------------------------------------
// SeriesCatalog – series name → source column
// ---------------------------------------------------------------------------

/// Series names read from the name row across the series columns.
///
/// Names are not unique: empty name cells all become `PLACEHOLDER_NAME`, and
/// a repeated name only reaches the last column that carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesCatalog {
    entries: Vec<(String, usize)>,
    lookup: BTreeMap<String, usize>,
}

impl SeriesCatalog {
    /// Read the catalog from a grid. Fails when the grid is too narrow.
    pub fn from_grid(grid: &Grid) -> Result<Self, ViewError> {
        if grid.width() < MIN_COLUMNS {
            return Err(ViewError::NotEnoughColumns {
                required: MIN_COLUMNS,
                found: grid.width(),
            });
        }

        let entries: Vec<(String, usize)> = SERIES_COLUMNS
            .map(|col| {
                let name = grid.cell(NAME_ROW, col).unwrap_or(PLACEHOLDER_NAME);
                (name.to_string(), col)
            })
            .collect();

        // Later columns overwrite earlier ones with the same name.
        let lookup = entries.iter().cloned().collect();

        Ok(SeriesCatalog { entries, lookup })
    }

    /// One `(name, column)` pair per series column, in column order.
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// Column reachable under `name`.
    pub fn column_of(&self, name: &str) -> Option<usize> {
        self.lookup.get(name).copied()
    }

    /// Distinct names in first-appearance order, for the series selector.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(self.lookup.len());
        for (name, _) in &self.entries {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_grid;

    fn grid_with_names(width: usize, names: &[(usize, &str)]) -> Grid {
        let mut text = String::new();
        for row in 0..8 {
            let mut cells = vec![String::new(); width];
            if row == NAME_ROW {
                for &(col, name) in names {
                    cells[col] = name.to_string();
                }
            }
            cells[0] = format!("r{row}");
            text.push_str(&cells.join(","));
            text.push('\n');
        }
        read_grid(text.as_bytes()).unwrap()
    }

    #[test]
    fn has_one_entry_per_series_column_in_order() {
        let grid = grid_with_names(39, &[(14, "X"), (15, "Y")]);
        let catalog = SeriesCatalog::from_grid(&grid).unwrap();
        assert_eq!(catalog.entries().len(), 25);

        let cols: Vec<usize> = catalog.entries().iter().map(|(_, c)| *c).collect();
        assert_eq!(cols, (14..=38).collect::<Vec<_>>());
        assert_eq!(catalog.entries()[0].0, "X");
        assert_eq!(catalog.entries()[1].0, "Y");
        assert_eq!(catalog.entries()[2].0, PLACEHOLDER_NAME);
    }

    #[test]
    fn placeholder_resolves_to_last_unnamed_column() {
        let grid = grid_with_names(39, &[(14, "X"), (38, "Z")]);
        let catalog = SeriesCatalog::from_grid(&grid).unwrap();
        assert_eq!(catalog.column_of("X"), Some(14));
        assert_eq!(catalog.column_of(PLACEHOLDER_NAME), Some(37));
        assert_eq!(catalog.names(), vec!["X", PLACEHOLDER_NAME, "Z"]);
    }

    #[test]
    fn duplicate_names_keep_last_column() {
        let grid = grid_with_names(39, &[(14, "X"), (20, "X")]);
        let catalog = SeriesCatalog::from_grid(&grid).unwrap();
        assert_eq!(catalog.column_of("X"), Some(20));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let grid = grid_with_names(45, &[(40, "Far")]);
        let catalog = SeriesCatalog::from_grid(&grid).unwrap();
        assert_eq!(catalog.entries().len(), 25);
        assert_eq!(catalog.column_of("Far"), None);
    }

    #[test]
    fn narrow_grid_is_rejected() {
        let grid = grid_with_names(30, &[]);
        assert_eq!(
            SeriesCatalog::from_grid(&grid),
            Err(ViewError::NotEnoughColumns {
                required: 39,
                found: 30
            })
        );
    }
}
