use std::ops::RangeInclusive;

// ---------------------------------------------------------------------------
// Fixed sheet layout
// ---------------------------------------------------------------------------

/// Column holding the row labels.
pub const LABEL_COLUMN: usize = 0;

/// Row holding the series names.
pub const NAME_ROW: usize = 6;

/// Columns holding series values (inclusive).
pub const SERIES_COLUMNS: RangeInclusive<usize> = 14..=38;

/// A grid needs this many columns for `SERIES_COLUMNS` to exist.
pub const MIN_COLUMNS: usize = *SERIES_COLUMNS.end() + 1;

/// Only the first rows feed the label selectors.
pub const PREVIEW_ROWS: usize = 100;

/// Default position of the end selector in the label index.
pub const DEFAULT_END_ENTRY: usize = 5;

/// Name used for series whose name cell is empty.
pub const PLACEHOLDER_NAME: &str = "Unnamed";
