use thiserror::Error;

// ---------------------------------------------------------------------------
// Pass errors
// ---------------------------------------------------------------------------

/// Everything that can stop a recomputation pass before a chart is drawn.
///
/// None of these corrupt the session: the next interaction recomputes the
/// whole pass from the current grid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    #[error("Column 0 has no labels in the first {0} rows.")]
    NoLabels(usize),

    #[error("Could not find a row number in selection '{0}'.")]
    MissingRowSuffix(String),

    #[error("Start row ({start}) is after end row ({end}). Please correct the selection.")]
    StartAfterEnd { start: usize, end: usize },

    #[error("CSV does not contain enough columns (need at least {required}, found {found}).")]
    NotEnoughColumns { required: usize, found: usize },

    #[error("Please select at least one series to visualize.")]
    NoSeriesSelected,

    #[error("Unknown series '{0}'.")]
    UnknownSeries(String),

    #[error("Series '{series}', row {row}: could not convert '{value}' to a number.")]
    NotNumeric {
        series: String,
        row: usize,
        value: String,
    },

    #[error("Label and series lengths mismatch ({labels} labels, '{series}' has {values} values). Cannot plot.")]
    LengthMismatch {
        series: String,
        labels: usize,
        values: usize,
    },
}

/// How a stopped pass is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl ViewError {
    pub fn severity(&self) -> Severity {
        match self {
            ViewError::NoSeriesSelected => Severity::Info,
            ViewError::StartAfterEnd { .. } | ViewError::LengthMismatch { .. } => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }
}
