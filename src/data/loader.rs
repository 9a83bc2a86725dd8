use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::Grid;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a grid from a file on disk. Only `.csv` files are accepted.
pub fn load_file(path: &Path) -> Result<Grid> {
    check_extension(path)?;
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_grid(file).with_context(|| format!("parsing {}", path.display()))
}

/// Load a grid from in-memory bytes (e.g. a file dropped without a path).
pub fn load_bytes(name: &str, bytes: &[u8]) -> Result<Grid> {
    check_extension(Path::new(name))?;
    read_grid(bytes).with_context(|| format!("parsing {name}"))
}

fn check_extension(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => Ok(()),
        "" => bail!("File has no extension, expected .csv"),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// CSV layout: no header row, any number of fields per record.
/// Every field is kept as raw text; blank lines are skipped.
pub fn read_grid<R: Read>(input: R) -> Result<Grid> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    let grid = Grid::from_rows(rows);
    if grid.is_empty() || grid.width() == 0 {
        bail!("No columns to parse from file");
    }
    Ok(grid)
}
