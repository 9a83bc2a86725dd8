/// Data layer: grid loading, derived lookups, and series extraction.
///
/// Architecture:
/// ```text
///       .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse bytes → Grid (no header, padded rows)
///   └──────────┘
///        │
///        ├──────────────┬───────────────┐
///        ▼              ▼               ▼
///   ┌──────────┐   ┌──────────┐   ┌──────────┐
///   │  labels  │   │  range   │   │ catalog  │  column 0 / [Row N] / row 6
///   └──────────┘   └──────────┘   └──────────┘
///        │              │               │
///        └──────────────┴───────┬───────┘
///                               ▼
///                         ┌──────────┐
///                         │ extract  │  slice, strip %, parse f64
///                         └──────────┘
///                               │
///                               ▼
///                         ┌──────────┐
///                         │ pipeline │  one pass: Grid + Selection → PassOutput
///                         └──────────┘
/// ```

pub mod catalog;
pub mod extract;
pub mod labels;
pub mod layout;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod range;
