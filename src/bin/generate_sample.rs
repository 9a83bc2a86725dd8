//! Writes a CSV in the layout the viewer expects: a preamble, series names in
//! row 6 across columns 14–38, then one labelled row per month.

use anyhow::{Context, Result};

const WIDTH: usize = 39;
const NAME_ROW: usize = 6;
const FIRST_SERIES: usize = 14;
const MONTHS: usize = 36;

/// Minimal deterministic PRNG (xorshift64*)
struct SimpleRng(u64);

impl SimpleRng {
    fn next_f64(&mut self) -> f64 {
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        let x = self.0.wrapping_mul(0x2545_F491_4F6C_DD1D);
        (x >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn series_name(i: usize) -> String {
    const REGIONS: [&str; 5] = ["North", "South", "East", "West", "Central"];
    const METRICS: [&str; 5] = ["Margin", "Growth", "Churn", "Uptime", "Share"];
    // Leave a few names blank so the viewer's placeholder shows up.
    if i % 11 == 10 {
        return String::new();
    }
    format!("{} {}", REGIONS[i % 5], METRICS[i / 5])
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_series.csv".to_string());
    let mut rng = SimpleRng(0x9E37_79B9_7F4A_7C15);

    let mut rows: Vec<Vec<String>> = Vec::new();

    // Preamble: no labels in column 0, so the selectors start at the data.
    for row in 0..=NAME_ROW {
        let mut cells = vec![String::new(); WIDTH];
        match row {
            0 => cells[1] = "Regional KPI export".into(),
            2 => {
                cells[1] = "Generated".into();
                cells[2] = "2024-06-30".into();
            }
            NAME_ROW => {
                cells[1] = "Month".into();
                for i in 0..WIDTH - FIRST_SERIES {
                    cells[FIRST_SERIES + i] = series_name(i);
                }
            }
            _ => {}
        }
        rows.push(cells);
    }

    let mut level: Vec<f64> = (0..WIDTH - FIRST_SERIES)
        .map(|_| 20.0 + rng.next_f64() * 60.0)
        .collect();

    for month in 0..MONTHS {
        // A blank spacer between years.
        if month > 0 && month % 12 == 0 {
            rows.push(vec![String::new(); WIDTH]);
        }

        let mut cells = vec![String::new(); WIDTH];
        cells[0] = format!("{}-{:02}", 2021 + month / 12, month % 12 + 1);
        cells[1] = format!("{}", 1000 + month * 37);
        for (i, value) in level.iter_mut().enumerate() {
            *value = (*value + (rng.next_f64() - 0.5) * 6.0).clamp(0.0, 100.0);
            // One hole so a length mismatch can be reproduced.
            if month == 20 && i == 3 {
                continue;
            }
            cells[FIRST_SERIES + i] = if i % 2 == 0 {
                format!("{value:.1}%")
            } else {
                format!("{value:.2}")
            };
        }
        rows.push(cells);
    }

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    for row in &rows {
        writer.write_record(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {} rows × {WIDTH} columns ({MONTHS} months) to {output_path}",
        rows.len()
    );
    Ok(())
}
