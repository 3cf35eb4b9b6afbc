//! CSV rendering of a finished [`Table`].
//!
//! Layout: `id,time`, then a `<name>,count` column pair for every entry of
//! [`KNOWN_METRICS`]. Metrics missing from a record print as `n/a,n/a`.

use std::io::{self, Write};

use crate::metric::KNOWN_METRICS;
use crate::table::{Record, Table};

/// Placeholder for a known metric absent from a record
pub const MISSING: &str = "n/a";

/// Formats a float with six decimals. Non-finite values are spelled
/// `+Inf`, `-Inf` and `NaN`.
pub fn format_fixed(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "+Inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{:.6}", value)
    }
}

/// The header row, without a line terminator
pub fn header() -> String {
    let mut columns = vec!["id".to_string(), "time".to_string()];
    for name in KNOWN_METRICS {
        columns.push(name.to_string());
        columns.push("count".to_string());
    }
    columns.join(",")
}

/// One data row for the record at 1-based position `id`
pub fn row(id: usize, record: &Record) -> String {
    let mut columns = vec![id.to_string(), format_fixed(record.time)];
    for name in KNOWN_METRICS {
        match record.get(name) {
            Some(sample) => {
                columns.push(format_fixed(sample.value));
                columns.push(format_fixed(sample.counts));
            }
            None => {
                columns.push(MISSING.to_string());
                columns.push(MISSING.to_string());
            }
        }
    }
    columns.join(",")
}

/// Writes the header and one row per record, in table order.
pub fn write_csv<W: Write>(table: &Table, mut out: W) -> io::Result<()> {
    writeln!(out, "{}", header())?;
    for (i, record) in table.iter().enumerate() {
        writeln!(out, "{}", row(i + 1, record))?;
    }
    out.flush()
}
