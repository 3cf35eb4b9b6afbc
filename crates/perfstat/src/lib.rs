//! # perfstat
//!
//! Turns the interval output of a counter sampling tool (`perf stat -I`) into
//! a fixed-schema CSV table.
//!
//! Input lines are folded into a [`Table`] of per-timestamp [`Record`]s in a
//! single pass by [`read_table`]; the finished table is rendered with
//! [`write_csv`], one row per record and two columns per entry of
//! [`KNOWN_METRICS`].
//!
//! ```
//! use perfstat::{read_table, write_csv};
//!
//! let input = "1.000106418 217 context-switches # 0.144 K/sec\n";
//! let table = read_table(input.as_bytes());
//!
//! let mut out = Vec::new();
//! write_csv(&table, &mut out).unwrap();
//! let csv = String::from_utf8(out).unwrap();
//! assert!(csv.lines().nth(1).unwrap().starts_with("1,1.000106,n/a,n/a,0.144000,217.000000"));
//! ```

pub mod csv;
pub mod line;
pub mod metric;
pub mod reader;
pub mod table;

pub use csv::*;
pub use line::{parse_line, Event, ParsedLine};
pub use metric::*;
pub use reader::*;
pub use table::*;
