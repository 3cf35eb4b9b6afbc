//! Classification and parsing of single `perf stat -I` output lines.
//!
//! Every line is split on runs of spaces and then dispatched by the literal
//! markers at fixed field positions:
//!
//! ```text
//! A  1.000106418 # 1.02 stalled cycles per insn (61.50%)
//! B  1.000106418 1,510.48 msec task-clock # 1.510 CPUs utilized
//! C  1.000106418 217 context-switches # 0.144 K/sec
//! ```
//!
//! The offsets are tied to the tool's output layout and must not drift.

use std::num::ParseFloatError;

use log::{debug, trace, warn};
use thiserror::Error;

use crate::metric::{Sample, STALLED_CYCLES_PER_INSN, TASK_CLOCK};

/// Errors reading a numeric field out of a tokenized line
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// The line has too few fields for the shape's fixed offsets
    #[error("field {0} is missing")]
    Missing(usize),

    /// The field is present but is not a float once separators are removed
    #[error("field {index} ({raw:?}) is not a number: {source}")]
    Invalid {
        index: usize,
        raw: String,
        #[source]
        source: ParseFloatError,
    },
}

/// The three recognized line layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `<time> # <ratio> stalled cycles per insn ...`
    InsnRatio,
    /// `<time> <count> msec <name> # <value> ...`
    Duration,
    /// `<time> <count> <name> # <value>[%] ...`, also the fallback
    Counted,
}

/// A named sample extracted from one line
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    pub sample: Sample,
}

/// A line that survived the skip filter, ready to fold into a table.
///
/// `event` is `None` when the line selects a record but carries no metric
/// name, e.g. `1.0 217`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub time: f64,
    pub event: Option<Event>,
}

/// Splits a line into fields on runs of spaces.
///
/// Surrounding whitespace (tabs included) is trimmed first; inner tabs are
/// not separators and stay part of their field.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.trim().split(' ').filter(|f| !f.is_empty()).collect()
}

/// Returns true for comments, "<not counted>" placeholders and lines with
/// fewer than two fields.
pub fn is_skipped(fields: &[&str]) -> bool {
    fields.len() < 2 || fields[0] == "#" || fields[1] == "<not"
}

/// Picks the layout of a line that passed [`is_skipped`].
pub fn classify(fields: &[&str]) -> Shape {
    if fields.get(1) == Some(&"#") {
        Shape::InsnRatio
    } else if fields.get(2) == Some(&"msec") {
        Shape::Duration
    } else {
        Shape::Counted
    }
}

/// Parses the timestamp field. Anything unparseable is time 0.
pub fn parse_time(field: &str) -> f64 {
    field.parse().unwrap_or(0.0)
}

/// Parses field `index` as a float after dropping thousands separators and,
/// when `percent` is set, any `%` signs.
pub fn parse_field(fields: &[&str], index: usize, percent: bool) -> Result<f64, FieldError> {
    let raw = *fields.get(index).ok_or(FieldError::Missing(index))?;
    let mut cleaned = raw.replace(',', "");
    if percent {
        cleaned.retain(|c| c != '%');
    }
    cleaned.parse().map_err(|source| FieldError::Invalid {
        index,
        raw: raw.to_string(),
        source,
    })
}

/// Classifies and parses one raw input line.
///
/// Returns `None` only for skipped lines; every other line makes its time the
/// current record, with or without an event. Numeric failures
/// are logged and leave the affected field at zero.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let fields = tokenize(line);
    if is_skipped(&fields) {
        trace!("Skipping line: {:?}", line);
        return None;
    }

    let time = parse_time(fields[0]);
    let event = match classify(&fields) {
        Shape::InsnRatio => Some(Event {
            name: STALLED_CYCLES_PER_INSN.to_string(),
            sample: parse_insn_ratio(&fields),
        }),
        Shape::Duration => Some(Event {
            name: TASK_CLOCK.to_string(),
            sample: parse_duration(&fields),
        }),
        Shape::Counted => match fields.get(2) {
            Some(name) => Some(Event {
                name: name.to_string(),
                sample: parse_counted(name, &fields),
            }),
            None => {
                debug!("Counted line without a metric name: {:?}", line);
                None
            }
        },
    };

    Some(ParsedLine { time, event })
}

fn parse_insn_ratio(fields: &[&str]) -> Sample {
    let mut sample = Sample::default();
    match parse_field(fields, 2, false) {
        Ok(value) => sample.value = value,
        Err(e) => warn!("{}: {}", STALLED_CYCLES_PER_INSN, e),
    }
    sample
}

fn parse_duration(fields: &[&str]) -> Sample {
    let mut sample = Sample::default();
    match parse_field(fields, 1, false) {
        Ok(counts) => sample.counts = counts,
        Err(e) => debug!("{} count: {}", TASK_CLOCK, e),
    }
    match parse_field(fields, 5, false) {
        Ok(value) => sample.value = value,
        Err(e) => warn!("{}: {}", TASK_CLOCK, e),
    }
    sample
}

fn parse_counted(name: &str, fields: &[&str]) -> Sample {
    let mut sample = Sample::default();
    match parse_field(fields, 1, false) {
        Ok(counts) => sample.counts = counts,
        Err(e) => debug!("{} count: {}", name, e),
    }
    match parse_field(fields, 4, true) {
        Ok(value) => sample.value = value,
        Err(e) => warn!("{}: {}", name, e),
    }
    sample
}
