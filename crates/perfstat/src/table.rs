use std::collections::HashMap;

use crate::line::ParsedLine;
use crate::metric::Sample;

/// All samples observed at one sampling instant
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub time: f64,
    events: HashMap<String, Sample>,
}

impl Record {
    pub fn new(time: f64) -> Self {
        Self {
            time,
            events: HashMap::new(),
        }
    }

    /// Insert a sample, replacing any earlier one with the same name
    pub fn insert(&mut self, name: String, sample: Sample) {
        self.events.insert(name, sample);
    }

    /// Look up a sample by metric name
    pub fn get(&self, name: &str) -> Option<&Sample> {
        self.events.get(name)
    }

    /// Number of distinct metric names in this record
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

/// Append-only sequence of records in the order their timestamps were seen.
///
/// Only the most recently appended record is ever mutated. A line whose time
/// equals that record's time lands in it; any other time starts a new record,
/// even if an older record already has that time.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one parsed line into the table. A line without an event still
    /// selects (or starts) the record for its time.
    pub fn push(&mut self, line: ParsedLine) {
        let record = self.advance(line.time);
        if let Some(event) = line.event {
            record.insert(event.name, event.sample);
        }
    }

    /// Add a sample at `time`, coalescing with the current record when the
    /// time matches
    pub fn insert(&mut self, time: f64, name: String, sample: Sample) {
        self.advance(time).insert(name, sample);
    }

    /// Make the record for `time` current, appending one unless the last
    /// record already has that time
    fn advance(&mut self, time: f64) -> &mut Record {
        if self.records.last().map_or(true, |current| current.time != time) {
            self.records.push(Record::new(time));
        }
        let last = self.records.len() - 1;
        &mut self.records[last]
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
