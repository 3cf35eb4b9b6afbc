use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::line::parse_line;
use crate::table::{Record, Table};

/// Scan `input` line by line and fold every parsed sample into a new table.
///
/// A read error other than end of input is logged and ends the scan; the
/// table built so far is returned. Invalid UTF-8 is decoded lossily.
pub fn read_table<R: BufRead>(mut input: R) -> Table {
    let mut table = Table::new();
    let mut buf = Vec::new();
    let mut line_count = 0usize;

    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                line_count += 1;
                if let Some(parsed) = parse_line(&String::from_utf8_lossy(&buf)) {
                    table.push(parsed);
                }
            }
            Err(e) => {
                warn!("read line error: {}", e);
                break;
            }
        }
    }

    debug!(
        "Read {} lines into {} records holding {} samples",
        line_count,
        table.len(),
        table.iter().map(Record::event_count).sum::<usize>()
    );
    table
}

/// Read the file at `path` into a table.
///
/// A file that cannot be opened is logged and treated as empty input.
pub fn read_path(path: &Path) -> Table {
    match File::open(path) {
        Ok(file) => read_table(BufReader::new(file)),
        Err(e) => {
            warn!("open file: {}, error: {}", path.display(), e);
            Table::new()
        }
    }
}
