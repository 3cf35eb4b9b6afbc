/// Name emitted for "stalled cycles per insn" ratio lines.
pub const STALLED_CYCLES_PER_INSN: &str = "stalled-cycles-per-insn";

/// Name emitted for `msec` duration lines.
pub const TASK_CLOCK: &str = "task-clock";

/// Metrics that get a column pair in the CSV output, in column order.
///
/// Parsed lines may carry other names; those are kept in their record but
/// never printed.
pub const KNOWN_METRICS: [&str; 13] = [
    TASK_CLOCK,
    "context-switches",
    "cpu-migrations",
    "page-faults",
    "cycles",
    "stalled-cycles-frontend",
    "instructions",
    STALLED_CYCLES_PER_INSN,
    "branches",
    "branch-misses",
    "L1-dcache-loads",
    "L1-dcache-load-misses",
    "LLC-loads",
];

/// One counter reading within a sampling interval
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Derived quantity printed after the name (percentage, ratio, CPUs utilized)
    pub value: f64,
    /// Raw count or duration for the interval, 0 when the line carries none
    pub counts: f64,
}

impl Sample {
    pub fn new(value: f64, counts: f64) -> Self {
        Self { value, counts }
    }
}
