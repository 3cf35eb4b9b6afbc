use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use perfstat::{read_path, write_csv};

/// Convert interval perf-stat output into CSV on stdout
#[derive(Debug, Parser)]
#[command(name = "stat2csv")]
struct Command {
    /// Input file with the sampling tool's text output
    #[arg(long, default_value = "tensor.txt")]
    path: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = Command::parse();

    let table = read_path(&opts.path);
    log::debug!("Parsed {} records from {}", table.len(), opts.path.display());

    let stdout = io::stdout();
    write_csv(&table, BufWriter::new(stdout.lock()))
        .with_context(|| "Failed to write CSV to stdout")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let opts = Command::try_parse_from(["stat2csv"]).unwrap();
        assert_eq!(opts.path, PathBuf::from("tensor.txt"));
    }

    #[test]
    fn test_path_flag() {
        let opts = Command::try_parse_from(["stat2csv", "--path", "run1.txt"]).unwrap();
        assert_eq!(opts.path, PathBuf::from("run1.txt"));
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(Command::try_parse_from(["stat2csv", "--verbose"]).is_err());
        assert!(Command::try_parse_from(["stat2csv", "input.txt"]).is_err());
    }
}
