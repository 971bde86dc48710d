//! sheetcalc CLI - evaluate formulas and recalculate CSV grids

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sheetcalc::prelude::*;
use sheetcalc::{CsvReadOptions, CsvWriteOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheetcalc")]
#[command(author, version, about = "Spreadsheet formula evaluation tool")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single formula and print its display value
    Eval {
        /// Formula or literal text, e.g. "=SUM(A1:A3)"
        formula: String,

        /// CSV grid whose recalculated display values the formula can read
        #[arg(short, long)]
        cells: Option<PathBuf>,

        /// Cell value override, e.g. --set A1=10 (repeatable)
        #[arg(short, long = "set", value_name = "REF=VALUE")]
        set: Vec<String>,
    },

    /// Recalculate every formula of a CSV grid and write the display values
    Recalc {
        /// Input CSV file with raw cell inputs
        input: PathBuf,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },

    /// Recalculate a CSV grid and print one column in sorted order
    Sort {
        /// Input CSV file with raw cell inputs
        input: PathBuf,

        /// Column letter to sort by
        #[arg(short, long)]
        column: char,

        /// Sort from largest to smallest
        #[arg(long)]
        descending: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Eval {
            formula,
            cells,
            set,
        } => eval(&formula, cells.as_deref(), &set),
        Commands::Recalc {
            input,
            output,
            delimiter,
        } => recalc(&input, output.as_deref(), delimiter),
        Commands::Sort {
            input,
            column,
            descending,
        } => sort(&input, column, descending),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn eval(formula: &str, cells: Option<&Path>, overrides: &[String]) -> Result<()> {
    let mut snapshot = match cells {
        Some(path) => load_recalculated(path, b',')?.snapshot(),
        None => Snapshot::new(),
    };

    for assignment in overrides {
        let (reference, value) = assignment
            .split_once('=')
            .with_context(|| format!("Expected REF=VALUE, got '{}'", assignment))?;
        let cell: CellRef = reference
            .trim()
            .parse()
            .with_context(|| format!("Invalid cell reference in '{}'", assignment))?;
        snapshot.insert(cell.to_string(), value);
    }

    println!("{}", evaluate(formula, &snapshot));
    Ok(())
}

fn recalc(input: &Path, output: Option<&Path>, delimiter: char) -> Result<()> {
    let delimiter = delimiter_byte(delimiter)?;
    let grid = load_recalculated(input, delimiter)?;

    let options = CsvWriteOptions {
        delimiter,
        ..Default::default()
    };

    match output {
        Some(path) => {
            CsvWriter::write_file(&grid, path, &options)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let csv = CsvWriter::write_string(&grid, &options).context("Failed to encode CSV")?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", csv)?;
        }
    }

    Ok(())
}

fn sort(input: &Path, column: char, descending: bool) -> Result<()> {
    let grid = load_recalculated(input, b',')?;
    let col = CellRef::letter_to_column(column)
        .with_context(|| format!("Invalid column '{}'", column))?;

    let direction = if descending {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    let entries = grid
        .sorted_column(col, direction)
        .with_context(|| format!("Column '{}' is outside the grid", column))?;

    let mut stdout = io::stdout().lock();
    for entry in entries {
        writeln!(stdout, "{},{}", entry.row + 1, entry.value)?;
    }

    Ok(())
}

/// Read a CSV grid of raw inputs and recalculate it
fn load_recalculated(path: &Path, delimiter: u8) -> Result<Grid> {
    let options = CsvReadOptions {
        delimiter,
        ..Default::default()
    };
    let mut grid = CsvReader::read_file(path, &options)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;

    let stats = grid.recalculate();
    eprintln!(
        "Recalculated {} formulas ({} errors, {} not available)",
        stats.formulas, stats.errors, stats.not_available
    );

    Ok(grid)
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got '{}'", delimiter);
    }
    Ok(delimiter as u8)
}
