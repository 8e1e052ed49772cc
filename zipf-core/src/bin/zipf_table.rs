//! Zipf Table Tool
//!
//! Reads a text, ranks its most frequent words and prints how each rank
//! compares against the Zipf's law prediction `F1 / rank`.
//!
//! ## Usage
//!
//! ```bash
//! # Text as an argument
//! zipf_table "the cat sat on the mat. The cat ran." --top 3
//!
//! # From a file, with a statistics line after the table
//! zipf_table --file book.txt --top 25 --stats
//!
//! # From stdin, cutting long words to the column width
//! cat book.txt | zipf_table --truncate
//!
//! # Log counts to stderr (-v debug, -vv trace)
//! zipf_table --file book.txt -v
//! ```
//!
//! ## Example Output
//!
//! ```text
//! --------------------------------------------------------------------------------
//! |Rank|    Word    |Actual Freq | Zipf Frac  | Zipf Freq  |Actual Diff |Pct Diff|
//! --------------------------------------------------------------------------------
//! |   1|the         |           3|         1/1|        3.00|        0.00| 100.00%|
//! |   2|cat         |           2|         1/2|        1.50|        0.50| 133.33%|
//! |   3|sat         |           1|         1/3|        1.00|        0.00| 100.00%|
//! --------------------------------------------------------------------------------
//! ```

use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{LevelFilter, Log, Metadata, Record};
use zipf_core::{write_zipf_table, zipf_report, RenderConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compare word frequencies in a text against Zipf's law", long_about = None)]
struct Args {
    /// Text to analyze [default: read --file or stdin]
    text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Number of ranked words to show
    #[arg(long, default_value_t = 10, value_parser = parse_top)]
    top: usize,

    /// Cut words longer than the word column instead of overflowing
    #[arg(long)]
    truncate: bool,

    /// Print corpus statistics after the table
    #[arg(long)]
    stats: bool,

    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

// Accepts positive integers only; zero and negatives are rejected here.
fn parse_top(s: &str) -> Result<usize, String> {
    match s.trim().parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).map_err(|_| format!("top out of range: {s}")),
        Ok(_) => Err(format!("top must be a positive integer, got {s}")),
        Err(_) => Err(format!("invalid number: {s}")),
    }
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn read_input(args: &Args) -> io::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        log::debug!("reading {}", path.display());
        return fs::read_to_string(path);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let text = read_input(args)?;
    let report = zipf_report(&text, args.top)?;

    let config = if args.truncate {
        RenderConfig::truncate()
    } else {
        RenderConfig::overflow()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_zipf_table(&mut out, &report.rows, &config)?;
    if args.stats {
        writeln!(out, "{}", report.stats)?;
    }
    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
