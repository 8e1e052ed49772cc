//! Fixed-width text rendering of Zipf tables.
//!
//! Layout (80 columns):
//!
//! ```text
//! --------------------------------------------------------------------------------
//! |Rank|    Word    |Actual Freq | Zipf Frac  | Zipf Freq  |Actual Diff |Pct Diff|
//! --------------------------------------------------------------------------------
//! |   1|the         |           3|         1/1|        3.00|        0.00| 100.00%|
//! |   2|cat         |           2|         1/2|        1.50|        0.50| 133.33%|
//! --------------------------------------------------------------------------------
//! ```
//!
//! The word column is [`WORD_WIDTH`] characters. Longer words either overflow
//! (the row grows past the border) or are truncated, per [`RenderConfig`].

use std::io::{self, Write};

use zipf_types::{RenderConfig, WordOverflow, ZipfRow};

/// Width of the border lines and of every row whose word fits its column.
pub const TABLE_WIDTH: usize = 80;

/// Width of the word column, in characters.
pub const WORD_WIDTH: usize = 12;

const HEADER: &str =
    "|Rank|    Word    |Actual Freq | Zipf Frac  | Zipf Freq  |Actual Diff |Pct Diff|";

fn border() -> String {
    "-".repeat(TABLE_WIDTH)
}

fn fit_word(word: &str, overflow: WordOverflow) -> &str {
    match overflow {
        WordOverflow::Overflow => word,
        WordOverflow::Truncate => match word.char_indices().nth(WORD_WIDTH) {
            Some((cut, _)) => &word[..cut],
            None => word,
        },
    }
}

/// Formats a single data row.
pub fn render_row(row: &ZipfRow, config: &RenderConfig) -> String {
    format!(
        "|{:4}|{:12}|{:12}|{:>12}|{:12.2}|{:12.2}|{:7.2}%|",
        row.rank,
        fit_word(&row.word, config.overflow),
        row.actual_frequency,
        row.relative_frequency,
        row.zipf_frequency,
        row.difference_actual,
        row.difference_percent,
    )
}

/// Renders the full table: border, header, border, one line per row, border.
///
/// An empty `rows` slice renders just the frame and header.
pub fn render_zipf_table(rows: &[ZipfRow], config: &RenderConfig) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(border());
    lines.push(HEADER.to_string());
    lines.push(border());
    lines.extend(rows.iter().map(|row| render_row(row, config)));
    lines.push(border());
    lines
}

/// Writes the rendered table to `out`, one line per row.
pub fn write_zipf_table<W: Write>(
    out: &mut W,
    rows: &[ZipfRow],
    config: &RenderConfig,
) -> io::Result<()> {
    for line in render_zipf_table(rows, config) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Prints the table to standard output with the default [`RenderConfig`].
///
/// # Errors
///
/// Returns any error from writing to stdout (for example a closed pipe).
pub fn print_zipf_table(rows: &[ZipfRow]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_zipf_table(&mut out, rows, &RenderConfig::default())?;
    out.flush()
}
