//! Core types for the Zipf comparison tools.
//!
//! This crate holds the plain data that flows between the stages of the
//! pipeline in `zipf-core`:
//!
//! - **Ranking**: [`RankedEntry`] pairs a word with its occurrence count
//! - **Table rows**: [`ZipfRow`] carries the actual and predicted frequencies
//! - **Errors**: [`ZipfError`] reports degenerate input
//! - **Rendering**: [`RenderConfig`] controls the fixed-width table output

#![warn(missing_docs)]

use core::fmt;

/// A word together with the number of times it occurs in a text.
///
/// Ranked sequences hold these in non-increasing `count` order; the
/// position in the sequence (1-based) is the word's rank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RankedEntry {
    /// The normalized word.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

impl RankedEntry {
    /// Creates a new ranked entry.
    #[inline]
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.word, self.count)
    }
}

/// One row of a Zipf comparison table.
///
/// `zipf_frequency` is the prediction `F1 / rank`, where `F1` is the actual
/// frequency of the rank-1 word. For rank 1 the prediction equals the actual
/// frequency, so `difference_actual` is `0.0` and `difference_percent` is
/// `100.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ZipfRow {
    /// 1-based rank.
    pub rank: usize,
    /// The word at this rank.
    pub word: String,
    /// Observed occurrence count.
    pub actual_frequency: usize,
    /// Display fraction, `"1/rank"`.
    pub relative_frequency: String,
    /// Frequency predicted by Zipf's law.
    pub zipf_frequency: f64,
    /// `actual_frequency - zipf_frequency`.
    pub difference_actual: f64,
    /// `actual_frequency / zipf_frequency * 100`.
    pub difference_percent: f64,
}

/// Errors produced while ranking words or building a Zipf table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZipfError {
    /// The requested number of ranked entries was not a positive integer.
    InvalidArgument {
        /// The rejected `top` value.
        top: usize,
    },
    /// The text contained no words, so there is no rank-1 frequency.
    EmptyCorpus,
}

impl fmt::Display for ZipfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZipfError::InvalidArgument { top } => {
                write!(f, "invalid argument: top must be a positive integer (got {})", top)
            }
            ZipfError::EmptyCorpus => {
                write!(f, "empty frequency table: text contains no words")
            }
        }
    }
}

impl core::error::Error for ZipfError {}

/// How the renderer treats words wider than the word column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordOverflow {
    /// Print the whole word and let the row grow past the border width.
    #[default]
    Overflow,
    /// Cut the word to the column width.
    Truncate,
}

/// Table rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    /// Handling of words longer than the word column.
    pub overflow: WordOverflow,
}

impl RenderConfig {
    /// Long words are printed in full.
    pub const fn overflow() -> Self {
        Self {
            overflow: WordOverflow::Overflow,
        }
    }

    /// Long words are cut to the column width.
    pub const fn truncate() -> Self {
        Self {
            overflow: WordOverflow::Truncate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_entry_display() {
        let e = RankedEntry::new("the", 3);
        assert_eq!(e.to_string(), "the=3");
        assert_eq!(e, RankedEntry::new(String::from("the"), 3));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ZipfError::InvalidArgument { top: 0 }.to_string(),
            "invalid argument: top must be a positive integer (got 0)"
        );
        assert!(ZipfError::EmptyCorpus.to_string().contains("no words"));
    }

    #[test]
    fn error_is_std_error() {
        fn takes_error(_: &dyn core::error::Error) {}
        takes_error(&ZipfError::EmptyCorpus);
    }

    #[test]
    fn render_config_defaults_to_overflow() {
        assert_eq!(RenderConfig::default(), RenderConfig::overflow());
        assert_eq!(RenderConfig::truncate().overflow, WordOverflow::Truncate);
    }
}
