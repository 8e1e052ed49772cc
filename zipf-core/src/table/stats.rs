//! Word-count statistics for a whole text.

use crate::table::ranker::WordCounts;

/// A snapshot of word-count statistics for one text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorpusStats {
    /// Number of tokens after normalization and splitting.
    pub total_words: usize,
    /// Number of distinct words.
    pub distinct_words: usize,
    /// Count of the most frequent word (0 for an empty text).
    pub top_frequency: usize,
}

impl WordCounts<'_> {
    /// Returns corpus statistics.
    pub fn stats(&self) -> CorpusStats {
        CorpusStats::from_counts(self)
    }
}

impl CorpusStats {
    /// Constructs stats from word counts.
    pub fn from_counts(counts: &WordCounts<'_>) -> Self {
        Self {
            total_words: counts.total_words(),
            distinct_words: counts.distinct_words(),
            top_frequency: counts.iter().map(|(_, c)| c).max().unwrap_or(0),
        }
    }

    /// Distinct words per token, in `0.0..=1.0`. Zero for an empty text.
    pub fn type_token_ratio(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.distinct_words as f64 / self.total_words as f64
    }

    /// Fraction of all tokens taken by the most frequent word.
    pub fn top_share(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.top_frequency as f64 / self.total_words as f64
    }
}

impl core::fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} words, {} distinct",
            self.total_words, self.distinct_words
        )?;

        if self.total_words > 0 {
            write!(
                f,
                ", type/token {:.3}, top word {:.1}% of text",
                self.type_token_ratio(),
                self.top_share() * 100.0
            )?;
        }

        Ok(())
    }
}
