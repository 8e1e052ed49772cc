//! Word counting and frequency ranking.

use crate::analyzer::Tokenizer;
use rustc_hash::FxHashMap;
use zipf_types::{RankedEntry, ZipfError};

/// Occurrence counts for the words of a normalized text.
///
/// Counts live in a `Vec` ordered by each word's first occurrence, with a hash
/// index from word to slot. Ranking sorts that vector stably, so words with
/// equal counts keep their first-occurrence order.
#[derive(Debug, Default, Clone)]
pub struct WordCounts<'a> {
    entries: Vec<(&'a str, usize)>,
    slots: FxHashMap<&'a str, usize>,
    total: usize,
}

impl<'a> WordCounts<'a> {
    /// Counts the words of `normalized`, split by [`Tokenizer`].
    pub fn from_normalized(normalized: &'a str) -> Self {
        let mut counts = Self::default();
        Tokenizer::new().tokenize(normalized, |word| counts.insert(word));
        counts
    }

    fn insert(&mut self, word: &'a str) {
        let next = self.entries.len();
        let slot = *self.slots.entry(word).or_insert(next);
        if slot == next {
            self.entries.push((word, 0));
        }
        self.entries[slot].1 += 1;
        self.total += 1;
    }

    /// Number of tokens counted. Equals the sum of all counts.
    #[inline]
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.total
    }

    /// Number of distinct words.
    #[inline]
    #[must_use]
    pub fn distinct_words(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no words were counted.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Occurrence count of `word`, if it appeared.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.slots.get(word).map(|&slot| self.entries[slot].1)
    }

    /// Iterates `(word, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns up to `top` entries, highest count first.
    ///
    /// Ties keep first-occurrence order. If `top` exceeds the number of
    /// distinct words, every word is returned.
    pub fn most_common(&self, top: usize) -> Vec<RankedEntry> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(top)
            .map(|(word, count)| RankedEntry::new(word, count))
            .collect()
    }
}

/// Ranks the words of `normalized` and keeps the `top` most frequent.
///
/// # Errors
///
/// Returns `ZipfError::InvalidArgument` if `top` is zero.
/// Returns `ZipfError::EmptyCorpus` if the text contains no words.
pub fn top_word_frequencies(normalized: &str, top: usize) -> Result<Vec<RankedEntry>, ZipfError> {
    if top == 0 {
        return Err(ZipfError::InvalidArgument { top });
    }

    let counts = WordCounts::from_normalized(normalized);
    if counts.is_empty() {
        return Err(ZipfError::EmptyCorpus);
    }

    log::debug!(
        "counted {} words ({} distinct), keeping top {}",
        counts.total_words(),
        counts.distinct_words(),
        top
    );

    Ok(counts.most_common(top))
}
