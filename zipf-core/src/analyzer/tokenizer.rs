//! Streaming Tokenizer Module
//!
//! Splits normalized text into words for counting. It's the second stage of the
//! pipeline, taking the output of the normalizer and emitting each word.
//!
//! ## What It Does
//!
//! Given normalized input like `"the cat  sat\non the mat"`, it emits
//! `"the"`, `"cat"`, `"sat"`, `"on"`, `"the"`, `"mat"` in that order.
//!
//! ## Splitting Rule
//!
//! Words are separated by runs of one or more separator characters: Unicode
//! whitespace (spaces, tabs, newlines, ...) plus the ASCII information
//! separators `\x1c`..=`\x1f`. Leading, trailing and repeated separators never
//! produce empty tokens. Nothing else splits words; the normalizer has already
//! removed the punctuation that matters.
//!
//! ## Usage
//!
//! ```rust
//! use zipf_core::analyzer::tokenizer::Tokenizer;
//!
//! let mut words = Vec::new();
//! Tokenizer::new().tokenize("  hello\tworld\x1fagain ", |text| words.push(text));
//! assert_eq!(words, ["hello", "world", "again"]);
//! ```

/// Returns `true` for characters that separate words.
#[inline(always)]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Streaming tokenizer - splits normalized text into words.
///
/// Tokens are slices (`&str`) into the input, never copies, emitted left to
/// right.
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes normalized input and emits each word.
    #[inline]
    pub fn tokenize<'n, F>(&self, normalized: &'n str, emit: F)
    where
        F: FnMut(&'n str),
    {
        normalized
            .split(is_separator)
            .filter(|text| !text.is_empty())
            .for_each(emit);
    }

    /// Returns the number of tokens in `normalized`.
    #[inline]
    pub fn count(&self, normalized: &str) -> usize {
        let mut n = 0usize;
        self.tokenize(normalized, |_| n += 1);
        n
    }
}
