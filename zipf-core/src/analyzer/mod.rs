//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Strips punctuation and digits, lowercases
//! - **Tokenizer**: Splits normalized text into words

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::{normalize, TextNormalizer};
pub use tokenizer::Tokenizer;
