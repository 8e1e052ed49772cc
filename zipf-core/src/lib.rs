//! Word-frequency ranking compared against Zipf's law.
//!
//! Zipf's law predicts that the k-th most common word of a text occurs about
//! `1/k` as often as the most common one. This crate counts the words of a
//! text, ranks them and reports, per rank, how far the observed count is from
//! that prediction.
//!
//! ```
//! use zipf_core::{generate_zipf_table, render_zipf_table, RenderConfig};
//!
//! let rows = generate_zipf_table("the cat sat on the mat. The cat ran.", 3)?;
//! for line in render_zipf_table(&rows, &RenderConfig::default()) {
//!     println!("{line}");
//! }
//! # Ok::<(), zipf_core::ZipfError>(())
//! ```

pub mod analyzer;
pub mod table;

pub use table::{
    build_zipf_table, generate_zipf_table, print_zipf_table, render_zipf_table,
    top_word_frequencies, write_zipf_table, zipf_report, CorpusStats, WordCounts, ZipfReport,
};
pub use zipf_types::{RankedEntry, RenderConfig, WordOverflow, ZipfError, ZipfRow};
