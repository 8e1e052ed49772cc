//! Zipf comparison tables.
//!
//! Control flow is linear and stateless:
//!
//! raw text → normalizer → [`top_word_frequencies`] → [`build_zipf_table`] → [`render_zipf_table`]
//!
//! Each call builds its own counts and rows, so the functions here are safe to
//! call from any number of threads on independent texts.

mod builder;
mod ranker;
mod render;
mod stats;

pub use builder::build_zipf_table;
pub use ranker::{top_word_frequencies, WordCounts};
pub use render::{
    print_zipf_table, render_row, render_zipf_table, write_zipf_table, TABLE_WIDTH, WORD_WIDTH,
};
pub use stats::CorpusStats;

use crate::analyzer::normalize;
use zipf_types::{ZipfError, ZipfRow};

/// Rows of a Zipf table together with statistics for the whole text.
#[derive(Debug, Clone, PartialEq)]
pub struct ZipfReport {
    /// One row per ranked word, rank 1 first.
    pub rows: Vec<ZipfRow>,
    /// Counts over every word, not just the ranked ones.
    pub stats: CorpusStats,
}

/// Normalizes `text`, ranks its `top` most frequent words and compares them
/// against Zipf's law.
///
/// # Errors
///
/// Returns `ZipfError::InvalidArgument` if `top` is zero.
/// Returns `ZipfError::EmptyCorpus` if `text` normalizes to no words.
///
/// # Examples
///
/// ```
/// use zipf_core::generate_zipf_table;
///
/// let rows = generate_zipf_table("the cat sat on the mat. The cat ran.", 3).unwrap();
/// assert_eq!(rows[1].word, "cat");
/// assert_eq!(rows[1].zipf_frequency, 1.5);
/// ```
pub fn generate_zipf_table(text: &str, top: usize) -> Result<Vec<ZipfRow>, ZipfError> {
    let normalized = normalize(text);
    let ranked = top_word_frequencies(&normalized, top)?;
    build_zipf_table(&ranked)
}

/// Like [`generate_zipf_table`], but also returns [`CorpusStats`].
///
/// # Errors
///
/// Same as [`generate_zipf_table`].
pub fn zipf_report(text: &str, top: usize) -> Result<ZipfReport, ZipfError> {
    if top == 0 {
        return Err(ZipfError::InvalidArgument { top });
    }

    let normalized = normalize(text);
    let counts = WordCounts::from_normalized(&normalized);
    if counts.is_empty() {
        return Err(ZipfError::EmptyCorpus);
    }

    let stats = counts.stats();
    log::debug!("corpus: {stats}");

    let rows = build_zipf_table(&counts.most_common(top))?;
    Ok(ZipfReport { rows, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use zipf_types::RenderConfig;

    const SCENARIO: &str = "the cat sat on the mat. The cat ran.";

    #[test]
    fn concrete_scenario() {
        let rows = generate_zipf_table(SCENARIO, 3).expect("should build table");
        assert_eq!(rows.len(), 3);

        let words: Vec<&str> = rows.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, ["the", "cat", "sat"]);

        assert_eq!(rows[0].actual_frequency, 3);
        assert_eq!(rows[0].relative_frequency, "1/1");
        assert_eq!(rows[0].zipf_frequency, 3.0);
        assert_eq!(rows[0].difference_actual, 0.0);
        assert_eq!(rows[0].difference_percent, 100.0);

        assert_eq!(rows[1].actual_frequency, 2);
        assert_eq!(rows[1].relative_frequency, "1/2");
        assert_eq!(rows[1].zipf_frequency, 1.5);
        assert_eq!(rows[1].difference_actual, 0.5);
        assert!((rows[1].difference_percent - 400.0 / 3.0).abs() < 1e-9);

        assert_eq!(rows[2].actual_frequency, 1);
        assert_eq!(rows[2].relative_frequency, "1/3");
        assert_eq!(rows[2].zipf_frequency, 1.0);
        assert_eq!(rows[2].difference_actual, 0.0);
        assert_eq!(rows[2].difference_percent, 100.0);
    }

    #[test]
    fn concrete_scenario_rendered() {
        let rows = generate_zipf_table(SCENARIO, 3).unwrap();
        let lines = render_zipf_table(&rows, &RenderConfig::default());
        assert_eq!(
            &lines[3..6],
            [
                "|   1|the         |           3|         1/1|        3.00|        0.00| 100.00%|",
                "|   2|cat         |           2|         1/2|        1.50|        0.50| 133.33%|",
                "|   3|sat         |           1|         1/3|        1.00|        0.00| 100.00%|",
            ]
        );
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn top_beyond_distinct_returns_all_words() {
        let rows = generate_zipf_table(SCENARIO, 100).unwrap();
        assert_eq!(rows.len(), 6);
        let ranks: Vec<usize> = rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn empty_text_is_empty_corpus() {
        for top in [1, 3, 1000] {
            assert_eq!(generate_zipf_table("", top), Err(ZipfError::EmptyCorpus));
        }
    }

    #[test]
    fn punctuation_only_text_is_empty_corpus() {
        assert_eq!(
            generate_zipf_table("... 123 !!! --", 5),
            Err(ZipfError::EmptyCorpus)
        );
    }

    #[test]
    fn information_separators_split_words() {
        let rows = generate_zipf_table("a\x1cb a", 5).unwrap();
        let pairs: Vec<(&str, usize)> = rows
            .iter()
            .map(|r| (r.word.as_str(), r.actual_frequency))
            .collect();
        assert_eq!(pairs, [("a", 2), ("b", 1)]);
    }

    #[test]
    fn top_zero_is_invalid_argument() {
        assert_eq!(
            generate_zipf_table(SCENARIO, 0),
            Err(ZipfError::InvalidArgument { top: 0 })
        );
        assert!(matches!(
            zipf_report(SCENARIO, 0),
            Err(ZipfError::InvalidArgument { top: 0 })
        ));
    }

    #[test]
    fn rank_one_anchors_prediction() {
        let text = "alpha beta gamma alpha beta alpha delta alpha";
        let rows = generate_zipf_table(text, 4).unwrap();
        assert_eq!(rows[0].zipf_frequency, rows[0].actual_frequency as f64);
        assert_eq!(rows[0].difference_percent, 100.0);
        for w in rows.windows(2) {
            assert!(w[0].actual_frequency >= w[1].actual_frequency);
        }
    }

    #[test]
    fn deterministic_across_calls() {
        let a = generate_zipf_table(SCENARIO, 6).unwrap();
        let b = generate_zipf_table(SCENARIO, 6).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn concurrent_callers_agree() {
        let expected = generate_zipf_table(SCENARIO, 6).unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| generate_zipf_table(SCENARIO, 6).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn report_matches_table() {
        let report = zipf_report(SCENARIO, 3).unwrap();
        assert_eq!(report.rows, generate_zipf_table(SCENARIO, 3).unwrap());
        assert_eq!(report.stats.total_words, 9);
        assert_eq!(report.stats.distinct_words, 6);
        assert_eq!(report.stats.top_frequency, 3);
    }

    #[test]
    fn report_on_empty_text() {
        assert!(matches!(zipf_report("  ", 3), Err(ZipfError::EmptyCorpus)));
    }
}
