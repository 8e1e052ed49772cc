//! Zipf table construction.

use zipf_types::{RankedEntry, ZipfError, ZipfRow};

/// Builds one [`ZipfRow`] per ranked entry, anchored on the rank-1 count.
///
/// With `F1` the count of the first entry and `Ar` the count at rank `r`:
/// `zipf_frequency = F1 / r`, `difference_actual = Ar - zipf_frequency` and
/// `difference_percent = Ar / zipf_frequency * 100`. Values are not rounded.
///
/// # Errors
///
/// Returns `ZipfError::EmptyCorpus` if `entries` is empty or the rank-1 count
/// is zero; neither gives a prediction to compare against.
pub fn build_zipf_table(entries: &[RankedEntry]) -> Result<Vec<ZipfRow>, ZipfError> {
    let first = entries.first().ok_or(ZipfError::EmptyCorpus)?;
    if first.count == 0 {
        return Err(ZipfError::EmptyCorpus);
    }
    let top_frequency = first.count as f64;

    let rows: Vec<ZipfRow> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let rank = index + 1;
            let actual = entry.count as f64;
            let zipf_frequency = top_frequency / rank as f64;

            ZipfRow {
                rank,
                word: entry.word.clone(),
                actual_frequency: entry.count,
                relative_frequency: format!("1/{rank}"),
                zipf_frequency,
                difference_actual: actual - zipf_frequency,
                difference_percent: actual / zipf_frequency * 100.0,
            }
        })
        .collect();

    log::trace!("built zipf table with {} rows (F1 = {})", rows.len(), first.count);
    Ok(rows)
}
