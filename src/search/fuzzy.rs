//! Typo-tolerant matching of a term against name words.

use super::scoring::ScoringWeights;
use rapidfuzz::distance::levenshtein;

/// Levenshtein distance between `a` and `b`, over Unicode scalar values.
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein::distance(a.chars(), b.chars())
}

/// Best fuzzy score of `term` against any of `words`, or 0.
///
/// Only terms of at least `fuzzy_min_term_length` characters are considered.
/// Words whose length differs from the term by more than
/// `fuzzy_max_length_difference` are skipped without computing a distance.
/// A word scores only when `0 < distance <= fuzzy_max_distance`; identical
/// words are the exact tiers' business.
pub fn fuzzy_score<'a, I>(term: &str, words: I, weights: &ScoringWeights) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    let term_len = term.chars().count();
    if term_len < weights.fuzzy_min_term_length {
        return 0;
    }

    words
        .into_iter()
        .filter(|word| {
            word.chars().count().abs_diff(term_len) <= weights.fuzzy_max_length_difference
        })
        .map(|word| edit_distance(term, word))
        .filter(|&distance| distance > 0 && distance <= weights.fuzzy_max_distance)
        .map(|distance| weights.fuzzy_points(distance))
        .max()
        .unwrap_or(0)
}
