//! Query tokenization.

/// Minimum term length, in characters, used when no configuration overrides it.
pub const MIN_TERM_LENGTH: usize = 2;

/// Splits a free-text query into lowercase search terms.
///
/// Runs of whitespace collapse into one separator and leading/trailing
/// whitespace is ignored. Tokens shorter than `min_term_length` characters
/// (counted as Unicode scalar values, not bytes) are discarded *before*
/// lowercasing. Order and duplicates are preserved.
///
/// A query made only of one-letter words ("A B") therefore yields no terms,
/// and the search built on top of it returns nothing.
pub fn tokenize(query: &str, min_term_length: usize) -> Vec<String> {
    query
        .split_whitespace()
        .filter(|token| token.chars().count() >= min_term_length)
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("John Doe", vec!["john", "doe"])]
    #[case("  John \t\n  Doe  ", vec!["john", "doe"])]
    #[case("doe DOE Doe", vec!["doe", "doe", "doe"])]
    #[case("J. Doe", vec!["j.", "doe"])]
    #[case("A B Doe", vec!["doe"])]
    #[case("ÉLODIE Ørsted", vec!["élodie", "ørsted"])]
    fn test_tokenize(#[case] input: &str, #[case] expected: Vec<&str>) {
        check!(tokenize(input, MIN_TERM_LENGTH) == expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t")]
    #[case("A B")]
    #[case("x y z")]
    fn test_no_terms(#[case] input: &str) {
        check!(tokenize(input, MIN_TERM_LENGTH).is_empty());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // "é" is two bytes but one character
        check!(tokenize("é", MIN_TERM_LENGTH).is_empty());
        check!(tokenize("éé", MIN_TERM_LENGTH) == vec!["éé"]);
    }

    #[test]
    fn test_custom_min_length() {
        check!(tokenize("al bob carla", 3) == vec!["bob", "carla"]);
        check!(tokenize("a b", 1) == vec!["a", "b"]);
    }
}
