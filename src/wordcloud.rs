//! Word list derivation for the cloud renderer.
//!
//! Splits every review on whitespace, drops short tokens and assigns each
//! remaining occurrence a pseudo-random weight. Weights are decorative, not
//! frequencies: the cloud layout downstream wants visual variety, so repeated
//! words stay as separate entries with independent weights.

use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::Review;

/// Tokens must be strictly longer than this to appear in the cloud.
const MIN_WORD_LEN: usize = 3;

/// Weight range for cloud entries (inclusive low, exclusive high).
const WEIGHT_LOW: u32 = 10;
const WEIGHT_HIGH: u32 = 50;

/// One word-cloud entry. Duplicate words are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct WordEntry {
    pub word: String,
    pub weight: u32,
}

/// Extracts cloud entries from the review texts using the thread-local RNG.
pub fn extract(reviews: &[Review]) -> Vec<WordEntry> {
    extract_with(reviews, &mut rand::thread_rng())
}

/// Same as [`extract`] but with a caller-supplied RNG.
pub fn extract_with<R: Rng>(reviews: &[Review], rng: &mut R) -> Vec<WordEntry> {
    reviews
        .iter()
        .flat_map(|r| r.text.split_whitespace())
        .filter(|w| w.chars().count() > MIN_WORD_LEN)
        .map(|w| WordEntry {
            word: w.to_string(),
            weight: rng.gen_range(WEIGHT_LOW..WEIGHT_HIGH),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sentiment;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn review(text: &str) -> Review {
        Review {
            text: text.to_string(),
            sentiment: Sentiment::Neutral,
        }
    }

    #[test]
    fn test_short_tokens_excluded() {
        let reviews = vec![review("the good product is"), review("bad")];
        let mut rng = StdRng::seed_from_u64(7);
        let words: Vec<String> = extract_with(&reviews, &mut rng)
            .into_iter()
            .map(|e| e.word)
            .collect();
        assert_eq!(words, vec!["good", "product"]);
    }

    #[test]
    fn test_duplicates_not_merged() {
        let reviews = vec![review("great great great")];
        let mut rng = StdRng::seed_from_u64(7);
        let entries = extract_with(&reviews, &mut rng);
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.word == "great"));
    }

    #[test]
    fn test_weights_stay_in_range() {
        let reviews = vec![review("excellent wonderful fantastic amazing superb quality")];
        let mut rng = StdRng::seed_from_u64(42);
        for entry in extract_with(&reviews, &mut rng) {
            assert!((WEIGHT_LOW..WEIGHT_HIGH).contains(&entry.weight));
        }
    }

    #[test]
    fn test_empty_reviews_yield_empty_list() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(extract_with(&[], &mut rng).is_empty());
    }

    #[test]
    fn test_exactly_four_chars_qualifies() {
        let reviews = vec![review("nice ok")];
        let mut rng = StdRng::seed_from_u64(7);
        let entries = extract_with(&reviews, &mut rng);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "nice");
    }
}
