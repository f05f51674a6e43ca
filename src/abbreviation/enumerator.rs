//! Enumeration of ordered letter triples for a single name.

use super::observer::{NoopObserver, ScoreObserver};
use super::scorer::score_breakdown;
use std::collections::BTreeMap;

/// Location of one letter inside a tokenized name.
///
/// Ordering is by word index first, then by position inside the word.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterOccurrence {
    pub word_index: usize,
    pub position: usize,
}

impl LetterOccurrence {
    pub fn new(word_index: usize, position: usize) -> Self {
        Self {
            word_index,
            position,
        }
    }
}

/// Abbreviation key mapped to the lowest score seen for it, in key order.
pub type CandidateMap = BTreeMap<String, u32>;

/// Every letter of the name with all the places it occurs.
pub fn index_occurrences(words: &[String]) -> BTreeMap<char, Vec<LetterOccurrence>> {
    words
        .iter()
        .enumerate()
        .flat_map(|(word_index, word)| {
            word.chars()
                .enumerate()
                .map(move |(position, letter)| (letter, LetterOccurrence::new(word_index, position)))
        })
        .fold(BTreeMap::new(), |mut index, (letter, occurrence)| {
            index
                .entry(letter)
                .or_default()
                .push(occurrence);
            index
        })
}

/// Builds all candidate abbreviations for a tokenized name.
///
/// Returns an empty map when the name has no words or fewer than three letters.
///
/// # Examples
/// ```
/// use name_abbrev::abbreviation::enumerate_candidates;
///
/// let words = vec!["ANNE".to_string()];
/// let candidates = enumerate_candidates(&words);
/// assert_eq!(candidates.get("ANE"), Some(&36));
/// assert_eq!(candidates.get("ANN"), Some(&33));
/// ```
pub fn enumerate_candidates(words: &[String]) -> CandidateMap {
    enumerate_candidates_with(words, &mut NoopObserver)
}

/// Same as [`enumerate_candidates`], reporting every scored triple to `observer`.
pub fn enumerate_candidates_with<O>(words: &[String], observer: &mut O) -> CandidateMap
where
    O: ScoreObserver + ?Sized,
{
    let Some(first_letter) = words.first().and_then(|word| word.chars().next()) else {
        return CandidateMap::new();
    };

    let located: Vec<(char, LetterOccurrence)> = index_occurrences(words)
        .into_iter()
        .flat_map(|(letter, occurrences)| {
            occurrences
                .into_iter()
                .map(move |occurrence| (letter, occurrence))
        })
        .collect();
    let origin = LetterOccurrence::default();

    located
        .iter()
        .filter(|(_, second)| *second > origin)
        .flat_map(|&(second_letter, second)| {
            located
                .iter()
                .filter(move |(_, third)| *third > second)
                .map(move |&(third_letter, third)| ((second_letter, second), (third_letter, third)))
        })
        .fold(
            CandidateMap::new(),
            |mut candidates, ((second_letter, second), (third_letter, third))| {
                let second_score =
                    score_breakdown(second_letter, &words[second.word_index], second.position);
                let third_score =
                    score_breakdown(third_letter, &words[third.word_index], third.position);
                let key: String = [first_letter, second_letter, third_letter].iter().collect();
                let total = second_score.total + third_score.total;

                observer.on_candidate(&key, &second_score, &third_score);

                candidates
                    .entry(key)
                    .and_modify(|best| *best = (*best).min(total))
                    .or_insert(total);
                candidates
            },
        )
}
