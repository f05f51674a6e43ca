//! Three-letter abbreviation generation for lists of names
//!
//! A name is split into uppercase words, every ordered letter triple that
//! starts with the name's first letter is scored, and each name keeps the
//! lowest-scoring triples no other name in the batch can produce.
//!
//! # Examples
//!
//! ```
//! use name_abbrev::abbreviation::generate_abbreviations;
//!
//! let names = vec!["ANNA".to_string(), "ANNE".to_string()];
//! let results = generate_abbreviations(&names);
//!
//! // "ANN" is shared, so neither name gets it
//! assert_eq!(results[0].abbreviations, vec!["ANA"]);
//! assert_eq!(results[1].abbreviations, vec!["ANE"]);
//! ```

pub mod enumerator;
pub mod observer;
pub mod scorer;
pub mod selector;
pub mod tokenizer;

pub use enumerator::{
    CandidateMap, LetterOccurrence, enumerate_candidates, enumerate_candidates_with,
};
pub use observer::{NoopObserver, ScoreObserver, TracingObserver};
pub use scorer::{LetterRule, LetterScore, score_breakdown, score_letter};
pub use selector::{NameCandidates, ResultSet, select_batch};
pub use tokenizer::tokenize;

/// Tokenizes a name and enumerates its candidates.
pub fn analyze_name<O>(name: &str, observer: &mut O) -> NameCandidates
where
    O: ScoreObserver + ?Sized,
{
    let words = tokenize(name);
    observer.on_name(name, &words);
    let candidates = enumerate_candidates_with(&words, observer);
    NameCandidates {
        name: name.to_string(),
        words,
        candidates,
    }
}

/// Generates the result set of every name in the batch, in input order.
pub fn generate_abbreviations(names: &[String]) -> Vec<ResultSet> {
    generate_abbreviations_with(names, &mut NoopObserver)
}

/// Same as [`generate_abbreviations`], reporting every scored triple to `observer`.
///
/// Every name is enumerated before any selection happens, since uniqueness
/// depends on the whole batch.
pub fn generate_abbreviations_with<O>(names: &[String], observer: &mut O) -> Vec<ResultSet>
where
    O: ScoreObserver + ?Sized,
{
    let batch: Vec<NameCandidates> = names
        .iter()
        .map(|name| analyze_name(name, &mut *observer))
        .collect();

    let total_candidates: usize = batch.iter().map(|entry| entry.candidates.len()).sum();
    tracing::info!(
        "Enumerated {total_candidates} candidates for {} names",
        batch.len()
    );

    let results = select_batch(&batch);

    for result in results.iter().filter(|result| result.is_empty()) {
        tracing::warn!("No unique abbreviation for '{}'", result.name);
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_anna_anne_batch() {
        let results = generate_abbreviations(&names(&["ANNA", "ANNE"]));

        // ANNA: ANN 33, ANA 16+5=21 (N@1 + A@3), ANN shared with ANNE
        assert!(!results[0].abbreviations.contains(&"ANN".to_string()));
        assert!(!results[1].abbreviations.contains(&"ANN".to_string()));
        assert_eq!(results[0].abbreviations, vec!["ANA"]);
        assert_eq!(results[0].score, Some(21));
        assert_eq!(results[1].abbreviations, vec!["ANE"]);
        assert_eq!(results[1].score, Some(36));
    }

    #[test]
    fn test_single_name_keeps_minimum() {
        let results = generate_abbreviations(&names(&["ANNE"]));
        assert_eq!(results[0].abbreviations, vec!["ANN"]);
        assert_eq!(results[0].score, Some(33));
    }

    #[test]
    fn test_name_without_letters() {
        let results = generate_abbreviations(&names(&["1234", "Jo Ann"]));
        assert!(results[0].is_empty());
        assert_eq!(results[1].name, "Jo Ann");
        assert!(!results[1].is_empty());
    }

    #[test]
    fn test_result_sets_are_subsets_of_candidates() {
        let list = names(&["Grace Hopper", "Grace Kelly", "Greta Garbo"]);
        let results = generate_abbreviations(&list);
        for (name, result) in list.iter().zip(&results) {
            let candidates = analyze_name(name, &mut NoopObserver).candidates;
            assert!(
                result
                    .abbreviations
                    .iter()
                    .all(|key| candidates.contains_key(key))
            );
        }
    }

    #[test]
    fn test_uniqueness_closure() {
        let list = names(&["Grace Hopper", "Grace Kelly", "Greta Garbo"]);
        let batch: Vec<NameCandidates> = list
            .iter()
            .map(|name| analyze_name(name, &mut NoopObserver))
            .collect();
        let results = select_batch(&batch);

        for (i, result) in results.iter().enumerate() {
            for key in &result.abbreviations {
                let shared = batch
                    .iter()
                    .enumerate()
                    .any(|(j, other)| i != j && other.candidates.contains_key(key));
                assert!(!shared, "{key} of {} is produced by another name", result.name);
            }
        }
    }

    #[test]
    fn test_tracing_observer_does_not_change_results() {
        let list = names(&["O'Brien's Farm", "Obadiah Fenn"]);
        assert_eq!(
            generate_abbreviations(&list),
            generate_abbreviations_with(&list, &mut TracingObserver)
        );
    }
}
