//! Hooks for watching candidate scoring as it happens.

use super::scorer::LetterScore;

/// Receives a score breakdown for every letter triple the enumerator builds.
///
/// Implementations must not influence the result; they only observe.
pub trait ScoreObserver {
    /// Called once before a name's triples are enumerated.
    fn on_name(&mut self, _name: &str, _words: &[String]) {}

    /// Called for each occurrence pair that yields `key`.
    fn on_candidate(&mut self, key: &str, second: &LetterScore, third: &LetterScore);
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScoreObserver for NoopObserver {
    fn on_candidate(&mut self, _key: &str, _second: &LetterScore, _third: &LetterScore) {}
}

/// Observer that writes each breakdown to the log at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ScoreObserver for TracingObserver {
    fn on_name(&mut self, name: &str, words: &[String]) {
        tracing::debug!("Generating abbreviations for '{name}' (words: {words:?})");
    }

    fn on_candidate(&mut self, key: &str, second: &LetterScore, third: &LetterScore) {
        tracing::debug!(
            "Score for {key}: {}: first letter of name, score = 0; {second}; {third}; total = {}",
            key.chars().next().unwrap_or_default(),
            second.total + third.total
        );
    }
}
