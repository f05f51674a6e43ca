//! Picking each name's best abbreviations across a whole batch.

use super::enumerator::CandidateMap;
use std::collections::{HashMap, HashSet};

/// A name with the candidates enumerated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCandidates {
    pub name: String,
    pub words: Vec<String>,
    pub candidates: CandidateMap,
}

/// Final abbreviations chosen for one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    pub name: String,
    /// Sorted, duplicate-free keys sharing the lowest unique score
    pub abbreviations: Vec<String>,
    /// Score shared by every entry in `abbreviations`, if there are any
    pub score: Option<u32>,
}

impl ResultSet {
    fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            abbreviations: Vec::new(),
            score: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.abbreviations.is_empty()
    }
}

/// Maps every key in the batch to the names that produced it.
fn key_owners(batch: &[NameCandidates]) -> HashMap<&str, HashSet<&str>> {
    batch
        .iter()
        .flat_map(|entry| {
            entry
                .candidates
                .keys()
                .map(move |key| (key.as_str(), entry.name.as_str()))
        })
        .fold(HashMap::new(), |mut owners, (key, name)| {
            owners.entry(key).or_default().insert(name);
            owners
        })
}

fn select_for_name(entry: &NameCandidates, owners: &HashMap<&str, HashSet<&str>>) -> ResultSet {
    let unique: Vec<(&String, u32)> = entry
        .candidates
        .iter()
        .filter(|(key, _)| owners.get(key.as_str()).is_some_and(|names| names.len() == 1))
        .map(|(key, &score)| (key, score))
        .collect();

    let Some(best) = unique.iter().map(|&(_, score)| score).min() else {
        return ResultSet::empty(&entry.name);
    };

    // Candidate maps iterate in key order, so the result is already sorted and unique
    let abbreviations = unique
        .into_iter()
        .filter(|&(_, score)| score == best)
        .map(|(key, _)| key.clone())
        .collect();

    ResultSet {
        name: entry.name.clone(),
        abbreviations,
        score: Some(best),
    }
}

/// Chooses the result set for every name in the batch, in input order.
///
/// A key produced by more than one distinct name is dropped for all of them,
/// whatever its score. Among the remaining keys of a name, every key sharing
/// the lowest score is kept. Repeated lines with identical text count as the
/// same name and do not knock out each other's keys.
pub fn select_batch(batch: &[NameCandidates]) -> Vec<ResultSet> {
    let owners = key_owners(batch);
    batch
        .iter()
        .map(|entry| select_for_name(entry, &owners))
        .collect()
}
