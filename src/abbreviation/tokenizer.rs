//! Splitting raw names into uppercase words.

use once_cell::sync::Lazy;
use regex::Regex;

/// Possessive `'S` followed by whitespace.
static POSSESSIVE_BEFORE_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'S\s+").expect("valid possessive regex"));

/// Possessive `'S` closing the name.
static POSSESSIVE_AT_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'S$").expect("valid possessive regex"));

static NON_LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Z]+").expect("valid delimiter regex"));

/// Normalizes a raw name into its ordered list of words.
///
/// The name is uppercased, possessive `'S` suffixes are dropped, remaining
/// apostrophes are deleted and the rest is split on runs of anything that is
/// not an ASCII letter `A`-`Z`.
///
/// An empty result means the name produces no abbreviations.
///
/// # Examples
/// ```
/// use name_abbrev::abbreviation::tokenize;
///
/// assert_eq!(tokenize("O'Brien's Farm"), vec!["OBRIEN", "FARM"]);
/// assert!(tokenize("--- 42 ---").is_empty());
/// ```
pub fn tokenize(raw: &str) -> Vec<String> {
    let upper = raw.to_uppercase();
    let without_possessive = POSSESSIVE_BEFORE_SPACE.replace_all(&upper, " ");
    let without_possessive = POSSESSIVE_AT_END.replace(&without_possessive, "");
    let without_apostrophes = without_possessive.replace('\'', "");

    NON_LETTERS
        .split(&without_apostrophes)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
