//! Per-letter scoring by position within a word.

use crate::constants::scoring;
use std::fmt;

/// Which scoring rule decided a letter's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterRule {
    /// First letter of a word
    FirstLetter,
    /// Last letter of the word once a trailing possessive `S` is ignored
    LastLetter,
    /// Any other position, scored by position value plus letter value
    Middle,
}

/// Score of one letter together with how it was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterScore {
    pub letter: char,
    pub rule: LetterRule,
    /// Position value, only non-zero for [`LetterRule::Middle`]
    pub position_value: u32,
    /// Letter value, only non-zero for [`LetterRule::Middle`]
    pub letter_value: u32,
    pub total: u32,
}

impl fmt::Display for LetterScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule {
            LetterRule::FirstLetter => {
                write!(f, "{}: first letter of word, score = {}", self.letter, self.total)
            }
            LetterRule::LastLetter => {
                write!(f, "{}: last letter of word, score = {}", self.letter, self.total)
            }
            LetterRule::Middle => write!(
                f,
                "{}: middle position, position value = {}, letter value = {}, total = {}",
                self.letter, self.position_value, self.letter_value, self.total
            ),
        }
    }
}

/// Looks up the middle-position weight of a letter. Anything outside `A`-`Z` is worth 0.
pub fn letter_value(letter: char) -> u32 {
    if letter.is_ascii_uppercase() {
        scoring::LETTER_VALUES[(letter as u8 - b'A') as usize]
    } else {
        0
    }
}

/// Position value of a middle letter (1, 2, then 3 for every later position).
fn position_value(position: usize) -> u32 {
    match position {
        1 => scoring::SECOND_POSITION,
        2 => scoring::THIRD_POSITION,
        _ => scoring::LATER_POSITION,
    }
}

/// Returns the word with a single trailing `S` removed, if it is longer than one letter.
///
/// This is where a possessive `S` that was glued onto the word during
/// tokenization gets ignored when finding the word's real last letter.
pub fn effective_word(word: &str) -> &str {
    if word.len() > 1 {
        word.strip_suffix('S').unwrap_or(word)
    } else {
        word
    }
}

/// Scores `letter` found at `position` in `word` and reports which rule applied.
///
/// Rules are checked in order: first letter of the word, last letter of the
/// effective word, then middle position.
pub fn score_breakdown(letter: char, word: &str, position: usize) -> LetterScore {
    if position == 0 {
        return LetterScore {
            letter,
            rule: LetterRule::FirstLetter,
            position_value: 0,
            letter_value: 0,
            total: scoring::FIRST_LETTER,
        };
    }

    let effective = effective_word(word);
    if !effective.is_empty() && position == effective.len() - 1 {
        let total = if letter == 'E' {
            scoring::LAST_LETTER_E
        } else {
            scoring::LAST_LETTER
        };
        return LetterScore {
            letter,
            rule: LetterRule::LastLetter,
            position_value: 0,
            letter_value: 0,
            total,
        };
    }

    let position_value = position_value(position);
    let letter_value = letter_value(letter);
    LetterScore {
        letter,
        rule: LetterRule::Middle,
        position_value,
        letter_value,
        total: position_value + letter_value,
    }
}

/// Scores `letter` found at `position` in `word`.
///
/// # Examples
/// ```
/// use name_abbrev::abbreviation::score_letter;
///
/// assert_eq!(score_letter('A', "ANNE", 0), 0);
/// assert_eq!(score_letter('N', "ANNE", 1), 16);
/// assert_eq!(score_letter('E', "ANNE", 3), 20);
/// ```
pub fn score_letter(letter: char, word: &str, position: usize) -> u32 {
    score_breakdown(letter, word, position).total
}
