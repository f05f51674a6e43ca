//! Application-wide constants and scoring values
//!
//! This module centralizes the scoring table and file naming defaults so the
//! abbreviation rules live in one place.

/// Scoring rule values for letters in a name
pub mod scoring {
    /// Score for the first letter of any word
    pub const FIRST_LETTER: u32 = 0;

    /// Score for the last letter of a word when it is an 'E'
    pub const LAST_LETTER_E: u32 = 20;

    /// Score for the last letter of a word when it is not an 'E'
    pub const LAST_LETTER: u32 = 5;

    /// Position value for the second letter of a word
    pub const SECOND_POSITION: u32 = 1;

    /// Position value for the third letter of a word
    pub const THIRD_POSITION: u32 = 2;

    /// Position value for every later letter of a word
    pub const LATER_POSITION: u32 = 3;

    /// Letter values used for middle positions, indexed by `letter - b'A'`.
    pub const LETTER_VALUES: [u32; 26] = [
        25, // A
        8,  // B
        8,  // C
        9,  // D
        35, // E
        7,  // F
        9,  // G
        7,  // H
        25, // I
        3,  // J
        6,  // K
        15, // L
        8,  // M
        15, // N
        20, // O
        8,  // P
        1,  // Q
        15, // R
        15, // S
        15, // T
        20, // U
        7,  // V
        7,  // W
        3,  // X
        7,  // Y
        1,  // Z
    ];
}

/// Input and output file naming, fixed for every run
pub mod files {
    /// Extension expected on input files and used for output files
    pub const EXTENSION: &str = "txt";

    /// Prefix added to the input stem when naming the output file
    pub const OUTPUT_PREFIX: &str = "eneji_";

    /// Suffix added to the input stem when naming the output file
    pub const OUTPUT_SUFFIX: &str = "_abbrevs";

    /// Prompt shown when no input file was given on the command line
    pub const INPUT_PROMPT: &str = "Enter input filename: ";
}

/// Environment variables that override config file values
pub mod env {
    pub const LOG_FILE: &str = "NAME_ABBREV_LOG_FILE";
}

/// Name of the application directory under the platform config dir
pub const APP_DIR_NAME: &str = "name_abbrev";

/// Default log file name
pub const LOG_FILE_NAME: &str = "name_abbrev.log";
