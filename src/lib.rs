//! Three-letter abbreviations for lists of personal names
//!
//! This library splits names into words, scores every ordered letter triple
//! that starts with the name's first letter, and picks for each name the
//! lowest-scoring triples that no other name in the same list can produce.
//!
//! # Examples
//!
//! ```rust,no_run
//! use name_abbrev::app::process_file;
//! use name_abbrev::error::AppError;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let summary = process_file(
//!         Path::new("names.txt"),
//!         Path::new("eneji_names_abbrevs.txt"),
//!     )
//!     .await?;
//!     println!("{} names processed", summary.names);
//!     Ok(())
//! }
//! ```
//!
//! The algorithm can be used without any file handling:
//!
//! ```rust
//! use name_abbrev::generate_abbreviations;
//!
//! let names = vec!["Anne".to_string()];
//! let results = generate_abbreviations(&names);
//! assert_eq!(results[0].abbreviations, vec!["ANN"]);
//! ```

pub mod abbreviation;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod names_file;

// Re-export commonly used types for convenience
pub use abbreviation::{
    CandidateMap, NameCandidates, ResultSet, ScoreObserver, enumerate_candidates,
    generate_abbreviations, select_batch, tokenize,
};
pub use config::Config;
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
