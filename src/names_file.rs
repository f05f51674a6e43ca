//! Reading name lists and writing abbreviation results.

use crate::abbreviation::ResultSet;
use crate::constants::files;
use crate::error::AppError;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Turns what the user typed into an input path, appending `.txt` when missing.
///
/// The check is case-sensitive, so `names.TXT` becomes `names.TXT.txt`.
pub fn resolve_input_path(raw: &str) -> PathBuf {
    let raw = raw.trim();
    let dotted = format!(".{}", files::EXTENSION);
    if raw.ends_with(&dotted) {
        PathBuf::from(raw)
    } else {
        PathBuf::from(format!("{raw}{dotted}"))
    }
}

/// Derives the output path from the input path.
///
/// `dir/names.txt` becomes `dir/eneji_names_abbrevs.txt`. The naming is fixed
/// and no setting or environment variable changes it.
pub fn output_path_for(input: &Path) -> PathBuf {
    let dotted = format!(".{}", files::EXTENSION);
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.strip_suffix(&dotted).unwrap_or(&file_name);
    let output_name = format!(
        "{}{stem}{}{dotted}",
        files::OUTPUT_PREFIX,
        files::OUTPUT_SUFFIX
    );

    match input.parent() {
        Some(parent) => parent.join(output_name),
        None => PathBuf::from(output_name),
    }
}

/// Splits file contents into names, trimming each line and skipping blank ones.
pub fn parse_names(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads the name list from `path`.
///
/// # Errors
/// * `AppError::InputNotFound` - The file does not exist
/// * `AppError::InputRead` - Any other read failure
pub async fn read_names(path: &Path) -> Result<Vec<String>, AppError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::input_read(path, e))?;
    let names = parse_names(&content);
    tracing::info!("Read {} names from {}", names.len(), path.display());
    Ok(names)
}

/// Renders results as the output file body: each name on its own line,
/// followed by a line with its abbreviations separated by spaces.
pub fn format_results(results: &[ResultSet]) -> String {
    results
        .iter()
        .map(|result| format!("{}\n{}\n", result.name, result.abbreviations.join(" ")))
        .collect()
}

/// Writes all results to `path` in one go.
pub async fn write_results(path: &Path, results: &[ResultSet]) -> Result<(), AppError> {
    fs::write(path, format_results(results))
        .await
        .map_err(|e| AppError::output_write(path, e))?;
    tracing::info!("Wrote {} results to {}", results.len(), path.display());
    Ok(())
}
