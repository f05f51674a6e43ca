//! User interaction and prompts
//!
//! This module handles the input filename prompt shown when no input file
//! was given on the command line.

use crate::constants::files::INPUT_PROMPT;
use crate::error::AppError;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWriteExt};

/// Prompts the user for the input filename and returns the trimmed input.
///
/// # Returns
/// * `Ok(String)` - The trimmed user input
/// * `Err(AppError::MissingInput)` - Nothing was entered or stdin was closed
/// * `Err(AppError)` - Error reading from stdin
///
/// # Example
/// ```no_run
/// use name_abbrev::config::user_prompts::prompt_for_input_filename;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let filename = prompt_for_input_filename().await?;
/// println!("Reading names from {}", filename);
/// # Ok(())
/// # }
/// ```
pub async fn prompt_for_input_filename() -> Result<String, AppError> {
    let mut stdout = io::stdout();
    stdout.write_all(INPUT_PROMPT.as_bytes()).await?;
    stdout.flush().await?;

    let mut reader = io::BufReader::new(io::stdin());
    read_filename(&mut reader).await
}

/// Reads one line from `reader` and returns it trimmed.
pub async fn read_filename<R>(reader: &mut R) -> Result<String, AppError>
where
    R: AsyncBufRead + Unpin,
{
    let mut input = String::new();
    reader.read_line(&mut input).await?;
    let filename = input.trim();
    if filename.is_empty() {
        return Err(AppError::MissingInput);
    }
    Ok(filename.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_filename_trims_input() {
        let mut reader: &[u8] = b"  names  \n";
        assert_eq!(read_filename(&mut reader).await.unwrap(), "names");
    }

    #[tokio::test]
    async fn test_read_filename_only_first_line() {
        let mut reader: &[u8] = b"first.txt\nsecond.txt\n";
        assert_eq!(read_filename(&mut reader).await.unwrap(), "first.txt");
    }

    #[tokio::test]
    async fn test_read_filename_empty_input() {
        let mut reader: &[u8] = b"";
        assert!(matches!(
            read_filename(&mut reader).await,
            Err(AppError::MissingInput)
        ));

        let mut reader: &[u8] = b"   \n";
        assert!(matches!(
            read_filename(&mut reader).await,
            Err(AppError::MissingInput)
        ));
    }
}
