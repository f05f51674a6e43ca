use crate::abbreviation::{TracingObserver, generate_abbreviations_with};
use crate::cli::Args;
use crate::config::user_prompts::prompt_for_input_filename;
use crate::error::AppError;
use crate::names_file::{output_path_for, read_names, resolve_input_path, write_results};
use std::path::{Path, PathBuf};

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub names: usize,
    pub without_abbreviation: usize,
}

/// Run the abbreviation flow.
///
/// - Takes the input filename from the arguments or prompts for it
/// - Resolves the input and output paths
/// - Processes the file
pub async fn run(args: &Args) -> Result<RunSummary, AppError> {
    let raw_input = match &args.input {
        Some(input) => input.clone(),
        None => prompt_for_input_filename().await?,
    };
    let input = resolve_input_path(&raw_input);
    let output = args
        .output
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| output_path_for(&input));

    process_file(&input, &output).await
}

/// Reads every name from `input`, generates the abbreviations and writes them to `output`.
///
/// Nothing is written when the input cannot be read.
pub async fn process_file(input: &Path, output: &Path) -> Result<RunSummary, AppError> {
    let names = read_names(input).await?;

    let results = generate_abbreviations_with(&names, &mut TracingObserver);

    write_results(output, &results).await?;

    Ok(RunSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        names: results.len(),
        without_abbreviation: results.iter().filter(|result| result.is_empty()).count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_run_with_input_argument() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("names.txt");
        tokio::fs::write(&input, "ANNA\nANNE\n").await.unwrap();

        let args = Args {
            input: Some(temp_dir.path().join("names").to_string_lossy().to_string()),
            ..Args::default()
        };
        let summary = run(&args).await.unwrap();

        assert_eq!(summary.input, input);
        assert_eq!(summary.output, temp_dir.path().join("eneji_names_abbrevs.txt"));
        assert_eq!(summary.names, 2);
        assert_eq!(summary.without_abbreviation, 0);

        let content = tokio::fs::read_to_string(&summary.output).await.unwrap();
        assert_eq!(content, "ANNA\nANA\nANNE\nANE\n");
    }

    #[tokio::test]
    async fn test_run_with_explicit_output() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("list.txt");
        let output = temp_dir.path().join("custom.out");
        tokio::fs::write(&input, "Grace Hopper\n").await.unwrap();

        let args = Args {
            input: Some(input.to_string_lossy().to_string()),
            output: Some(output.to_string_lossy().to_string()),
            ..Args::default()
        };
        let summary = run(&args).await.unwrap();

        assert_eq!(summary.output, output);
        assert!(output.exists());
        assert!(!temp_dir.path().join("eneji_list_abbrevs.txt").exists());
    }

    #[tokio::test]
    async fn test_missing_input_writes_nothing() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("absent.txt");
        let output = temp_dir.path().join("eneji_absent_abbrevs.txt");

        let result = process_file(&input, &output).await;

        assert!(matches!(result, Err(AppError::InputNotFound { .. })));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_unreadable_input_is_reported_to_user() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("folder.txt");
        let output = temp_dir.path().join("eneji_folder_abbrevs.txt");
        tokio::fs::create_dir(&input).await.unwrap();

        let error = process_file(&input, &output).await.unwrap_err();

        assert!(matches!(error, AppError::InputRead { .. }));
        assert!(error.is_user_facing());
        assert!(error.to_string().contains("folder.txt"));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_unwritable_output_is_reported_to_user() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("names.txt");
        let output = temp_dir.path().join("missing_dir").join("out.txt");
        tokio::fs::write(&input, "Anne\n").await.unwrap();

        let error = process_file(&input, &output).await.unwrap_err();

        assert!(matches!(error, AppError::OutputWrite { .. }));
        assert!(error.is_user_facing());
    }

    #[tokio::test]
    async fn test_names_without_letters_get_empty_lines() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("odd.txt");
        let output = temp_dir.path().join("odd_out.txt");
        tokio::fs::write(&input, "1234\n\nAnne\n").await.unwrap();

        let summary = process_file(&input, &output).await.unwrap();

        assert_eq!(summary.names, 2);
        assert_eq!(summary.without_abbreviation, 1);
        let content = tokio::fs::read_to_string(&output).await.unwrap();
        assert_eq!(content, "1234\n\nAnne\nANN\n");
    }
}
