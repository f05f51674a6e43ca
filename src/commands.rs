use crate::app::RunSummary;
use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{stderr, stdout};

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file simultaneously",
        ));
    }
    if crate::cli::is_command_mode(args) && (args.input.is_some() || args.output.is_some()) {
        return Err(AppError::config_error(
            "Input and output files cannot be combined with configuration or info options",
        ));
    }
    Ok(())
}

/// Handles the --version command.
pub fn handle_version_command() -> Result<(), AppError> {
    execute!(
        stdout(),
        SetForegroundColor(Color::Cyan),
        Print(crate::NAME),
        ResetColor,
        Print(format!(" {}\n", crate::VERSION)),
    )?;
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    update_config_at(&config_path, args).await?;

    if args.clear_log_file_path {
        println!("Custom log file path cleared. Using default location.");
    }
    println!("Config updated successfully!");

    Ok(())
}

/// Applies the log file options in `args` to the config file at `path`.
///
/// Starts from the stored file, or defaults if there is none, so environment
/// overrides never end up persisted. A file that exists but cannot be read
/// or parsed is left untouched and the error is returned.
pub async fn update_config_at(path: &str, args: &Args) -> Result<Config, AppError> {
    let mut config = Config::load_from_path_or_default(path).await?;

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
    }

    config.validate()?;
    config.save_to_path(path).await?;

    Ok(config)
}

/// Prints the result of a completed run.
pub fn print_summary(summary: &RunSummary) -> Result<(), AppError> {
    let mut out = stdout();
    execute!(
        out,
        SetForegroundColor(Color::Green),
        Print(format!("Wrote abbreviations for {} names", summary.names)),
        ResetColor,
        Print(format!(" to {}\n", summary.output.display())),
    )?;

    if summary.without_abbreviation > 0 {
        execute!(
            out,
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "{} names have no unique abbreviation\n",
                summary.without_abbreviation
            )),
            ResetColor,
        )?;
    }
    Ok(())
}

/// Prints an error meant for the user on stderr.
pub fn print_error(error: &AppError) -> Result<(), AppError> {
    execute!(
        stderr(),
        SetForegroundColor(Color::Red),
        Print(format!("Error: {error}\n")),
        ResetColor,
    )?;
    Ok(())
}
