use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Three-letter abbreviations for lists of names
///
/// Reads a text file with one name per line and writes, for every name, the
/// lowest-scoring three-letter abbreviations that no other name in the list
/// can produce.
///
/// Without an INPUT argument the filename is asked for interactively.
/// A missing ".txt" extension is added automatically, and the results are
/// written next to the input as "eneji_<name>_abbrevs.txt".
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Input file with one name per line. Prompted for if not given.
    pub input: Option<String>,

    /// Write results to this path instead of the derived output file name.
    #[arg(short = 'o', long = "output", help_heading = "Output Options")]
    pub output: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Log the score breakdown of every candidate abbreviation.
    /// Logs are also printed to the terminal in this mode.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

/// Whether the arguments ask for a configuration or info command instead of a run.
pub fn is_command_mode(args: &Args) -> bool {
    args.version || args.list_config || is_config_update(args)
}

/// Whether the arguments ask to change the stored configuration.
pub fn is_config_update(args: &Args) -> bool {
    args.new_log_file_path.is_some() || args.clear_log_file_path
}
