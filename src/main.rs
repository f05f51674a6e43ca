// src/main.rs
use clap::Parser;
use name_abbrev::cli::{Args, is_config_update};
use name_abbrev::config::Config;
use name_abbrev::error::AppError;
use name_abbrev::{app, commands, logging};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    commands::validate_args(&args)?;

    if args.version {
        return commands::handle_version_command();
    }

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if is_config_update(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    // A broken config file only affects logging, so a run never stops on it
    let (config, config_error) = Config::load_or_default().await;

    let (log_file_path, guard) = logging::setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");
    if let Some(e) = config_error {
        tracing::warn!("Ignoring config file {}: {e}", Config::get_config_path());
    }

    match app::run(&args).await {
        Ok(summary) => commands::print_summary(&summary),
        Err(e) if e.is_user_facing() => {
            tracing::error!("{e}");
            commands::print_error(&e)?;
            // Flush logs before exiting, the guard is not dropped by process::exit
            drop(guard);
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("{e}");
            Err(e)
        }
    }
}
