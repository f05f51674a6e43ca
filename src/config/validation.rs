use crate::error::AppError;

/// Validates the logging settings
///
/// # Validation Rules
/// - If log file path is provided, it cannot be empty or whitespace
pub fn validate_config(log_file_path: &Option<String>) -> Result<(), AppError> {
    if let Some(log_path) = log_file_path
        && log_path.trim().is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}
