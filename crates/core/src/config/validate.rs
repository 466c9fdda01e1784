use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Quality is within 0-100
/// - Max dimension is not 0
/// - Log names are plain, distinct file names
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let batch = &config.batch;

    if batch.quality > 100 {
        return Err(ConfigError::ValidationError(format!(
            "batch.quality must be between 0 and 100, got {}",
            batch.quality
        )));
    }

    if batch.max_dimension == 0 {
        return Err(ConfigError::ValidationError(
            "batch.max_dimension cannot be 0".to_string(),
        ));
    }

    validate_log_name("batch.duplicate_log_name", &batch.duplicate_log_name)?;
    validate_log_name("batch.failure_log_name", &batch.failure_log_name)?;

    if batch.duplicate_log_name == batch.failure_log_name {
        return Err(ConfigError::ValidationError(
            "batch.duplicate_log_name and batch.failure_log_name must differ".to_string(),
        ));
    }

    Ok(())
}

fn validate_log_name(field: &str, name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "{} cannot be empty",
            field
        )));
    }

    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(ConfigError::ValidationError(format!(
            "{} must be a file name, got {:?}",
            field, name
        )));
    }

    // The output directory may also be the input directory.
    let lower = name.to_ascii_lowercase();
    for ext in [".webp", ".png"] {
        if lower.ends_with(ext) {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot end in {}",
                field, ext
            )));
        }
    }

    Ok(())
}
