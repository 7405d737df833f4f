use globset::Glob;

use crate::error::{Result, WordTallyError};

use super::Config;

/// Check the semantic rules TOML parsing alone cannot enforce.
///
/// # Errors
/// Returns an error for an empty extension list, a blank extension, or an
/// exclude pattern that is not a valid glob.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.count.extensions.is_empty() {
        return Err(WordTallyError::Config(
            "count.extensions cannot be empty".to_string(),
        ));
    }

    for (i, ext) in config.count.extensions.iter().enumerate() {
        if ext.trim().is_empty() {
            return Err(WordTallyError::Config(format!(
                "count.extensions[{i}] cannot be empty"
            )));
        }
    }

    for pattern in &config.exclude.patterns {
        Glob::new(pattern).map_err(|source| WordTallyError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
    }

    Ok(())
}

/// Parse a threshold as entered by a user.
///
/// # Errors
/// Returns [`WordTallyError::InvalidThreshold`] unless the trimmed input is a
/// natural number (negative values included).
pub fn parse_threshold(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| WordTallyError::InvalidThreshold {
            value: trimmed.to_string(),
        })
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
