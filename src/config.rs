//! Standalone configuration.
//!
//! Without a host, the reviewer list and issue prefix come from a JSON file
//! shaped like the `init` payload, `--reviewer`/`--prefix` flags, and the
//! `COMMIT_WIZARD_PREFIX` environment variable.

use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;
use crate::host::HostConfig;
use crate::questions::Choice;

/// Environment variable supplying the issue prefix when no flag or file sets it.
pub const PREFIX_ENV_VAR: &str = "COMMIT_WIZARD_PREFIX";

/// Configuration sources for a standalone run, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct StandaloneOptions {
    pub config_file: Option<PathBuf>,
    /// `"Display Name=value"` or bare `"value"` entries.
    pub reviewers: Vec<String>,
    pub prefix: Option<String>,
}

/// Build and validate the configuration for a standalone run.
///
/// Prefix precedence is flag, then file, then environment. Reviewers from
/// flags are appended after those from the file.
pub fn build_standalone_config(options: &StandaloneOptions) -> Result<HostConfig, ConfigError> {
    let mut config = match &options.config_file {
        Some(path) => load_config_file(path)?,
        None => HostConfig::default(),
    };

    for entry in &options.reviewers {
        config.reviewers.push(parse_reviewer(entry)?);
    }

    if options.prefix.is_some() {
        config.prefix = options.prefix.clone();
    } else if config.prefix.is_none() {
        config.prefix = prefix_from_env();
    }

    validate(&config)?;
    Ok(config)
}

/// Read a config file containing `{"reviewers": [...], "prefix": ...}`.
pub fn load_config_file(path: &Path) -> Result<HostConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;

    let config: HostConfig =
        serde_json::from_str(&content).map_err(|source| ConfigError::ParseFailed {
            path: path.display().to_string(),
            source,
        })?;

    debug!("Loaded {} reviewers from {}", config.reviewers.len(), path.display());
    Ok(config)
}

/// Parse `"Display Name=value"`. A bare `"value"` is its own display name.
pub fn parse_reviewer(entry: &str) -> Result<Choice, ConfigError> {
    let (display, value) = match entry.rsplit_once('=') {
        Some((display, value)) => (display.trim(), value.trim()),
        None => (entry.trim(), entry.trim()),
    };

    if value.is_empty() {
        return Err(ConfigError::InvalidReviewer(entry.to_string()));
    }

    let display = if display.is_empty() { value } else { display };
    Ok(Choice::new(display, value))
}

/// Standalone configs must name at least one reviewer, each with a unique,
/// non-empty value.
pub fn validate(config: &HostConfig) -> Result<(), ConfigError> {
    if config.reviewers.is_empty() {
        return Err(ConfigError::NoReviewers);
    }

    let mut seen = HashSet::new();
    for reviewer in &config.reviewers {
        if reviewer.value.trim().is_empty() {
            return Err(ConfigError::InvalidReviewer(reviewer.display_name.clone()));
        }
        if !seen.insert(reviewer.value.as_str()) {
            return Err(ConfigError::DuplicateReviewer(reviewer.value.clone()));
        }
    }

    Ok(())
}

/// Read the prefix from the environment. Empty values count as unset.
fn prefix_from_env() -> Option<String> {
    match env::var(PREFIX_ENV_VAR) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        Ok(_) => {
            debug!("{} is set but empty, ignoring", PREFIX_ENV_VAR);
            None
        }
        Err(_) => None,
    }
}
