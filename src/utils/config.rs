// src/utils/config.rs
use crate::utils::error::AppError;

/// Characters of leading text handed to the entity model.
pub const DEFAULT_NAME_WINDOW: usize = 200;
/// Largest source document accepted, in bytes (10 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
/// Characters of leading text kept as the résumé summary.
pub const DEFAULT_SUMMARY_CHARS: usize = 500;

const NAME_WINDOW_VAR: &str = "RESUME_NAME_WINDOW";
const MAX_FILE_SIZE_VAR: &str = "RESUME_MAX_FILE_SIZE";
const SUMMARY_CHARS_VAR: &str = "RESUME_SUMMARY_CHARS";

/// Tunables for a parsing run.
///
/// Resolved in three layers: compiled defaults, then environment variables,
/// then command-line flags (applied by the caller through [`ParserConfig::with_overrides`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub name_window: usize,
    pub max_file_size: u64,
    pub summary_chars: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            name_window: DEFAULT_NAME_WINDOW,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            summary_chars: DEFAULT_SUMMARY_CHARS,
        }
    }
}

impl ParserConfig {
    /// Reads overrides from the environment. Unset variables keep their
    /// defaults; set but unparsable ones are a configuration error.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            name_window: parse_var(&lookup, NAME_WINDOW_VAR)?.unwrap_or(defaults.name_window),
            max_file_size: parse_var(&lookup, MAX_FILE_SIZE_VAR)?.unwrap_or(defaults.max_file_size),
            summary_chars: parse_var(&lookup, SUMMARY_CHARS_VAR)?.unwrap_or(defaults.summary_chars),
        })
    }

    /// Applies command-line values on top of this configuration.
    pub fn with_overrides(
        mut self,
        name_window: Option<usize>,
        max_file_size: Option<u64>,
        summary_chars: Option<usize>,
    ) -> Self {
        if let Some(window) = name_window {
            tracing::debug!("Setting name window to {} from command-line argument", window);
            self.name_window = window;
        }
        if let Some(size) = max_file_size {
            tracing::debug!("Setting max file size to {} from command-line argument", size);
            self.max_file_size = size;
        }
        if let Some(chars) = summary_chars {
            tracing::debug!("Setting summary length to {} from command-line argument", chars);
            self.summary_chars = chars;
        }
        self
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::Config(format!("{} must be a non-negative integer, got '{}'", key, raw))),
    }
}
