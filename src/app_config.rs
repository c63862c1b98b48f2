use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{ConvertError, Result};
use crate::text_decoding::DecodePolicy;

/// Application configuration module
/// Resolves where files are read from and moved to, and how they are decoded.
/// Represents the configuration of a single run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Directory scanned for source files (non-recursive)
    pub source_dir: PathBuf,

    /// Directory the converted files end up in
    pub destination_dir: PathBuf,

    /// Suffix a file name must end with to be converted (case-insensitive)
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Suffix appended to the full source name to form the output name
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,

    /// Handling of invalid byte sequences in source files
    #[serde(default)]
    pub decode_policy: DecodePolicy,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the `log` facade
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_extension() -> String {
    ".xaml".to_string()
}

fn default_output_suffix() -> String {
    ".txt".to_string()
}

/// Name of the folder under the home directory that receives the output
pub const DESKTOP_DIR_NAME: &str = "Desktop";

impl Config {
    /// Create a configuration for explicit directories with default naming rules
    pub fn new<P1: AsRef<Path>, P2: AsRef<Path>>(source_dir: P1, destination_dir: P2) -> Self {
        Self {
            source_dir: source_dir.as_ref().to_path_buf(),
            destination_dir: destination_dir.as_ref().to_path_buf(),
            extension: default_extension(),
            output_suffix: default_output_suffix(),
            decode_policy: DecodePolicy::default(),
            log_level: LogLevel::default(),
        }
    }

    /// Resolve the working directory and `<home>/Desktop` of the running user
    pub fn from_environment() -> Result<Self> {
        Self::resolve(None, None)
    }

    /// Use the given directories, falling back to the environment only for
    /// the ones left unset
    pub fn resolve(source_dir: Option<PathBuf>, destination_dir: Option<PathBuf>) -> Result<Self> {
        let source_dir = match source_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|source| ConvertError::ListDirectory {
                path: PathBuf::from("."),
                source,
            })?,
        };
        let destination_dir = match destination_dir {
            Some(dir) => dir,
            None => desktop_dir()?,
        };

        Ok(Self::new(source_dir, destination_dir))
    }

    pub fn with_decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.decode_policy = policy;
        self
    }

    /// Check the naming rules can produce a distinct output name
    pub fn validate(&self) -> Result<()> {
        if !self.extension.starts_with('.') || self.extension.len() < 2 {
            return Err(ConvertError::InvalidConfig(format!(
                "extension must start with '.' and name a suffix, got {:?}",
                self.extension
            )));
        }

        if self.output_suffix.is_empty() {
            return Err(ConvertError::InvalidConfig(
                "output suffix cannot be empty".to_string(),
            ));
        }

        if self.output_suffix.contains(['/', '\\']) {
            return Err(ConvertError::InvalidConfig(format!(
                "output suffix cannot contain a path separator, got {:?}",
                self.output_suffix
            )));
        }

        Ok(())
    }
}

/// `<home>/Desktop`, derived from the home directory rather than XDG settings
pub fn desktop_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DESKTOP_DIR_NAME))
        .ok_or(ConvertError::HomeDirUnavailable)
}
