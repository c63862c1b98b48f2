use log::{debug, info};
use std::path::PathBuf;

use crate::app_config::Config;
use crate::errors::{ConvertError, Result};
use crate::file_utils::FileManager;
use crate::text_decoding;

// @module: Application controller for xaml-to-text conversion

/// Line printed to stdout once every matching file has been handled
pub const COMPLETION_MESSAGE: &str = "✅ All .xaml files copied to .txt and moved to Desktop.";

/// Outcome of converting one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes_written: usize,
    pub invalid_sequences: usize,
}

/// Files converted during one run, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub files: Vec<ConvertedFile>,
}

impl ConversionSummary {
    pub fn converted_count(&self) -> usize {
        self.files.len()
    }

    // @returns: Number of files that needed lossy decoding
    pub fn lossy_count(&self) -> usize {
        self.files.iter().filter(|f| f.invalid_sequences > 0).count()
    }
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert every matching file in the source directory.
    ///
    /// Stops at the first I/O failure. Files moved before the failure stay
    /// in the destination directory.
    pub fn run(&self) -> Result<ConversionSummary> {
        let source_dir = &self.config.source_dir;
        info!("Scanning {:?} for *{} files", source_dir, self.config.extension);

        let sources = FileManager::find_files_shallow(source_dir, &self.config.extension)?;
        if sources.is_empty() {
            info!("No matching files found");
        }

        let mut summary = ConversionSummary::default();
        for source in sources {
            let converted = self.convert_file(source)?;
            summary.files.push(converted);
        }

        info!(
            "Converted {} file(s), {} with invalid byte sequences",
            summary.converted_count(),
            summary.lossy_count()
        );

        Ok(summary)
    }

    /// Read, write next to the source, then move to the destination
    fn convert_file(&self, source: PathBuf) -> Result<ConvertedFile> {
        let output_name = FileManager::derive_output_name(&source, &self.config.output_suffix)
            .ok_or_else(|| ConvertError::InvalidConfig(format!("source path has no file name: {:?}", source)))?;
        let staged = self.config.source_dir.join(&output_name);
        let destination = self.config.destination_dir.join(&output_name);

        let bytes = FileManager::read_bytes(&source)?;
        let decoded = text_decoding::decode(&bytes, self.config.decode_policy);
        if !decoded.is_lossless() {
            debug!(
                "{:?}: {} invalid byte sequence(s) handled with policy '{}'",
                source, decoded.invalid_sequences, self.config.decode_policy
            );
        }

        FileManager::write_to_file(&staged, &decoded.text)?;
        debug!("Wrote {:?}", staged);

        if destination.exists() {
            debug!("Overwriting existing file {:?}", destination);
        }
        FileManager::move_file(&staged, &destination)?;
        info!("Moved {:?} -> {:?}", staged, destination);

        Ok(ConvertedFile {
            source,
            destination,
            bytes_written: decoded.text.len(),
            invalid_sequences: decoded.invalid_sequences,
        })
    }
}
