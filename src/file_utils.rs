use log::{debug, warn};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::{ConvertError, Result};

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    /// True when the final component of `path` ends with `suffix`, ignoring ASCII case
    pub fn has_suffix_ignore_case<P: AsRef<Path>>(path: P, suffix: &str) -> bool {
        let Some(name) = path.as_ref().file_name() else {
            return false;
        };
        let name = name.to_string_lossy();
        let name = name.as_bytes();
        let suffix = suffix.as_bytes();

        name.len() >= suffix.len() && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
    }

    /// Find regular files directly inside `dir` whose name ends with `suffix`.
    ///
    /// Subdirectories are never descended into and entries come back in
    /// directory-listing order. Matching entries that do not resolve to a
    /// regular file (directories, broken symlinks, sockets, fifos) are skipped.
    pub fn find_files_shallow<P: AsRef<Path>>(dir: P, suffix: &str) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let mut result = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| ConvertError::ListDirectory {
                path: dir.to_path_buf(),
                source: e.into(),
            })?;
            let path = entry.path();

            if !Self::has_suffix_ignore_case(path, suffix) {
                continue;
            }

            // Symlinks count when they resolve to a regular file
            if !path.is_file() {
                if entry.file_type().is_dir() {
                    debug!("Skipping directory: {:?}", path);
                } else {
                    warn!("Skipping {:?}: not a regular file or a link to one", path);
                }
                continue;
            }

            result.push(path.to_path_buf());
        }

        Ok(result)
    }

    // @generates: Output file name with `suffix` appended to the full name
    pub fn derive_output_name<P: AsRef<Path>>(source: P, suffix: &str) -> Option<OsString> {
        let mut name = source.as_ref().file_name()?.to_os_string();
        name.push(suffix);
        Some(name)
    }

    /// Read a file's raw bytes
    pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
        fs::read(&path).map_err(|source| ConvertError::ReadSource {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// Write a string to a file, replacing any existing content
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        fs::write(&path, content).map_err(|source| ConvertError::WriteOutput {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// Move a file, overwriting `to` if it exists.
    ///
    /// Falls back to copy and delete when the two paths live on different
    /// file systems. The target directory must already exist.
    pub fn move_file<P1: AsRef<Path>, P2: AsRef<Path>>(from: P1, to: P2) -> Result<()> {
        let from = from.as_ref();
        let to = to.as_ref();
        let move_error = |source: io::Error| ConvertError::MoveOutput {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        };

        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
                debug!("Rename across devices, copying {:?} to {:?}", from, to);
                fs::copy(from, to).map_err(move_error)?;
                fs::remove_file(from).map_err(move_error)
            }
            Err(e) => Err(move_error(e)),
        }
    }
}
