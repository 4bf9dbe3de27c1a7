// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Filesystem helper functions for other modules.
//!
//! The document only ever needs two things from the filesystem: the whole contents of a file as text, and the
//! ability to replace the whole contents of a file. Files are never patched in place.
//!
//! Any handle opened here is scoped to a single call and is closed on every return path.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::error;
use thiserror::Error;

/// An error that may result from performing filesystem operations
#[derive(Error, Debug)]
pub enum FsError {
    /// A file could not be opened or read.
    #[error("Failed to read file \"{}\"", path.display())]
    Read {
        /// The path that was attempted to be read.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A file could not be opened for writing, or the content could not be written.
    #[error("Cannot open output file \"{}\" for writing", path.display())]
    Write {
        /// The path that was attempted to be written.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Read the entire contents of a file as text.
///
/// Invalid UTF-8 sequences are replaced rather than rejected, so that a file with stray bytes in a comment can still
/// be loaded and edited.
///
/// # Errors
///
/// May return an `Error` if the file does not exist, or could not be opened or read.
pub fn read_to_string(path: &Path) -> Result<String, FsError> {
    let bytes = fs::read(path).map_err(|source| FsError::Read {
        path: path.to_owned(),
        source,
    })?;

    Ok(String::from_utf8(bytes)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}

/// Overwrite a file with the given text, creating it if it does not exist.
///
/// # Errors
///
/// May return an `Error` if the file could not be created or written to.
pub fn write(path: &Path, content: &str) -> Result<(), FsError> {
    fs::write(path, content).map_err(|source| {
        error!("Failed to write \"{}\": {source}", path.display());
        FsError::Write {
            path: path.to_owned(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() -> Result<(), FsError> {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory in test");
        let path = dir.path().join("lilo.conf");
        write(&path, "boot=/dev/sda\n")?;
        assert_eq!(read_to_string(&path)?, "boot=/dev/sda\n");
        Ok(())
    }

    #[test]
    fn test_invalid_utf8() -> Result<(), FsError> {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory in test");
        let path = dir.path().join("menu.lst");
        fs::write(&path, b"# caf\xe9\ntimeout 5\n").expect("Failed to write file in test");
        let content = read_to_string(&path)?;
        assert!(content.ends_with("timeout 5\n"));
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory in test");
        let path = dir.path().join("does-not-exist");
        assert!(matches!(read_to_string(&path), Err(FsError::Read { .. })));
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory in test");
        let path = dir.path().join("missing").join("lilo.conf");
        assert!(matches!(write(&path, ""), Err(FsError::Write { .. })));
    }
}
