// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Provides [`ConfError`], which encapsulates other errors

use thiserror::Error;

/// An `Error` resulting from the library.
#[derive(Error, Debug)]
pub enum ConfError {
    /// An error occurred while reading or writing the backing file.
    #[error("Filesystem Error: {0}")]
    FsError(#[from] crate::system::fs::FsError),

    /// A path expression could not be resolved against the document.
    #[error("Path Error: {0}")]
    PathError(#[from] crate::agent::PathError),

    /// A dialect name was not recognized.
    #[error("Type Error: {0}")]
    TypeError(#[from] crate::config::types::TypeError),
}
