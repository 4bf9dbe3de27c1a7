// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Provides [`Document`], the in-memory model of a whole configuration file.
//!
//! Example configuration (`lilo.conf`):
//!
//! ```text
//! # Modified by YaST2. Last modification on Wed Jun 30 21:49:08 1993
//! # LILO configuration file
//!
//! boot=/dev/sda
//! # wait five seconds
//! timeout=50
//!
//!     image=/boot/vmlinuz
//!     label=linux
//!     append="quiet splash"
//! ```
//!
//! Example configuration (`menu.lst`):
//!
//! ```text
//! default 0
//! timeout 8
//!
//! title SUSE Linux
//!     root (hd0,1)
//!     kernel /boot/vmlinuz root=/dev/sda2
//! ```

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::{
    ConfResult,
    config::{
        line::{Line, format_comment},
        options::OptionSet,
        section::Section,
        types::Dialect,
    },
    system::{fs, time::ctime_now},
};

pub mod line;
pub mod options;
pub mod section;
pub mod types;

/// The first line of every written file. It is dropped when parsing, and written again with a new timestamp.
pub const HEADLINE: &str = "# Modified by YaST2. Last modification on";

/// The indentation of the options of a section.
pub const SECTION_INDENT: &str = "    ";

/// A parsed configuration file.
#[derive(Clone, Debug)]
pub struct Document {
    /// The path of the backing file.
    filename: PathBuf,

    /// The syntax of the file.
    dialect: Dialect,

    /// The comment at the top of the file, without comment markers.
    comment: String,

    /// The options that come before the first section.
    options: OptionSet,

    /// The sections, in file order.
    sections: Vec<Section>,
}

impl Document {
    /// Create a new, empty [`Document`] backed by a file.
    ///
    /// Nothing is read until [`Document::parse`] is called.
    pub fn new(filename: impl Into<PathBuf>, dialect: Dialect) -> Self {
        Self {
            filename: filename.into(),
            dialect,
            comment: String::new(),
            options: OptionSet::new(dialect),
            sections: Vec::new(),
        }
    }

    /// Parse the backing file, replacing the whole contents of the [`Document`].
    ///
    /// # Errors
    ///
    /// May return an `Error` if the backing file could not be read. The [`Document`] is left unchanged in that
    /// case.
    pub fn parse(&mut self) -> ConfResult<()> {
        let content = fs::read_to_string(&self.filename)?;
        self.parse_str(&content);
        Ok(())
    }

    /// Parse configuration text, replacing the whole contents of the [`Document`].
    ///
    /// This never fails. Lines that cannot be understood are kept as comments.
    pub fn parse_str(&mut self, content: &str) {
        self.options.clear();
        self.sections.clear();

        let mut buffer = String::new();
        let mut trail = true;
        let mut current: Option<usize> = None;

        // a trailing newline yields one last empty line, like reading a stream line by line does
        for (idx, src) in content.split('\n').enumerate() {
            if idx == 0 && src.starts_with(HEADLINE) {
                continue;
            }

            let mut line = Line::new(src, self.dialect);

            if !line.comment.is_empty() {
                if !buffer.is_empty() {
                    buffer.push('\n');
                }
                buffer.push_str(&line.comment);
            }
            line.comment.clone_from(&buffer);

            if trail && line.is_blank() {
                self.comment = std::mem::take(&mut buffer);
                trail = false;
                continue;
            }

            let consumed = if self.dialect.is_section_marker(&line.option) {
                let mut section = Section::new(self.dialect);
                section.process(&line);
                self.sections.push(section);
                current = Some(self.sections.len() - 1);
                true
            } else if let Some(section) = current.and_then(|x| self.sections.get_mut(x)) {
                section.process(&line)
            } else {
                self.options.process(&line)
            };

            if consumed {
                buffer.clear();
                trail = false;
            }
        }

        debug!(
            "Parsed {} options and {} sections",
            self.options.len(),
            self.sections.len()
        );
    }

    /// Parse the backing file again. See [`Document::parse`].
    ///
    /// # Errors
    ///
    /// May return an `Error` if the backing file could not be read.
    pub fn reread(&mut self) -> ConfResult<()> {
        self.parse()
    }

    /// Serialize the [`Document`] into configuration text, stamped with the current time.
    #[must_use = "Has no effect if the result is unused"]
    pub fn serialize(&self) -> String {
        self.serialize_with_stamp(&ctime_now())
    }

    /// Serialize the [`Document`] into configuration text, with a given timestamp in the first line.
    ///
    /// The leading comment is written right after the first line, followed by an empty line so that it is parsed
    /// back as the leading comment. An empty leading comment is not written at all.
    #[must_use = "Has no effect if the result is unused"]
    pub fn serialize_with_stamp(&self, stamp: &str) -> String {
        let mut out = format!("{HEADLINE} {stamp}\n");

        if !self.comment.is_empty() {
            for comment in format_comment(&self.comment, "") {
                out.push_str(&comment);
                out.push('\n');
            }
            out.push('\n');
        }

        self.options.serialize(&mut out, "");

        for section in &self.sections {
            out.push('\n');
            section.serialize(&mut out, SECTION_INDENT);
        }

        out
    }

    /// Write the [`Document`] to a file, fully replacing its contents.
    ///
    /// If no filename is given, the backing file is used.
    ///
    /// # Errors
    ///
    /// May return an `Error` if the file could not be opened for writing.
    pub fn save(&self, filename: Option<&Path>) -> ConfResult<()> {
        let path = filename.unwrap_or(&self.filename);
        debug!("Saving configuration to \"{}\"", path.display());
        fs::write(path, &self.serialize())?;
        Ok(())
    }

    /// Get the path of the backing file.
    #[must_use = "Has no effect if the result is unused"]
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Set the path of the backing file. Nothing is read or written.
    pub fn set_filename(&mut self, filename: impl Into<PathBuf>) {
        self.filename = filename.into();
    }

    /// Get the dialect of the [`Document`].
    #[must_use = "Has no effect if the result is unused"]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Get the leading comment of the [`Document`].
    #[must_use = "Has no effect if the result is unused"]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Set the leading comment of the [`Document`].
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    /// Get a reference to the options outside of any section.
    #[must_use = "Has no effect if the result is unused"]
    pub const fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Get a mutable reference to the options outside of any section.
    pub const fn options_mut(&mut self) -> &mut OptionSet {
        &mut self.options
    }

    /// Get every section, in order.
    #[must_use = "Has no effect if the result is unused"]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Get the names of every section, in order.
    #[must_use = "Has no effect if the result is unused"]
    pub fn section_names(&self) -> Vec<String> {
        self.sections.iter().map(Section::name).collect()
    }

    /// Find the position of the first section with a given name.
    ///
    /// For LILO, blanks in the name are replaced with underscores before comparing.
    #[must_use = "Has no effect if the result is unused"]
    pub fn section_position(&self, name: &str) -> Option<usize> {
        let name = self.dialect.normalize_name(name);
        self.sections.iter().position(|x| x.name() == name)
    }

    /// Get the first section with a given name.
    #[must_use = "Has no effect if the result is unused"]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.section_position(name).map(|x| &self.sections[x])
    }

    /// Get the first section with a given name, creating it at the end if there is none.
    ///
    /// A new section only holds the option that names it. See [`Section::with_name`].
    pub fn section_or_insert(&mut self, name: &str) -> &mut Section {
        let idx = self.section_position(name).unwrap_or_else(|| {
            debug!("Creating new section \"{name}\"");
            self.sections.push(Section::with_name(self.dialect, name));
            self.sections.len() - 1
        });
        &mut self.sections[idx]
    }

    /// Remove the first section with a given name. Returns `false` if there was no such section.
    pub fn remove_section(&mut self, name: &str) -> bool {
        if let Some(idx) = self.section_position(name) {
            self.sections.remove(idx);
            true
        } else {
            warn!("Attempt to remove non-existent section \"{name}\"");
            false
        }
    }
}
