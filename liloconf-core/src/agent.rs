// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Provides [`Agent`], the path based interface to a [`Document`].
//!
//! A host never touches the document tree directly. Instead, it issues one of three requests with a [`ConfPath`]:
//! - `read`, which returns a [`Value`] (or [`Value::Absent`] if there is nothing at the path)
//! - `write`, which returns whether the write did anything
//! - `dir`, which lists the names below a path
//!
//! The paths that are understood are as follows:
//!
//! | path                      | read                           | write                                        |
//! |---------------------------|--------------------------------|----------------------------------------------|
//! | `.`                       | `true`                         | save to the backing file, or a given path    |
//! | `.tostring`               | the serialized document        |                                              |
//! | `.fromstring`             |                                | parse a string instead of the backing file   |
//! | `.getfilename`            | the backing file path          | set the backing file path                    |
//! | `.reread`                 | parse the backing file again   |                                              |
//! | `.comment`                | the leading comment            | set the leading comment                      |
//! | `.sections`               | the section names              |                                              |
//! | `.sections.<name>`        | `true` if the section exists   | create the section, or remove it with `nil`  |
//! | `.sections.<name>.<opt>`  | an option of the section       | set an option, creating the section if needed|
//! | `.<opt>`                  | a global option                | set a global option                          |

use log::{debug, error, warn};
use thiserror::Error;

use crate::{
    ConfResult,
    agent::{command::Command, path::ConfPath, value::Value},
    config::{Document, options::check_option},
};

pub mod command;
pub mod path;
pub mod value;

/// The name of the pseudo entry that holds the sections.
const SECTIONS: &str = "sections";

/// Errors that may happen when a path cannot be resolved.
#[derive(Error, Debug)]
pub enum PathError {
    /// The path expression could not be parsed.
    #[error("\"{0}\" is not a valid path")]
    Parse(String),

    /// The path cannot be read.
    #[error("Attempt to read from {0}")]
    NoGetter(String),

    /// The path cannot be written to.
    #[error("Attempt to write to {0}")]
    NoSetter(String),

    /// The path has more components than anything in the document.
    #[error("{0} has too many components")]
    Depth(String),

    /// The value cannot be held by an option.
    #[error("Option \"{0}\" cannot hold a list")]
    UnsupportedValue(String),

    /// The value would not fit on a single line of the file.
    #[error("Value written to {0} contains a line break")]
    InvalidValue(String),

    /// The name cannot be written as an option name.
    #[error("\"{0}\" is not a valid option name")]
    InvalidName(String),

    /// A string was required for the path.
    #[error("Writing to {0} requires a string")]
    ExpectedString(String),
}

/// A path based interface for reading and editing a configuration.
pub trait Agent {
    /// Read the value at a path.
    ///
    /// # Errors
    ///
    /// May return an `Error` if the path cannot be read, or is deeper than the document.
    fn read(&mut self, path: &ConfPath) -> ConfResult<Value>;

    /// Write a value to a path, returning whether the write did anything.
    ///
    /// # Errors
    ///
    /// May return an `Error` if the path cannot be written to, the value is of the wrong kind, or the document
    /// could not be saved.
    fn write(&mut self, path: &ConfPath, value: &Value) -> ConfResult<bool>;

    /// List the names below a path.
    ///
    /// # Errors
    ///
    /// May return an `Error` if the path is deeper than the document.
    fn dir(&self, path: &ConfPath) -> ConfResult<Vec<String>>;
}

/// Get the string of a [`Value`] that is written to a path that requires one.
fn expect_str<'a>(path: &ConfPath, value: &'a Value) -> Result<&'a str, PathError> {
    value
        .as_str()
        .ok_or_else(|| PathError::ExpectedString(path.to_string()))
}

/// Checks that a section name can be written on its marker line.
fn check_section_name(path: &ConfPath, name: &str) -> Result<(), PathError> {
    if name.contains(['\n', '\r']) {
        Err(PathError::InvalidValue(path.to_string()))
    } else {
        Ok(())
    }
}

impl Agent for Document {
    fn read(&mut self, path: &ConfPath) -> ConfResult<Value> {
        debug!("Read {path}");
        let value = match Command::resolve(path) {
            Command::Root => Value::Bool(true),
            Command::ToString => Value::Str(self.serialize()),
            Command::FromString => return Err(PathError::NoGetter(path.to_string()).into()),
            Command::Filename => Value::Str(self.filename().to_string_lossy().into_owned()),
            Command::Reread => Value::Bool(self.reread().map_err(|e| error!("{e}")).is_ok()),
            Command::Comment => Value::Str(self.comment().to_owned()),
            Command::Sections => Value::List(self.section_names()),
            Command::Section { name, rest } => match rest {
                [] => self.section(name).map_or(Value::Absent, |_| Value::Bool(true)),
                [option] => self.section(name).map_or(Value::Absent, |x| x.read(option)),
                _ => return Err(PathError::Depth(path.to_string()).into()),
            },
            Command::Option([option]) => self.options().read(option),
            Command::Option(_) => return Err(PathError::Depth(path.to_string()).into()),
        };
        Ok(value)
    }

    fn write(&mut self, path: &ConfPath, value: &Value) -> ConfResult<bool> {
        debug!("Write {value} to {path}");
        match Command::resolve(path) {
            Command::Root => {
                let filename = match value {
                    Value::Absent => None,
                    value => Some(expect_str(path, value)?),
                };
                self.save(filename.map(std::path::Path::new))?;
                Ok(true)
            }
            Command::FromString => {
                self.parse_str(expect_str(path, value)?);
                Ok(true)
            }
            Command::Filename => {
                self.set_filename(expect_str(path, value)?);
                Ok(true)
            }
            Command::Comment => {
                let comment = match value {
                    Value::Absent => "",
                    value => expect_str(path, value)?,
                };
                self.set_comment(comment);
                Ok(true)
            }
            Command::ToString | Command::Reread | Command::Sections => {
                Err(PathError::NoSetter(path.to_string()).into())
            }
            Command::Section { name, rest: [] } => {
                if value.is_absent() {
                    Ok(self.remove_section(name))
                } else {
                    check_section_name(path, name)?;
                    self.section_or_insert(name);
                    Ok(true)
                }
            }
            Command::Section {
                name,
                rest: [option],
            } => {
                check_option(option, value)?;
                if value.is_removal() && self.section(name).is_none() {
                    warn!("Attempt to remove \"{option}\" from non-existent section \"{name}\"");
                    return Ok(false);
                }
                check_section_name(path, name)?;
                Ok(self.section_or_insert(name).write(option, value)?)
            }
            Command::Option([option]) => Ok(self.options_mut().write(option, value)?),
            Command::Section { .. } | Command::Option(_) => {
                Err(PathError::Depth(path.to_string()).into())
            }
        }
    }

    fn dir(&self, path: &ConfPath) -> ConfResult<Vec<String>> {
        debug!("Dir {path}");
        let list = match Command::resolve(path) {
            Command::Root => {
                let mut list: Vec<String> = self
                    .options()
                    .names()
                    .into_iter()
                    .filter(|x| x != SECTIONS)
                    .collect();
                list.push(SECTIONS.to_owned());
                list
            }
            Command::Sections => self.section_names(),
            Command::Section { name, rest: [] } => {
                self.section(name).map(|x| x.names()).unwrap_or_default()
            }
            Command::Section { .. } => return Err(PathError::Depth(path.to_string()).into()),
            Command::Option(option) if option.len() > 1 => {
                return Err(PathError::Depth(path.to_string()).into());
            }
            _ => Vec::new(),
        };
        Ok(list)
    }
}
