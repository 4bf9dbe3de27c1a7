// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Provides [`OptionSet`], an ordered list of options with their comments.

use log::debug;

use crate::{
    agent::{PathError, value::Value},
    config::{
        line::{Line, format_comment, format_option, is_valid_key},
        types::Dialect,
    },
};

/// Checks that an option can be written to a file as a single line.
///
/// Removals always pass. Otherwise, the name must be a valid option name, a string value must not contain line
/// breaks, and the value must not be a list.
///
/// # Errors
///
/// May return an `Error` if the name or the value cannot be written.
pub fn check_option(name: &str, value: &Value) -> Result<(), PathError> {
    if value.is_removal() {
        return Ok(());
    }
    if !is_valid_key(name) {
        return Err(PathError::InvalidName(name.to_owned()));
    }
    match value {
        Value::Str(s) if s.contains(['\n', '\r']) => Err(PathError::InvalidValue(name.to_owned())),
        Value::List(_) => Err(PathError::UnsupportedValue(name.to_owned())),
        _ => Ok(()),
    }
}

/// A single option, such as `boot=/dev/sda`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionEntry {
    /// The name of the option.
    pub name: String,

    /// The value of the option, or [`None`] for a bare directive.
    pub value: Option<String>,

    /// The comment lines that are written before the option, without comment markers.
    pub comment: String,
}

impl OptionEntry {
    /// Create a new [`OptionEntry`] without a comment.
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
            comment: String::new(),
        }
    }
}

/// An ordered set of options.
///
/// The order in which options were added is the order in which they are written. Names are not required to be
/// unique, though every lookup by name will only ever see the first match.
#[derive(Clone, Debug)]
pub struct OptionSet {
    /// The dialect that the options are written in.
    dialect: Dialect,

    /// The options, in file order.
    order: Vec<OptionEntry>,
}

impl OptionSet {
    /// Create a new, empty [`OptionSet`].
    #[must_use = "Has no effect if the result is unused"]
    pub const fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            order: Vec::new(),
        }
    }

    /// Append the option on a classified [`Line`], together with its comment.
    ///
    /// Returns `false` if there was no option on the line, in which case nothing is added.
    pub fn process(&mut self, line: &Line) -> bool {
        if !line.is_option() {
            return false;
        }

        self.order.push(OptionEntry {
            name: line.option.clone(),
            value: line.value.clone(),
            comment: line.comment.clone(),
        });
        true
    }

    /// Get the first option with a given name.
    #[must_use = "Has no effect if the result is unused"]
    pub fn get(&self, name: &str) -> Option<&OptionEntry> {
        self.order.iter().find(|x| x.name == name)
    }

    /// Get the value of the first option with a given name as a [`Value`].
    ///
    /// A bare directive is read as `true`. A missing option is read as [`Value::Absent`].
    #[must_use = "Has no effect if the result is unused"]
    pub fn read(&self, name: &str) -> Value {
        match self.get(name) {
            Some(OptionEntry { value: Some(v), .. }) => Value::Str(v.clone()),
            Some(OptionEntry { value: None, .. }) => Value::Bool(true),
            None => Value::Absent,
        }
    }

    /// Write a [`Value`] to the first option with a given name.
    ///
    /// An absent value, an empty string, or `false` removes the option, returning `false` if there was nothing
    /// to remove. `true` makes the option a bare directive. Any other value replaces the value of the option in
    /// place, or appends a new option if there is none.
    ///
    /// # Errors
    ///
    /// May return an `Error` if the value cannot be written as a single option line. See [`check_option`].
    pub fn write(&mut self, name: &str, value: &Value) -> Result<bool, PathError> {
        check_option(name, value)?;
        match value {
            Value::Absent | Value::Bool(false) => Ok(self.remove(name)),
            Value::Str(s) if s.is_empty() => Ok(self.remove(name)),
            Value::Bool(true) => {
                self.set(name, None);
                Ok(true)
            }
            Value::Str(s) => {
                self.set(name, Some(s.clone()));
                Ok(true)
            }
            Value::List(_) => Err(PathError::UnsupportedValue(name.to_owned())),
        }
    }

    /// Set the value of the first option with a given name, or append a new option if there is none.
    ///
    /// The comment and the position of an existing option are kept.
    pub fn set(&mut self, name: &str, value: Option<String>) {
        if let Some(entry) = self.order.iter_mut().find(|x| x.name == name) {
            entry.value = value;
        } else {
            debug!("Appending new option \"{name}\"");
            self.order.push(OptionEntry::new(name, value));
        }
    }

    /// Remove the first option with a given name. Returns `false` if there was no such option.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.order.iter().position(|x| x.name == name) {
            Some(idx) => {
                self.order.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Insert an option at a position, shifting every option after it.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is greater than the amount of options in the set.
    pub fn insert(&mut self, idx: usize, entry: OptionEntry) {
        self.order.insert(idx, entry);
    }

    /// Push an option to the end of the set.
    pub fn push(&mut self, entry: OptionEntry) {
        self.order.push(entry);
    }

    /// Get the names of every option in order, including duplicates.
    #[must_use = "Has no effect if the result is unused"]
    pub fn names(&self) -> Vec<String> {
        self.order.iter().map(|x| x.name.clone()).collect()
    }

    /// Get an iterator over every option in order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionEntry> {
        self.order.iter()
    }

    /// Get the amount of options in the set.
    #[must_use = "Has no effect if the result is unused"]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Checks if there are no options in the set.
    #[must_use = "Has no effect if the result is unused"]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Remove every option from the set.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    /// Write every option to `out`, each preceded by its comment lines, and each line prefixed with `indent`.
    pub fn serialize(&self, out: &mut String, indent: &str) {
        for entry in &self.order {
            for comment in format_comment(&entry.comment, indent) {
                out.push_str(&comment);
                out.push('\n');
            }
            out.push_str(indent);
            out.push_str(&format_option(
                self.dialect,
                &entry.name,
                entry.value.as_deref(),
            ));
            out.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn lilo_set(lines: &[&str]) -> OptionSet {
        let mut set = OptionSet::new(Dialect::Lilo);
        for line in lines {
            set.process(&Line::new(line, Dialect::Lilo));
        }
        set
    }

    #[test]
    fn test_process() {
        let mut set = OptionSet::new(Dialect::Lilo);
        assert!(set.process(&Line::new("boot=/dev/sda", Dialect::Lilo)));
        assert!(!set.process(&Line::new("# comment", Dialect::Lilo)));
        assert!(!set.process(&Line::new("", Dialect::Lilo)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_read() {
        let set = lilo_set(&["boot=/dev/sda", "compact", "boot=/dev/sdb"]);
        assert_eq!(set.read("boot"), Value::from("/dev/sda"));
        assert_eq!(set.read("compact"), Value::Bool(true));
        assert_eq!(set.read("prompt"), Value::Absent);
    }

    #[test]
    fn test_write_keeps_position_and_comment() -> Result<(), PathError> {
        let mut line = Line::new("timeout=50", Dialect::Lilo);
        line.comment = " wait five seconds".to_owned();
        let mut set = lilo_set(&["boot=/dev/sda"]);
        set.process(&line);
        set.process(&Line::new("prompt", Dialect::Lilo));

        assert!(set.write("timeout", &Value::from("80"))?);
        assert_eq!(set.names(), ["boot", "timeout", "prompt"]);
        let entry = set.get("timeout").expect("Option should exist in test");
        assert_eq!(entry.value.as_deref(), Some("80"));
        assert_eq!(entry.comment, " wait five seconds");
        Ok(())
    }

    #[test]
    fn test_write_appends() -> Result<(), PathError> {
        let mut set = lilo_set(&["boot=/dev/sda"]);
        assert!(set.write("default", &Value::from("linux"))?);
        assert!(set.write("lba32", &Value::Bool(true))?);
        assert_eq!(set.names(), ["boot", "default", "lba32"]);
        assert_eq!(set.read("lba32"), Value::Bool(true));
        Ok(())
    }

    #[test]
    fn test_write_removes() -> Result<(), PathError> {
        let mut set = lilo_set(&["boot=/dev/sda", "prompt", "boot=/dev/sdb"]);
        assert!(set.write("boot", &Value::Absent)?);
        assert_eq!(set.names(), ["prompt", "boot"]);
        assert!(set.write("prompt", &Value::Bool(false))?);
        assert!(set.write("boot", &Value::from(""))?);
        assert!(set.is_empty());
        assert!(!set.write("boot", &Value::Absent)?);
        Ok(())
    }

    #[test]
    fn test_write_list() {
        let mut set = lilo_set(&[]);
        assert!(set.write("boot", &Value::List(Vec::new())).is_err());
    }

    #[test]
    fn test_write_single_line() {
        let mut set = lilo_set(&["timeout=50"]);
        assert!(matches!(
            set.write("timeout", &Value::from("5\nimage=/boot/evil")),
            Err(PathError::InvalidValue(_))
        ));
        assert!(matches!(
            set.write("timeout", &Value::from("5\r")),
            Err(PathError::InvalidValue(_))
        ));
        assert!(matches!(
            set.write("bad name", &Value::from("x")),
            Err(PathError::InvalidName(_))
        ));
        assert!(matches!(set.write("#boot", &Value::Bool(true)), Err(PathError::InvalidName(_))));
        assert_eq!(set.read("timeout"), Value::from("50"));
        assert_eq!(set.names(), ["timeout"]);
    }

    #[test]
    fn test_serialize() {
        let mut line = Line::new("append=\"quiet splash\"", Dialect::Lilo);
        line.comment = " one\n two".to_owned();
        let mut set = OptionSet::new(Dialect::Lilo);
        set.process(&line);
        set.process(&Line::new("read-only", Dialect::Lilo));

        let mut out = String::new();
        set.serialize(&mut out, "  ");
        assert_eq!(out, "  # one\n  # two\n  append=\"quiet splash\"\n  read-only\n");
    }

    proptest! {
        #[test]
        fn new_names_are_appended_last(names in prop::collection::vec("[a-z]{1,8}", 1..16)) {
            let mut set = OptionSet::new(Dialect::Grub);
            for name in &names {
                let existing = set.names();
                set.set(name, Some("x".to_owned()));
                let names = set.names();
                if existing.contains(name) {
                    prop_assert_eq!(names, existing);
                } else {
                    prop_assert_eq!(names.last(), Some(name));
                }
            }
        }
    }
}
