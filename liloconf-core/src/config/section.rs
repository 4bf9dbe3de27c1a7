// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Provides [`Section`], a single boot entry of a configuration file.
//!
//! A section starts at its marker line (`image=` or `other=` in `lilo.conf`, `title` in `menu.lst`) and owns every
//! option after it up to the next marker line.

use crate::{
    agent::{PathError, value::Value},
    config::{
        line::Line,
        options::{OptionEntry, OptionSet, check_option},
        types::Dialect,
    },
};

/// A boot entry.
#[derive(Clone, Debug)]
pub struct Section {
    /// The dialect of the section, which decides how it is named.
    dialect: Dialect,

    /// The options of the section, starting with its marker option.
    options: OptionSet,
}

impl Section {
    /// Create a new, empty [`Section`].
    #[must_use = "Has no effect if the result is unused"]
    pub const fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            options: OptionSet::new(dialect),
        }
    }

    /// Create a new [`Section`] with a single option that names it.
    ///
    /// For GRUB this is a `title` option. For LILO this is a `label` option, with blanks in the name replaced with
    /// underscores.
    ///
    /// A `label` does not start a section in `lilo.conf`, so a LILO section created this way only survives being
    /// written out and parsed again once it has an `image` or `other` option. Until then, its `label` is parsed as
    /// part of the section before it.
    #[must_use = "Has no effect if the result is unused"]
    pub fn with_name(dialect: Dialect, name: &str) -> Self {
        let mut section = Self::new(dialect);
        section.options.push(OptionEntry::new(
            dialect.name_key(),
            Some(dialect.normalize_name(name)),
        ));
        section
    }

    /// Append the option on a classified [`Line`] to the section.
    ///
    /// Returns `false` if there was no option on the line.
    pub fn process(&mut self, line: &Line) -> bool {
        self.options.process(line)
    }

    /// Get the name of the section, which is how it is addressed in a path.
    ///
    /// GRUB sections are named by their `title`. LILO sections are named by their `label`, with blanks replaced
    /// with underscores. A LILO section without a `label` falls back to the file name of its `image` or `other`
    /// option, which is what LILO itself does.
    #[must_use = "Has no effect if the result is unused"]
    pub fn name(&self) -> String {
        let named = self
            .options
            .get(self.dialect.name_key())
            .and_then(|x| x.value.as_deref());

        match (self.dialect, named) {
            (dialect, Some(name)) => dialect.normalize_name(name),
            (Dialect::Grub, None) => String::new(),
            (Dialect::Lilo, None) => self
                .options
                .iter()
                .find(|x| self.dialect.is_section_marker(&x.name))
                .and_then(|x| x.value.as_deref())
                .map(|x| x.rsplit('/').next().unwrap_or(x).to_owned())
                .unwrap_or_default(),
        }
    }

    /// Read the value of an option of the section.
    #[must_use = "Has no effect if the result is unused"]
    pub fn read(&self, name: &str) -> Value {
        self.options.read(name)
    }

    /// Write the value of an option of the section. See [`OptionSet::write`].
    ///
    /// A marker option written to a section that has none yet is put first, so that the section still starts at
    /// its marker line when the file is parsed again.
    ///
    /// # Errors
    ///
    /// May return an `Error` if the value cannot be held by an option.
    pub fn write(&mut self, name: &str, value: &Value) -> Result<bool, PathError> {
        check_option(name, value)?;
        if let Value::Str(s) = value
            && !s.is_empty()
            && self.dialect.is_section_marker(name)
            && !self.has_marker()
        {
            self.options
                .insert(0, OptionEntry::new(name, Some(s.clone())));
            return Ok(true);
        }
        self.options.write(name, value)
    }

    /// Checks if any option of the section is a marker option.
    #[must_use = "Has no effect if the result is unused"]
    pub fn has_marker(&self) -> bool {
        self.options
            .iter()
            .any(|x| self.dialect.is_section_marker(&x.name))
    }

    /// Get the names of every option of the section, in order.
    #[must_use = "Has no effect if the result is unused"]
    pub fn names(&self) -> Vec<String> {
        self.options.names()
    }

    /// Get a reference to the options of the section.
    #[must_use = "Has no effect if the result is unused"]
    pub const fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Write the section to `out`, with every line prefixed with `indent`.
    pub fn serialize(&self, out: &mut String, indent: &str) {
        self.options.serialize(out, indent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(dialect: Dialect, lines: &[&str]) -> Section {
        let mut section = Section::new(dialect);
        for line in lines {
            section.process(&Line::new(line, dialect));
        }
        section
    }

    #[test]
    fn test_grub_name() {
        let section = section(Dialect::Grub, &["title SUSE Linux 10", "root (hd0,1)"]);
        assert_eq!(section.name(), "SUSE Linux 10");
    }

    #[test]
    fn test_lilo_name() {
        let section = section(
            Dialect::Lilo,
            &["image=/boot/vmlinuz", "label=\"SUSE Linux\"", "read-only"],
        );
        assert_eq!(section.name(), "SUSE_Linux");
    }

    #[test]
    fn test_lilo_name_without_label() {
        let section = section(Dialect::Lilo, &["image=/boot/vmlinuz-6.1", "root=/dev/sda2"]);
        assert_eq!(section.name(), "vmlinuz-6.1");
    }

    #[test]
    fn test_name_follows_writes() -> Result<(), PathError> {
        let mut section = section(Dialect::Lilo, &["image=/boot/vmlinuz", "label=linux"]);
        section.write("label", &Value::from("failsafe"))?;
        assert_eq!(section.name(), "failsafe");
        Ok(())
    }

    #[test]
    fn test_marker_goes_first() -> Result<(), PathError> {
        let mut section = Section::with_name(Dialect::Lilo, "linux");
        assert!(!section.has_marker());
        section.write("root", &Value::from("/dev/sda2"))?;
        section.write("image", &Value::from("/boot/vmlinuz"))?;
        assert!(section.has_marker());
        assert_eq!(section.names(), ["image", "label", "root"]);

        section.write("image", &Value::from("/boot/vmlinuz.new"))?;
        assert_eq!(section.names(), ["image", "label", "root"]);
        assert_eq!(section.read("image"), Value::from("/boot/vmlinuz.new"));
        Ok(())
    }

    #[test]
    fn test_marker_on_one_line() {
        let mut section = Section::with_name(Dialect::Lilo, "linux");
        assert!(matches!(
            section.write("image", &Value::from("/boot/vmlinuz\nboot=/dev/sdb")),
            Err(PathError::InvalidValue(_))
        ));
        assert!(!section.has_marker());
        assert_eq!(section.names(), ["label"]);
    }

    #[test]
    fn test_with_name() {
        let section = Section::with_name(Dialect::Lilo, "New Entry");
        assert_eq!(section.names(), ["label"]);
        assert_eq!(section.read("label"), Value::from("New_Entry"));
        assert_eq!(section.name(), "New_Entry");

        let section = Section::with_name(Dialect::Grub, "New Entry");
        assert_eq!(section.read("title"), Value::from("New Entry"));
    }

    #[test]
    fn test_serialize() {
        let section = section(Dialect::Grub, &["title Linux", "kernel /vmlinuz"]);
        let mut out = String::new();
        section.serialize(&mut out, "    ");
        assert_eq!(out, "    title Linux\n    kernel /vmlinuz\n");
    }
}
