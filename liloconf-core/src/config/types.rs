// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Type definitions shared by the parser and the serializer.
//!
//! At the moment, this includes the following type definitions:
//! - [`Dialect`] (which of the two supported configuration syntaxes a document uses)

use core::{fmt, str::FromStr};

use thiserror::Error;

/// Errors that may happen from invalid inputs to the respective constructors.
#[derive(Error, Debug)]
pub enum TypeError {
    /// The dialect was not one of the supported dialects.
    #[error("\"{0}\" is not a supported dialect (expected \"lilo\" or \"grub\")")]
    Dialect(String),
}

/// The syntax of a configuration file.
///
/// The dialect decides how a line is split into a key and a value, how a value is written back out, which keys
/// start a new section, and how a section is named.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `lilo.conf` syntax, with `key=value` pairs and `image=`/`other=` sections named by their `label`.
    #[default]
    Lilo,

    /// GRUB legacy `menu.lst` syntax, with `key value` pairs and sections started and named by `title`.
    Grub,
}

impl Dialect {
    /// Convert a [`Dialect`] into an [`&str`].
    #[must_use = "Has no effect if the result is unused"]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lilo => "lilo",
            Self::Grub => "grub",
        }
    }

    /// Checks if an option name starts a new section in this dialect.
    #[must_use = "Has no effect if the result is unused"]
    pub fn is_section_marker(self, name: &str) -> bool {
        match self {
            Self::Grub => name == "title",
            Self::Lilo => matches!(name, "image" | "other"),
        }
    }

    /// The option whose value names a section.
    #[must_use = "Has no effect if the result is unused"]
    pub const fn name_key(self) -> &'static str {
        match self {
            Self::Grub => "title",
            Self::Lilo => "label",
        }
    }

    /// Normalize a section name as it would be stored in a file of this dialect.
    ///
    /// Labels in `lilo.conf` cannot contain blanks, so they are replaced with underscores. GRUB titles are kept
    /// verbatim.
    #[must_use = "Has no effect if the result is unused"]
    pub fn normalize_name(self, name: &str) -> String {
        match self {
            Self::Grub => name.to_owned(),
            Self::Lilo => name.replace([' ', '\t'], "_"),
        }
    }

    /// The default path of the configuration file for this dialect.
    #[must_use = "Has no effect if the result is unused"]
    pub const fn default_path(self) -> &'static str {
        match self {
            Self::Lilo => "/etc/lilo.conf",
            Self::Grub => "/boot/grub/menu.lst",
        }
    }
}

impl FromStr for Dialect {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &*s.to_ascii_lowercase() {
            "lilo" => Ok(Self::Lilo),
            "grub" => Ok(Self::Grub),
            _ => Err(TypeError::Dialect(s.to_owned())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_markers() {
        assert!(Dialect::Grub.is_section_marker("title"));
        assert!(!Dialect::Grub.is_section_marker("image"));
        assert!(Dialect::Lilo.is_section_marker("image"));
        assert!(Dialect::Lilo.is_section_marker("other"));
        assert!(!Dialect::Lilo.is_section_marker("title"));
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(Dialect::Lilo.normalize_name("SUSE Linux"), "SUSE_Linux");
        assert_eq!(Dialect::Grub.normalize_name("SUSE Linux"), "SUSE Linux");
    }

    #[test]
    fn test_from_str() -> Result<(), TypeError> {
        assert_eq!("grub".parse::<Dialect>()?, Dialect::Grub);
        assert_eq!("LILO".parse::<Dialect>()?, Dialect::Lilo);
        assert!("elilo".parse::<Dialect>().is_err());
        Ok(())
    }
}
