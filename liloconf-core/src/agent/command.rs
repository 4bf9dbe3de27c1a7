// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Provides [`Command`], the meaning of a [`ConfPath`] resolved from its first component.

use crate::agent::path::ConfPath;

/// The node that a path addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// The empty path. Reading does nothing, writing saves the document.
    Root,

    /// `.tostring`, the serialized document.
    ToString,

    /// `.fromstring`, which parses a string in place of the backing file.
    FromString,

    /// `.getfilename` or `.setfilename`, the path of the backing file.
    Filename,

    /// `.reread`, which parses the backing file again.
    Reread,

    /// `.comment`, the leading comment of the document.
    Comment,

    /// `.sections`, the list of section names.
    Sections,

    /// `.sections.<name>` and anything below it.
    Section {
        /// The name of the section.
        name: &'a str,

        /// The components after the section name.
        rest: &'a [String],
    },

    /// Any other path, which addresses the options outside of any section.
    Option(&'a [String]),
}

impl<'a> Command<'a> {
    /// Resolve a [`ConfPath`] into a [`Command`].
    #[must_use = "Has no effect if the result is unused"]
    pub fn resolve(path: &'a ConfPath) -> Self {
        let Some(first) = path.first() else {
            return Self::Root;
        };

        match (first.as_str(), &path[1..]) {
            ("tostring", _) => Self::ToString,
            ("fromstring", _) => Self::FromString,
            ("getfilename" | "setfilename", _) => Self::Filename,
            ("reread", _) => Self::Reread,
            ("comment", _) => Self::Comment,
            ("sections", []) => Self::Sections,
            ("sections", [name, rest @ ..]) => Self::Section {
                name: name.as_str(),
                rest,
            },
            _ => Self::Option(&path[..]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(path: &str) -> Command<'static> {
        let path: ConfPath = path.parse().expect("Failed to parse path in test");
        let path = Box::leak(Box::new(path));
        Command::resolve(path)
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve("."), Command::Root);
        assert_eq!(resolve(".tostring"), Command::ToString);
        assert_eq!(resolve(".setfilename"), Command::Filename);
        assert_eq!(resolve(".getfilename"), Command::Filename);
        assert_eq!(resolve(".sections"), Command::Sections);
        assert_eq!(
            resolve(".sections.linux"),
            Command::Section {
                name: "linux",
                rest: &[]
            }
        );
        assert!(matches!(
            resolve(".sections.linux.append"),
            Command::Section { name: "linux", rest: [opt] } if opt == "append"
        ));
        assert!(matches!(resolve(".timeout"), Command::Option([opt]) if opt == "timeout"));
    }
}
