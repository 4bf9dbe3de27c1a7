// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Provides [`ConfPath`], a hierarchical path into a [`crate::config::Document`].
//!
//! Paths are written as a dot separated list of components, with the root written as a single dot. Components that
//! contain anything other than letters, digits, `_` and `-` are wrapped in double quotes:
//!
//! ```text
//! .
//! .timeout
//! .sections
//! .sections.linux.append
//! .sections."SUSE Linux 10".kernel
//! ```

use core::{fmt, ops::Deref, str::FromStr};

use smallvec::SmallVec;

use crate::agent::PathError;

/// A path made up of string components.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConfPath(SmallVec<[String; 4]>);

impl ConfPath {
    /// Create the root path, which has no components.
    #[must_use = "Has no effect if the result is unused"]
    pub fn root() -> Self {
        Self::default()
    }
}

impl Deref for ConfPath {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for ConfPath {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Checks if a component can be written without quotes.
fn is_plain(component: &str) -> bool {
    !component.is_empty()
        && component
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl FromStr for ConfPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PathError::Parse(s.to_owned());
        let s_trimmed = s.trim();
        if s_trimmed.is_empty() || s_trimmed == "." {
            return Ok(Self::root());
        }

        let mut path = Self::root();
        let mut chars = s_trimmed.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '.' {
                return Err(invalid());
            }

            let mut component = String::new();
            if chars.peek() == Some(&'"') {
                chars.next();
                loop {
                    match chars.next().ok_or_else(invalid)? {
                        '"' => break,
                        '\\' => component.push(chars.next().ok_or_else(invalid)?),
                        c => component.push(c),
                    }
                }
            } else {
                while let Some(&c) = chars.peek() {
                    if c == '.' {
                        break;
                    }
                    component.push(c);
                    chars.next();
                }
                if !is_plain(&component) {
                    return Err(invalid());
                }
            }

            path.0.push(component);
        }

        Ok(path)
    }
}

impl fmt::Display for ConfPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str(".");
        }

        for component in &self.0 {
            if is_plain(component) {
                write!(f, ".{component}")?;
            } else {
                f.write_str(".\"")?;
                for c in component.chars() {
                    if matches!(c, '"' | '\\') {
                        f.write_str("\\")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str("\"")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_root() -> Result<(), PathError> {
        assert!(".".parse::<ConfPath>()?.is_empty());
        assert!("".parse::<ConfPath>()?.is_empty());
        assert_eq!(ConfPath::root().to_string(), ".");
        Ok(())
    }

    #[test]
    fn test_plain_components() -> Result<(), PathError> {
        let path: ConfPath = ".sections.linux.append".parse()?;
        assert_eq!(&*path, ["sections", "linux", "append"]);
        Ok(())
    }

    #[test]
    fn test_quoted_components() -> Result<(), PathError> {
        let path: ConfPath = r#".sections."SUSE Linux 10.1".kernel"#.parse()?;
        assert_eq!(&*path, ["sections", "SUSE Linux 10.1", "kernel"]);
        assert_eq!(path.to_string(), r#".sections."SUSE Linux 10.1".kernel"#);

        let path: ConfPath = r#"."say \"hi\"""#.parse()?;
        assert_eq!(&*path, [r#"say "hi""#]);
        Ok(())
    }

    #[test]
    fn test_invalid() {
        assert!("sections".parse::<ConfPath>().is_err());
        assert!(".sections..linux".parse::<ConfPath>().is_err());
        assert!(".sections.\"linux".parse::<ConfPath>().is_err());
        assert!(".sections.SUSE Linux".parse::<ConfPath>().is_err());
    }

    #[test]
    fn test_collect_quotes_components() {
        let path: ConfPath = ["sections", "Linux 6"].into_iter().collect();
        assert_eq!(path.to_string(), ".sections.\"Linux 6\"");
    }

    proptest! {
        #[test]
        fn display_parses_back(components in prop::collection::vec(any::<String>(), 0..6)) {
            let path: ConfPath = components.iter().cloned().collect();
            let parsed: ConfPath = path.to_string().parse().map_err(|e| TestCaseError::fail(format!("{e}")))?;
            prop_assert_eq!(parsed, path);
        }
    }
}
