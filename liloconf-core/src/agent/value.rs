// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Provides [`Value`], the value exchanged with a host through the [`super::Agent`] interface.

use core::fmt;

/// A value read from, or written to, a path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Value {
    /// No value. Reads of missing nodes return this, and writing it removes a node.
    #[default]
    Absent,

    /// A boolean, returned by commands and used for bare directives like `read-only`.
    Bool(bool),

    /// A string.
    Str(String),

    /// A list of strings, returned by enumeration.
    List(Vec<String>),
}

impl Value {
    /// Checks if the [`Value`] is [`Value::Absent`].
    #[must_use = "Has no effect if the result is unused"]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Checks if writing the [`Value`] to an option removes it.
    ///
    /// This is the case for [`Value::Absent`], `false`, and the empty string.
    #[must_use = "Has no effect if the result is unused"]
    pub fn is_removal(&self) -> bool {
        match self {
            Self::Absent | Self::Bool(false) => true,
            Self::Str(s) => s.is_empty(),
            Self::Bool(true) | Self::List(_) => false,
        }
    }

    /// Get the string inside of a [`Value::Str`].
    #[must_use = "Has no effect if the result is unused"]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Write a string as a double quoted literal, escaping quotes, backslashes and newlines.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write_quoted(f, s),
            Self::List(list) => {
                f.write_str("[")?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_quoted(f, item)?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::Absent.to_string(), "nil");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::from("say \"hi\"").to_string(), r#""say \"hi\"""#);
        assert_eq!(
            Value::from(vec!["linux".to_owned(), "failsafe".to_owned()]).to_string(),
            r#"["linux", "failsafe"]"#
        );
    }

    #[test]
    fn test_is_removal() {
        assert!(Value::Absent.is_removal());
        assert!(Value::Bool(false).is_removal());
        assert!(Value::from("").is_removal());
        assert!(!Value::from("0").is_removal());
        assert!(!Value::Bool(true).is_removal());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<String>), Value::Absent);
        assert_eq!(Value::from(Some("x")), Value::Str("x".to_owned()));
    }
}
