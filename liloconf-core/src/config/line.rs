// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! A classifier for single lines of a configuration file.
//!
//! Example configuration lines, and how they are classified:
//!
//! ```text
//! # a comment                    -> comment " a comment"
//! boot=/dev/sda                  -> lilo option "boot", value "/dev/sda"
//! append="quiet splash" # extra  -> lilo option "append", value "quiet splash", comment " extra"
//! read-only                      -> option "read-only" with no value
//! kernel /vmlinuz root=/dev/sda2 -> grub option "kernel", value "/vmlinuz root=/dev/sda2"
//! ```
//!
//! A line is never rejected. Anything that cannot be split into a key and a value is kept as comment text, so that
//! a round trip through the parser and the serializer never drops content.

use crate::config::types::Dialect;

/// The marker that starts a comment.
pub const COMMENT_MARKER: char = '#';

/// One classified line of input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line {
    /// The raw text of the line.
    pub src: String,

    /// The comment text attached to this line, without comment markers.
    ///
    /// While parsing a document this is replaced with every comment line accumulated since the last option.
    pub comment: String,

    /// The recognized option name, or an empty string if the line is not a key/value line.
    pub option: String,

    /// The option value, or [`None`] for a bare directive like `read-only`.
    pub value: Option<String>,
}

impl Line {
    /// Classify a raw line of text with the key/value syntax of a [`Dialect`].
    #[must_use = "Has no effect if the result is unused"]
    pub fn new(src: &str, dialect: Dialect) -> Self {
        let src = src.strip_suffix('\r').unwrap_or(src);
        let trimmed = src.trim();

        let mut line = Self {
            src: src.to_owned(),
            ..Self::default()
        };

        if trimmed.is_empty() {
            return line;
        }

        let (body, comment) = split_comment(trimmed);
        if let Some(comment) = comment {
            comment.clone_into(&mut line.comment);
        }

        if body.is_empty() {
            return line;
        }

        match split_key_value(body, dialect) {
            Some((option, value)) => {
                line.option = option;
                line.value = value;
            }
            None => trimmed.clone_into(&mut line.comment), // malformed, keep the whole line as comment text
        }

        line
    }

    /// Checks if the raw text of the line is empty or only whitespace.
    #[must_use = "Has no effect if the result is unused"]
    pub fn is_blank(&self) -> bool {
        self.src.trim().is_empty()
    }

    /// Checks if an option was recognized on this line.
    #[must_use = "Has no effect if the result is unused"]
    pub fn is_option(&self) -> bool {
        !self.option.is_empty()
    }
}

/// Split a trimmed line into the part before a comment marker and the comment text after it.
///
/// A comment marker only counts when it starts the line or follows whitespace, and is not inside double quotes.
fn split_comment(line: &str) -> (&str, Option<&str>) {
    let mut in_quotes = false;
    let mut prev_blank = true;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            COMMENT_MARKER if !in_quotes && prev_blank => {
                return (line[..i].trim_end(), Some(&line[i + c.len_utf8()..]));
            }
            _ => (),
        }
        prev_blank = c.is_whitespace();
    }

    (line, None)
}

/// Split the body of a line into an option name and its value.
///
/// Returns [`None`] if the body does not start with a valid option name.
fn split_key_value(body: &str, dialect: Dialect) -> Option<(String, Option<String>)> {
    let (key, value) = match dialect {
        Dialect::Lilo => match body.split_once('=') {
            Some((key, value)) => (key.trim(), Some(unquote(value.trim()).to_owned())),
            None => (body, None),
        },
        Dialect::Grub => match body.find(|c: char| c.is_whitespace() || c == '=') {
            Some(idx) => {
                let rest = body[idx..].trim_start();
                let rest = rest.strip_prefix('=').unwrap_or(rest).trim_start();
                (&body[..idx], (!rest.is_empty()).then(|| rest.to_owned()))
            }
            None => (body, None),
        },
    };

    is_valid_key(key).then(|| (key.to_owned(), value))
}

/// Tests if an option name is valid.
///
/// Returns true if the name is not empty and contains no whitespace, quotes, `=`, or comment markers.
#[must_use = "Has no effect if the result is unused"]
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key
            .chars()
            .any(|c| c.is_whitespace() || c == '"' || c == '=' || c == COMMENT_MARKER)
}

/// Remove one pair of surrounding double quotes, if there is one and nothing inside of it is quoted.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|x| x.strip_suffix('"'))
        .filter(|x| !x.contains('"'))
        .unwrap_or(value)
}

/// Format an option as it should appear in a file of the given [`Dialect`], without indentation.
///
/// Values in `lilo.conf` that contain blanks or a comment marker are wrapped in double quotes, unless they already
/// carry quotes of their own. GRUB values that would otherwise be mistaken for a comment or a separator are joined
/// to the name with `=`.
#[must_use = "Has no effect if the result is unused"]
pub fn format_option(dialect: Dialect, name: &str, value: Option<&str>) -> String {
    let Some(value) = value else {
        return name.to_owned();
    };

    match dialect {
        Dialect::Lilo => {
            let needs_quotes = value.is_empty()
                || value.contains(|c: char| c.is_whitespace() || c == COMMENT_MARKER);
            if needs_quotes && !value.contains('"') {
                format!("{name}=\"{value}\"")
            } else {
                format!("{name}={value}")
            }
        }
        Dialect::Grub => {
            if value.starts_with(['=', COMMENT_MARKER]) {
                format!("{name}={value}")
            } else {
                format!("{name} {value}")
            }
        }
    }
}

/// Format comment text as comment lines, each prefixed with the indentation and a comment marker.
///
/// Empty comment text produces no lines at all.
pub fn format_comment<'a>(comment: &'a str, indent: &'a str) -> impl Iterator<Item = String> + 'a {
    comment
        .split('\n')
        .filter(move |_| !comment.is_empty())
        .map(move |x| format!("{indent}{COMMENT_MARKER}{x}"))
}
