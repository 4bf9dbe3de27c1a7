// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! A command line interface frontend to `liloconf`.
//!
//! Every invocation parses the configuration file, performs a single request against a path, then saves the file
//! if the request was a write.
//!
//! ```text
//! liloconf dir .sections
//! liloconf read .sections.linux.append
//! liloconf -t grub -f /boot/grub/menu.lst write .sections."SUSE Linux".kernel /boot/vmlinuz
//! liloconf write .sections.old_linux
//! ```

use std::process::ExitCode;

use getargs::{Arg, Options};
use liloconf_core::{
    ConfResult,
    agent::{Agent, path::ConfPath, value::Value},
    config::{Document, types::Dialect},
    system::log_backend::StderrLogger,
};
use log::{Level, warn};

/// The usage text of the program.
const USAGE: &str = r"Usage: liloconf [OPTIONS] <read|write|dir> <PATH> [VALUE]

-h, --help       display this help and exit
-t, --type       the dialect of the file, lilo (default) or grub
-f, --file       the file to operate on (default /etc/lilo.conf or /boot/grub/menu.lst)
-n, --dry-run    print the result of a write instead of saving it
-v, --verbose    log debug messages

A missing VALUE writes nil, which removes an option or a section.
The values true and false are written as booleans.";

/// The request that was made on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    /// Read a value.
    Read,

    /// Write a value.
    Write,

    /// List the names below a path.
    Dir,
}

/// The parsed command line.
#[derive(Default)]
struct Args {
    /// The dialect of the file.
    dialect: Dialect,

    /// The file to operate on, if it was given.
    file: Option<String>,

    /// Print instead of save after a write.
    dry_run: bool,

    /// Log debug messages.
    verbose: bool,

    /// Show the usage text.
    help: bool,

    /// The positional arguments, in order.
    positional: Vec<String>,
}

/// Parse the command line arguments, excluding the program name.
///
/// Returns [`None`] after printing an error if the arguments were invalid.
fn parse_args(args: &[String]) -> Option<Args> {
    let mut parsed = Args::default();
    let mut opts = Options::new(args.iter().map(String::as_str));

    while let Ok(Some(arg)) = opts.next_arg() {
        match arg {
            Arg::Short('t') | Arg::Long("type") => {
                let Ok(value) = opts.value() else {
                    eprintln!("Error: A dialect was not passed into the type argument");
                    return None;
                };
                match value.parse() {
                    Ok(dialect) => parsed.dialect = dialect,
                    Err(e) => {
                        eprintln!("Error: {e}");
                        return None;
                    }
                }
            }
            Arg::Short('f') | Arg::Long("file") => {
                let Ok(value) = opts.value() else {
                    eprintln!("Error: A path was not passed into the file argument");
                    return None;
                };
                parsed.file = Some(value.to_owned());
            }
            Arg::Short('n') | Arg::Long("dry-run") => parsed.dry_run = true,
            Arg::Short('v') | Arg::Long("verbose") => parsed.verbose = true,
            Arg::Short('h') | Arg::Long("help") => parsed.help = true,
            Arg::Short(invalid) => {
                eprintln!("Error: Unknown short argument: -{invalid}");
                return None;
            }
            Arg::Long(invalid) => {
                eprintln!("Error: Unknown long argument: --{invalid}");
                return None;
            }
            Arg::Positional(arg) => parsed.positional.push(arg.to_owned()),
        }
    }

    Some(parsed)
}

/// Convert a command line value into a [`Value`].
fn parse_value(value: Option<&str>) -> Value {
    match value {
        None => Value::Absent,
        Some("true") => Value::Bool(true),
        Some("false") => Value::Bool(false),
        Some(value) => Value::from(value),
    }
}

/// Write a value to a path of the document, then save the document if the write changed it.
///
/// A write to the root path saves the document by itself. On a dry run nothing is saved, not even through the
/// root path, and the resulting document is printed instead.
///
/// # Errors
///
/// May return an `Error` if the write failed, or the file could not be saved.
fn write_request(doc: &mut Document, path: &ConfPath, value: &Value, dry_run: bool) -> ConfResult<bool> {
    if dry_run {
        let changed = path.is_empty() || doc.write(path, value)?;
        print!("{}", doc.serialize());
        return Ok(changed);
    }

    let changed = doc.write(path, value)?;
    if changed && !path.is_empty() {
        doc.save(None)?;
    }
    Ok(changed)
}

/// The actual main function of the program.
///
/// Returns `false` if the request could not be made or the write did nothing.
///
/// # Errors
///
/// May return an `Error` if the request failed, or the file could not be saved.
fn main_func() -> ConfResult<bool> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(args) = parse_args(&args) else {
        eprintln!("{USAGE}");
        return Ok(false);
    };

    if args.help {
        println!("{USAGE}");
        return Ok(true);
    }

    let level = if args.verbose { Level::Debug } else { Level::Warn };
    let _ = log::set_logger(StderrLogger::static_new(level))
        .map(|()| log::set_max_level(level.to_level_filter()));

    let (verb, path, value) = match &args.positional[..] {
        [verb, path, rest @ ..] if rest.len() <= 1 => {
            let verb = match verb.as_str() {
                "read" => Verb::Read,
                "write" => Verb::Write,
                "dir" => Verb::Dir,
                invalid => {
                    eprintln!("Error: Unknown request: {invalid}\n\n{USAGE}");
                    return Ok(false);
                }
            };
            (verb, path.parse::<ConfPath>()?, rest.first().map(String::as_str))
        }
        _ => {
            eprintln!("{USAGE}");
            return Ok(false);
        }
    };

    let file = args
        .file
        .unwrap_or_else(|| args.dialect.default_path().to_owned());
    let mut doc = Document::new(file, args.dialect);
    if let Err(e) = doc.parse() {
        if verb != Verb::Write {
            return Err(e);
        }
        warn!("{e}, starting from an empty file");
    }

    match verb {
        Verb::Read => println!("{}", doc.read(&path)?),
        Verb::Dir => println!("{}", Value::List(doc.dir(&path)?)),
        Verb::Write => {
            let changed = write_request(&mut doc, &path, &parse_value(value), args.dry_run)?;
            println!("{changed}");
            return Ok(changed);
        }
    }

    Ok(true)
}

/// The main function of the program.
fn main() -> ExitCode {
    match main_func() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Option<Args> {
        let args: Vec<String> = args.iter().map(|&x| x.to_owned()).collect();
        parse_args(&args)
    }

    #[test]
    fn test_parse_args() {
        let parsed = args(&["-t", "grub", "--file", "/tmp/menu.lst", "read", ".timeout"])
            .expect("Arguments should be valid in test");
        assert_eq!(parsed.dialect, Dialect::Grub);
        assert_eq!(parsed.file.as_deref(), Some("/tmp/menu.lst"));
        assert_eq!(parsed.positional, ["read", ".timeout"]);
    }

    #[test]
    fn test_invalid_args() {
        assert!(args(&["--type", "elilo"]).is_none());
        assert!(args(&["--frobnicate"]).is_none());
    }

    #[test]
    fn test_dry_run_saves_nothing() -> ConfResult<()> {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory in test");
        let file = dir.path().join("lilo.conf");
        let copy = dir.path().join("lilo.conf.bak");
        let mut doc = Document::new(&file, Dialect::Lilo);
        doc.parse_str("boot=/dev/sda\n");

        assert!(write_request(&mut doc, &ConfPath::root(), &Value::Absent, true)?);
        let copy_str = copy.to_string_lossy().into_owned();
        assert!(write_request(&mut doc, &ConfPath::root(), &Value::from(copy_str), true)?);
        assert!(write_request(&mut doc, &".timeout".parse()?, &Value::from("50"), true)?);
        assert!(!file.exists());
        assert!(!copy.exists());
        assert_eq!(doc.read(&".timeout".parse()?)?, Value::from("50"));
        Ok(())
    }

    #[test]
    fn test_write_saves() -> ConfResult<()> {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory in test");
        let file = dir.path().join("lilo.conf");
        let mut doc = Document::new(&file, Dialect::Lilo);

        assert!(write_request(&mut doc, &".timeout".parse()?, &Value::from("50"), false)?);
        let mut other = Document::new(&file, Dialect::Lilo);
        other.parse()?;
        assert_eq!(other.read(&".timeout".parse()?)?, Value::from("50"));
        Ok(())
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value(None), Value::Absent);
        assert_eq!(parse_value(Some("true")), Value::Bool(true));
        assert_eq!(parse_value(Some("/dev/sda")), Value::from("/dev/sda"));
    }
}
