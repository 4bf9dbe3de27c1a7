// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Simple stderr backend for the [`log`] crate.

use std::io::Write;

use chrono::Local;
use log::{Level, Metadata, Record};

/// A simple logging backend that writes to stderr.
pub struct StderrLogger {
    /// The most verbose level that will be written.
    level: Level,
}

impl StderrLogger {
    /// Constructs a new [`StderrLogger`] that writes records at or above `level`.
    #[must_use = "Has no effect if the result is unused"]
    pub const fn new(level: Level) -> Self {
        Self { level }
    }

    /// Constructs a new [`StderrLogger`], then immediately leaks it so that it can be used with `set_logger`.
    #[must_use = "Has no effect if the result is unused"]
    pub fn static_new(level: Level) -> &'static Self {
        Box::leak(Box::new(Self::new(level)))
    }
}

impl Default for StderrLogger {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let time = Local::now().format("%Y-%m-%d %H:%M:%S");
            let level = record.level();
            let file = record.file().unwrap_or_default();
            let line = record.line().unwrap_or_default();
            let args = record.args();
            let _ = writeln!(
                std::io::stderr().lock(),
                "[{time} {level} {file}:{line}] - {args}"
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
