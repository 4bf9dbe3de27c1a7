// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Timestamp formatting for the modification marker.

use chrono::{DateTime, Local, TimeZone};

/// The format string that matches the output of C's `ctime`, without the trailing newline.
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Format a timestamp the way `ctime` does, such as `Wed Jun 30 21:49:08 1993`.
#[must_use = "Has no effect if the result is unused"]
pub fn ctime<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: core::fmt::Display,
{
    time.format(CTIME_FORMAT).to_string()
}

/// Get the current local time formatted the way `ctime` does.
#[must_use = "Has no effect if the result is unused"]
pub fn ctime_now() -> String {
    ctime(&Local::now())
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn test_ctime_format() {
        let time = Utc
            .with_ymd_and_hms(1993, 6, 30, 21, 49, 8)
            .single()
            .expect("Failed to build a valid date in test");
        assert_eq!(ctime(&time), "Wed Jun 30 21:49:08 1993");
    }

    #[test]
    fn test_single_digit_day_is_padded() {
        let offset = FixedOffset::east_opt(3600).expect("Failed to build offset in test");
        let time = offset
            .with_ymd_and_hms(2025, 3, 4, 5, 6, 7)
            .single()
            .expect("Failed to build a valid date in test");
        assert_eq!(ctime(&time), "Tue Mar  4 05:06:07 2025");
    }
}
