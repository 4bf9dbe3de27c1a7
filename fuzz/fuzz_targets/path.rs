// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

#![no_main]

use libfuzzer_sys::fuzz_target;
use liloconf_core::agent::path::ConfPath;

fuzz_target!(|data: &str| {
    if let Ok(path) = data.parse::<ConfPath>() {
        assert_eq!(path.to_string().parse::<ConfPath>().ok(), Some(path));
    }
});
