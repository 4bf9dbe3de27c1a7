// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

#![no_main]

use libfuzzer_sys::fuzz_target;
use liloconf_core::config::{Document, types::Dialect};

fuzz_target!(|data: &[u8]| {
    let content = String::from_utf8_lossy(data);
    let mut doc = Document::new("/dev/null", Dialect::Lilo);
    doc.parse_str(&content);

    // a second pass over serialized output must keep the same structure
    let mut again = Document::new("/dev/null", Dialect::Lilo);
    again.parse_str(&doc.serialize());
    assert_eq!(doc.section_names(), again.section_names());
    assert_eq!(doc.options().names(), again.options().names());
});
