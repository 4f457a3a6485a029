//! Fuzz target for config parsing and rule registry construction.
//!
//! Goal: a config document of any shape either resolves or returns an error. It never panics.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_rules_document
//! ```

#![no_main]

use bumpguard_settings::{ConfigFormat, Overrides};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for format in [ConfigFormat::Json, ConfigFormat::Toml] {
        if let Ok(cfg) = bumpguard_settings::parse_config(text, format) {
            let _ = bumpguard_settings::resolve_config(cfg, Overrides::default());
        }
    }
});
