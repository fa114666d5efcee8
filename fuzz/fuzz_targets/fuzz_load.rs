//! Fuzz target for loading raw bytes.
//!
//! Goal: the loader should **never panic** on any input, and anything it
//! accepts must survive a serialize-and-reload cycle unchanged.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_load
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(log) = sarifkit_loader::load_slice(data) else {
        return;
    };

    let text = serde_json::to_string(&log).expect("a loaded log serializes");
    let again = sarifkit_loader::load_str(&text).expect("a serialized log reloads");
    assert_eq!(again, log);
});
