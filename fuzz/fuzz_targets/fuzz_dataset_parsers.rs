//! Fuzz target for the travelers, watchlist, and countries parsers.
//!
//! Goal: the parsers should **never panic** on any input.
//! They may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_dataset_parsers
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = papers_input::fuzz::parse_travelers(text);
        let _ = papers_input::fuzz::parse_watchlist(text);
        let _ = papers_input::fuzz::parse_countries(text);
    }
});
