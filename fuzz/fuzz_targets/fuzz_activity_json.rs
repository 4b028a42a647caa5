//! Fuzz target: JSON deserialization of `Activity` records.
//!
//! Arbitrary bytes must never panic the decoder, and anything that does
//! decode must serialize back without error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use signup_core::Activity;

fuzz_target!(|data: &[u8]| {
    if let Ok(activity) = serde_json::from_slice::<Activity>(data) {
        let _ = activity.spots_left();
        assert!(serde_json::to_vec(&activity).is_ok(), "decoded activity must re-encode");
    }
});
