//! Fuzz target: arbitrary signup / unregister sequences.
//!
//! Decodes the input as a stream of operations against a seeded directory
//! and checks that no participant list ever holds the same email twice.

#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;
use signup_core::ActivityDirectory;

const NAMES: [&str; 4] = ["Chess Club", "Gym Class", "Debate Team", "NonExistentClub"];

fuzz_target!(|data: &[u8]| {
    let directory = ActivityDirectory::seeded();

    for chunk in data.chunks(2) {
        let &[op, arg] = chunk else { break };
        let name = NAMES[usize::from(arg & 0x03)];
        let email = format!("user{}@mergington.edu", arg >> 5);
        // Errors are expected; panics are not.
        let _ = if op & 1 == 0 {
            directory.signup(name, &email)
        } else {
            directory.unregister(name, &email)
        };
    }

    for (name, activity) in directory.list_activities() {
        let mut seen = HashSet::new();
        for email in &activity.participants {
            assert!(seen.insert(email.clone()), "{email} duplicated in {name}");
        }
    }
});
