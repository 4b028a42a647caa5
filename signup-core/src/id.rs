use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique name of an activity in the catalog (e.g. `"Chess Club"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[non_exhaustive]
pub struct ActivityName(pub String);

impl ActivityName {
    /// Creates an `ActivityName` from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ActivityName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ActivityName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// Lets the directory look activities up by `&str` without allocating.
impl Borrow<str> for ActivityName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Email address identifying a participant.
///
/// Compared exactly as supplied; no case folding or validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[non_exhaustive]
pub struct Email(pub String);

impl Email {
    /// Creates an `Email` from any string-like value.
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Email {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Email {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl PartialEq<str> for Email {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_name_serializes_as_plain_string() {
        let name = ActivityName::new("Chess Club");
        let json = match serde_json::to_string(&name) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, "\"Chess Club\"");
    }

    #[test]
    fn email_comparison_is_exact() {
        let email = Email::new("Emma@mergington.edu");
        assert!(email == *"Emma@mergington.edu");
        assert!(email != *"emma@mergington.edu", "emails are not case folded");
    }
}
