use serde::{Deserialize, Serialize};

use crate::id::Email;

/// A school-offered activity with a capacity and a participant list.
///
/// Serializes to the public JSON shape
/// `{ description, schedule, max_participants, participants }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Activity {
    /// Short description shown in the catalog.
    pub description: String,
    /// Human-readable meeting times (e.g. `"Fridays, 3:30 PM - 5:00 PM"`).
    pub schedule: String,
    /// Advertised capacity. Reported to clients, not enforced on signup.
    pub max_participants: usize,
    /// Registered participants in signup order. Never contains duplicates.
    pub participants: Vec<Email>,
}

impl Activity {
    /// Creates an activity with no participants.
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Replaces the participant list, dropping repeated emails after their
    /// first occurrence.
    #[must_use]
    pub fn with_participants<I, E>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Email>,
    {
        self.participants.clear();
        for email in participants {
            let email = email.into();
            if !self.participants.contains(&email) {
                self.participants.push(email);
            }
        }
        self
    }

    /// Returns `true` if `email` is in the participant list.
    #[must_use]
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Remaining capacity, saturating at zero.
    #[must_use]
    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }
}
