use crate::id::{ActivityName, Email};

/// Errors produced by the `signup-core` crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// No activity with the given name exists in the directory.
    #[error("Activity '{name}' not found")]
    ActivityNotFound { name: ActivityName },

    /// The email is already in the activity's participant list.
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { email: Email, activity: ActivityName },

    /// The email is not in the activity's participant list.
    #[error("{email} is not registered for {activity}")]
    NotRegistered { email: Email, activity: ActivityName },
}

/// Coarse classification of a [`CoreError`], used by transport layers to
/// pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The addressed activity does not exist.
    NotFound,
    /// The request contradicts the current participant list.
    Conflict,
}

impl CoreError {
    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::ActivityNotFound { .. } => ErrorKind::NotFound,
            CoreError::AlreadySignedUp { .. } | CoreError::NotRegistered { .. } => {
                ErrorKind::Conflict
            }
        }
    }
}
