//! Core types for the activity signup API.
//!
//! Defines the activity record, the participant and name newtypes, and the
//! [`ActivityDirectory`] store that signup and unregister requests mutate.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod activity;
pub mod directory;
pub mod error;
pub mod id;
pub mod seed;

pub use activity::Activity;
pub use directory::{ActivityDirectory, Catalog};
pub use error::{CoreError, ErrorKind};
pub use id::{ActivityName, Email};
pub use seed::seed_activities;
