//! HTTP API for the activity signup service.
//!
//! Exposes the activity catalog and the signup / unregister endpoints over
//! an [`ActivityDirectory`](signup_core::ActivityDirectory) injected at
//! router construction.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
