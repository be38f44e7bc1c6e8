//! Data transfer objects
//!
//! Checks applied to payloads received from the status API before any of
//! their fields are trusted.

pub mod statuses;
