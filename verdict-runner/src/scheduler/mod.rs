//! Scheduler layer for the runner
//!
//! This layer owns the poll loop: it asks the status API for changes on a
//! fixed period, reports the latest change and turns every per-cycle failure
//! into a deduplicated notification.

pub mod poller;

pub use poller::StatusPoller;
