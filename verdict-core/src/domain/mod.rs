//! Core domain types
//!
//! These types describe what the status API reports about a homework and
//! where the next query window starts. They are shared between the client
//! (decoding) and the runner (polling and notification).

pub mod cursor;
pub mod homework;
