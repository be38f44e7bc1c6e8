//! Verdict Core
//!
//! Core types and checks for the homework status bot.
//!
//! This crate contains:
//! - Domain types: homework review statuses, the verdict table and the query cursor
//! - DTOs: shape validation for raw status API payloads
//!
//! Nothing here performs I/O; the client and runner crates feed it decoded JSON.

pub mod domain;
pub mod dto;

pub use domain::cursor::Cursor;
pub use domain::homework::{HomeworkStatus, ParseError, parse_status};
pub use dto::statuses::{ShapeError, current_date, validate_response};
