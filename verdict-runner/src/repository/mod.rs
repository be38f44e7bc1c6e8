//! Repository layer
//!
//! Repositories are thin adapters over the HTTP clients. They expose the two
//! remote capabilities the poll loop needs (fetch statuses, send a message)
//! without any business logic.
//!
//! All repositories are trait-based to enable testing and mocking.

mod messages;
mod statuses;

// Re-export traits
pub use messages::MessageRepository;
pub use statuses::StatusRepository;

// Re-export implementations
pub use messages::TelegramMessageRepository;
pub use statuses::HttpStatusRepository;
