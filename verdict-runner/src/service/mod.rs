//! Service layer
//!
//! Services hold the runner's business rules on top of the repositories.
//!
//! All services are trait-based to enable testing and dependency injection.

mod notifier;

// Re-export traits
pub use notifier::NotificationService;

// Re-export implementations
pub use notifier::StandardNotificationService;
