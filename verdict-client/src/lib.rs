//! Verdict HTTP Clients
//!
//! Typed HTTP clients used by the runner:
//! - [`PracticumClient`] queries the homework status API
//! - [`TelegramClient`] delivers text messages to a chat
//!
//! Both normalize transport, HTTP and decoding failures into [`ClientError`]
//! and never retry on their own.
//!
//! # Example
//!
//! ```no_run
//! use verdict_client::PracticumClient;
//!
//! #[tokio::main]
//! async fn main() -> verdict_client::Result<()> {
//!     let client = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "secret-token",
//!     );
//!
//!     let payload = client.fetch_status(0).await?;
//!     println!("{payload}");
//!     Ok(())
//! }
//! ```

pub mod error;
mod statuses;
mod telegram;

#[cfg(test)]
mod test_support;

pub use error::{ClientError, Result};
pub use statuses::PracticumClient;
pub use telegram::TelegramClient;

use serde::de::DeserializeOwned;

/// Checks the status code and decodes a JSON body
///
/// Non-success responses are rejected before the body is read.
async fn handle_response<T: DeserializeOwned>(
    endpoint: &str,
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();

    if status != reqwest::StatusCode::OK {
        return Err(ClientError::http_status(endpoint, status.as_u16()));
    }

    response
        .json()
        .await
        .map_err(ClientError::decode)
}
