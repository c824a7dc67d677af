//! Soul Web Client
//!
//! HTTP client library for the user library endpoints of a music service
//! web API.
//!
//! # Features
//!
//! - **Contains checks**: which tracks or albums a user has saved
//! - **Save / remove**: add and remove tracks or albums in one request
//! - **Cancellation**: every call takes a [`RequestContext`] with cooperative
//!   cancellation and an optional deadline
//!
//! # Example
//!
//! ```ignore
//! use soul_web_client::{ClientConfig, RequestContext, WebApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::load(None)?;
//!     let client = WebApiClient::new(config)?;
//!     let ctx = RequestContext::with_timeout(std::time::Duration::from_secs(5));
//!
//!     let ids = ["4iV5W9uYEdYUVa79Axb7Rh", "1301WleyT98MSxVHPZCA6M"];
//!     client.library().add_albums_to_library(&ctx, &ids).await?;
//!
//!     let saved = client.library().user_has_albums(&ctx, &ids).await?;
//!     for (id, present) in saved.zip_ids(&ids) {
//!         println!("{} {}", id, present);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod config;
mod context;
mod error;
mod library;
mod types;

// Re-export main types
pub use auth::{StaticToken, TokenSource};
pub use client::WebApiClient;
pub use crate::config::{ClientConfig, DEFAULT_BASE_URL};
pub use context::RequestContext;
pub use error::{Result, WebClientError};
pub use library::LibraryClient;
pub use types::{AlbumId, ApiErrorBody, ApiErrorDetail, ContainsResult, LibraryKind, TrackId};

// Cancellation handle returned by `RequestContext::with_cancel`
pub use tokio_util::sync::CancellationToken;
