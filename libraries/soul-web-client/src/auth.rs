//! Bearer credentials for web API requests.
//!
//! Obtaining and refreshing tokens is left to the caller; the client only
//! asks a [`TokenSource`] for the current token before each request.

use crate::error::{Result, WebClientError};
use async_trait::async_trait;

/// Supplies the bearer token attached to each request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn token(&self) -> Result<String>;
}

/// A fixed, pre-obtained access token.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticToken(***)")
    }
}

#[async_trait]
impl TokenSource for StaticToken {
    async fn token(&self) -> Result<String> {
        if self.0.is_empty() {
            return Err(WebClientError::Credentials("access token is empty".into()));
        }
        Ok(self.0.clone())
    }
}
