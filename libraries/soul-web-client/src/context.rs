//! Cancellation and deadline carrier for API calls.

use crate::error::{Result, WebClientError};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Per-call context carrying cooperative cancellation and an optional deadline.
///
/// Cloning a context shares its cancellation state. Every client operation
/// checks the context before sending and races the network wait against it.
///
/// # Example
///
/// ```ignore
/// let (ctx, cancel) = RequestContext::with_cancel();
/// tokio::spawn(async move {
///     tokio::signal::ctrl_c().await.ok();
///     cancel.cancel();
/// });
/// client.library().add_tracks_to_library(&ctx, &["4iV5W9uYEdYUVa79Axb7Rh"]).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// A cancellable context and the token that cancels it.
    pub fn with_cancel() -> (Self, CancellationToken) {
        let token = CancellationToken::new();
        (Self::from_token(token.clone()), token)
    }

    /// Wrap an existing cancellation token.
    pub fn from_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// A context that expires `timeout` from now.
    ///
    /// A timeout too large to represent leaves the context without a deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Instant::now().checked_add(timeout),
        }
    }

    /// A context that expires at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    /// Derive a context cancelled along with this one, expiring at the
    /// earlier of this context's deadline and `timeout` from now.
    pub fn child_with_timeout(&self, timeout: Duration) -> Self {
        let deadline = match (self.deadline, Instant::now().checked_add(timeout)) {
            (Some(parent), Some(candidate)) => Some(parent.min(candidate)),
            (parent, candidate) => parent.or(candidate),
        };
        Self {
            token: self.token.child_token(),
            deadline,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancel this context and every context derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// The reason this context is done, or `None` while it is still live.
    ///
    /// Explicit cancellation wins over an expired deadline.
    pub fn err(&self) -> Option<WebClientError> {
        if self.token.is_cancelled() {
            return Some(WebClientError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(WebClientError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Drive `fut` to completion unless the context finishes first.
    ///
    /// When the context wins, `fut` is dropped, abandoning any in-flight I/O.
    pub async fn run<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if let Some(err) = self.err() {
            return Err(err);
        }

        let expiry = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = self.token.cancelled() => Err(WebClientError::Cancelled),
            () = expiry => Err(WebClientError::DeadlineExceeded),
            result = fut => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_background_runs_future() {
        let ctx = RequestContext::background();
        assert!(ctx.err().is_none());
        let value = ctx.run(async { Ok(7) }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_pre_cancelled_skips_future() {
        let (ctx, cancel) = RequestContext::with_cancel();
        cancel.cancel();

        let mut polled = false;
        let result = ctx
            .run(async {
                polled = true;
                Ok(())
            })
            .await;

        assert!(matches!(result, Err(WebClientError::Cancelled)));
        assert!(!polled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_exceeded_while_waiting() {
        let ctx = RequestContext::with_timeout(Duration::from_millis(100));
        let result: Result<()> = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                Ok(())
            })
            .await;

        assert!(matches!(result, Err(WebClientError::DeadlineExceeded)));
        assert!(matches!(ctx.err(), Some(WebClientError::DeadlineExceeded)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_while_waiting() {
        let (ctx, cancel) = RequestContext::with_cancel();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            cancel.cancel();
        });

        let result: Result<()> = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                Ok(())
            })
            .await;

        assert!(matches!(result, Err(WebClientError::Cancelled)));
    }

    #[tokio::test]
    async fn test_child_follows_parent_cancellation() {
        let (parent, cancel) = RequestContext::with_cancel();
        let child = parent.child_with_timeout(Duration::from_secs(60));
        assert!(child.err().is_none());

        cancel.cancel();
        assert!(child.is_cancelled());
        assert!(matches!(child.err(), Some(WebClientError::Cancelled)));
    }

    #[tokio::test]
    async fn test_child_keeps_earlier_deadline() {
        let parent = RequestContext::with_timeout(Duration::from_secs(1));
        let child = parent.child_with_timeout(Duration::from_secs(60));
        assert_eq!(child.deadline(), parent.deadline());
    }

    #[test]
    fn test_unrepresentable_timeout_has_no_deadline() {
        let ctx = RequestContext::with_timeout(Duration::MAX);
        assert!(ctx.deadline().is_none());
        assert!(ctx.err().is_none());

        let child = RequestContext::background().child_with_timeout(Duration::from_secs(u64::MAX));
        assert!(child.deadline().is_none());
        assert!(child.err().is_none());
    }

    #[test]
    fn test_unrepresentable_child_timeout_keeps_parent_deadline() {
        let parent = RequestContext::with_timeout(Duration::from_secs(1));
        let child = parent.child_with_timeout(Duration::from_secs(u64::MAX));
        assert_eq!(child.deadline(), parent.deadline());
    }

    #[test]
    fn test_cancel_wins_over_deadline() {
        let ctx = RequestContext::with_deadline(Instant::now());
        ctx.cancel();
        assert!(matches!(ctx.err(), Some(WebClientError::Cancelled)));
    }
}
