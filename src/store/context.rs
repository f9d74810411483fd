//! Operation Context
//!
//! Cancellation and deadline signal passed as the first argument of every
//! store operation. The store only inspects it at entry.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use uuid::Uuid;

use super::errors::{StoreError, StoreResult};

/// Cloneable cancellation handle
///
/// All clones share one flag; cancelling any of them resolves every
/// context built on it.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the token. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Context carried into every store operation
#[derive(Debug, Clone)]
pub struct OpContext {
    /// Request ID for log correlation
    pub request_id: Uuid,

    cancel: CancelToken,

    deadline: Option<Instant>,
}

impl OpContext {
    /// A context that is never cancelled and has no deadline
    pub fn background() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            cancel: CancelToken::new(),
            deadline: None,
        }
    }

    /// A context whose deadline is `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().deadline_at(Instant::now() + timeout)
    }

    /// A context with an absolute deadline
    pub fn with_deadline(deadline: Instant) -> Self {
        Self::background().deadline_at(deadline)
    }

    /// Attach an existing cancellation token
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    fn deadline_at(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Handle that cancels this context (and its clones)
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fail if the signal is already resolved
    ///
    /// Cancellation wins over an expired deadline.
    pub fn check(&self) -> StoreResult<()> {
        if self.cancel.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(StoreError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}

impl Default for OpContext {
    fn default() -> Self {
        Self::background()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_is_live() {
        let ctx = OpContext::background();
        assert!(ctx.check().is_ok());
        assert!(ctx.deadline().is_none());
    }

    #[test]
    fn test_cancel_through_clone() {
        let ctx = OpContext::background();
        let token = ctx.cancel_token();
        let copy = ctx.clone();
        token.cancel();
        assert_eq!(ctx.check(), Err(StoreError::Cancelled));
        assert_eq!(copy.check(), Err(StoreError::Cancelled));
    }

    #[test]
    fn test_expired_deadline() {
        let ctx = OpContext::with_deadline(Instant::now());
        assert_eq!(ctx.check(), Err(StoreError::DeadlineExceeded));
    }

    #[test]
    fn test_future_deadline() {
        let ctx = OpContext::with_timeout(Duration::from_secs(60));
        assert!(ctx.check().is_ok());
    }

    #[test]
    fn test_cancel_wins_over_deadline() {
        let ctx = OpContext::with_deadline(Instant::now());
        ctx.cancel();
        assert_eq!(ctx.check(), Err(StoreError::Cancelled));
    }

    #[test]
    fn test_shared_token() {
        let token = CancelToken::new();
        let a = OpContext::background().with_cancel_token(token.clone());
        let b = OpContext::background().with_cancel_token(token.clone());
        assert_ne!(a.request_id, b.request_id);
        token.cancel();
        assert!(a.check().is_err());
        assert!(b.check().is_err());
    }
}
