//! Delay capability for the sign-out settle window.

use std::time::Duration;

use async_trait::async_trait;

#[async_trait(?Send)]
pub trait Timer {
    /// Suspend the caller for `duration`.
    async fn sleep(&self, duration: Duration);
}
