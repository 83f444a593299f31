//! `Timer` backed by `tokio::time`.

use std::time::Duration;

use async_trait::async_trait;
use session::Timer;

#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

#[async_trait(?Send)]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
