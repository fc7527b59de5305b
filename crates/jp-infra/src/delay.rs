use std::time::Duration;

use async_trait::async_trait;
use jp_core::ports::DelayPort;

/// Tokio-timer implementation of the delay port.
pub struct TokioDelay;

#[async_trait]
impl DelayPort for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn sleeps_the_requested_duration() {
        let start = Instant::now();

        TokioDelay.sleep(Duration::from_millis(1000)).await;

        assert_eq!(start.elapsed(), Duration::from_millis(1000));
    }
}
