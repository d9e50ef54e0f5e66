//! Submission endpoint seam.
//!
//! Forms hand a validated request to an [`Endpoint`]. There is no backend
//! yet, so the site uses [`SimulatedEndpoint`]: wait a fixed delay, then
//! succeed. The wait itself is abstract ([`Delay`]) because the browser
//! and the test runtime have different timers.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Endpoint could not be reached.
    #[error("submission endpoint unavailable: {0}")]
    Unavailable(String),
    /// Endpoint answered but refused the request.
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Destination for a submitted form request.
pub trait Endpoint<R> {
    fn submit(&self, request: &R) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Timer used by [`SimulatedEndpoint`].
pub trait Delay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Stand-in endpoint: sleeps for `delay`, then always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedEndpoint<D> {
    delay: Duration,
    timer: D,
}

impl<D: Delay> SimulatedEndpoint<D> {
    pub fn new(delay: Duration, timer: D) -> Self {
        Self { delay, timer }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<R, D: Delay> Endpoint<R> for SimulatedEndpoint<D> {
    async fn submit(&self, _request: &R) -> Result<(), SubmitError> {
        info!(delay_ms = self.delay.as_millis() as u64, "simulated submission");
        self.timer.wait(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    struct TokioDelay;

    impl Delay for TokioDelay {
        async fn wait(&self, duration: Duration) {
            tokio::time::sleep(duration).await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_endpoint_waits_then_succeeds() {
        let endpoint = SimulatedEndpoint::new(Duration::from_millis(900), TokioDelay);
        assert_eq!(endpoint.delay(), Duration::from_millis(900));

        let started = tokio::time::Instant::now();
        let outcome = endpoint.submit(&"payload").await;

        assert_eq!(outcome, Ok(()));
        assert!(started.elapsed() >= Duration::from_millis(900));
    }

    #[tokio::test]
    async fn zero_delay_resolves_immediately() {
        let endpoint = SimulatedEndpoint::new(Duration::ZERO, TokioDelay);
        let started = Instant::now();
        endpoint.submit(&()).await.unwrap();
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            SubmitError::Unavailable("offline".into()).to_string(),
            "submission endpoint unavailable: offline"
        );
        assert_eq!(
            SubmitError::Rejected("spam".into()).to_string(),
            "submission rejected: spam"
        );
    }
}
