//! Client-side pacing for search requests.
//!
//! XIVAPI throttles clients that fire requests back to back. Rather than
//! tracking a request window, every call is stretched to take at least
//! `min_interval` from the moment it starts until the caller gets its result,
//! so a single caller never dispatches more than one request per interval.

use std::future::Future;
use std::time::Duration;

use tokio::time::{sleep, Instant};

/// Default minimum time between the start of a request and its return.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Stretches calls that finish faster than the minimum interval.
#[derive(Clone, Copy, Debug)]
pub struct Pacer {
    min_interval: Duration,
}

impl Pacer {
    pub fn new(min_interval: Duration) -> Self {
        Self { min_interval }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Awaits `operation`, then sleeps for whatever is left of the interval
    /// measured from before the operation started. Slow operations return
    /// as soon as they finish. The output, `Ok` or `Err`, is passed through.
    pub async fn run<F, T>(&self, operation: F) -> T
    where
        F: Future<Output = T>,
    {
        let started = Instant::now();
        let output = operation.await;

        let elapsed = started.elapsed();
        if let Some(remaining) = self.min_interval.checked_sub(elapsed) {
            if !remaining.is_zero() {
                tracing::debug!(
                    "Request took {:.3}s, pacing for {:.3}s",
                    elapsed.as_secs_f64(),
                    remaining.as_secs_f64()
                );
                sleep(remaining).await;
            }
        }
        output
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fast_call_is_stretched_to_interval() {
        tokio::time::pause();

        let pacer = Pacer::default();
        let started = Instant::now();
        let value = pacer
            .run(async {
                sleep(Duration::from_millis(300)).await;
                7
            })
            .await;

        assert_eq!(value, 7);
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(1), "returned after {:?}", elapsed);
        assert!(elapsed < Duration::from_millis(1100), "returned after {:?}", elapsed);
    }

    #[tokio::test]
    async fn slow_call_gets_no_extra_delay() {
        tokio::time::pause();

        let pacer = Pacer::default();
        let started = Instant::now();
        pacer
            .run(sleep(Duration::from_millis(1200)))
            .await;

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(1200));
        assert!(elapsed < Duration::from_millis(1300), "returned after {:?}", elapsed);
    }

    #[tokio::test]
    async fn does_not_return_before_interval() {
        tokio::time::pause();

        let handle = tokio::spawn(async {
            Pacer::default()
                .run(sleep(Duration::from_millis(300)))
                .await;
        });
        // Let the task start its request before moving the clock.
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(900)).await;
        tokio::task::yield_now().await;
        assert!(!handle.is_finished());

        tokio::time::advance(Duration::from_millis(200)).await;
        tokio::task::yield_now().await;
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn errors_are_paced_and_passed_through() {
        tokio::time::pause();

        let pacer = Pacer::new(Duration::from_millis(500));
        let started = Instant::now();
        let result: Result<(), &str> = pacer.run(async { Err("boom") }).await;

        assert_eq!(result, Err("boom"));
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[test]
    fn default_interval_is_one_second() {
        assert_eq!(Pacer::default().min_interval(), Duration::from_secs(1));
    }
}
