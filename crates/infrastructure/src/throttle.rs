//! Request throttling.
//!
//! The API enforces its rate limit per client, not per connection, so every
//! transport talking to the same API under the same budget shares one
//! [`Throttle`].

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex as StdMutex, OnceLock, PoisonError};
use std::time::Duration;

use gw2_domain::{ClientConfig, RateLimit};
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, trace};

/// Sliding-window limiter: at most `limit` acquisitions in any `period`.
///
/// Callers over the budget wait; nothing is rejected.
#[derive(Debug)]
pub struct Throttle {
    limit: usize,
    period: Duration,
    granted: Mutex<VecDeque<Instant>>,
}

impl Throttle {
    /// Creates a limiter for `rate_limit`. A zero request budget is treated
    /// as one.
    #[must_use]
    pub fn new(rate_limit: RateLimit) -> Self {
        let limit = usize::try_from(rate_limit.requests).unwrap_or(usize::MAX).max(1);
        Self {
            limit,
            period: rate_limit.period(),
            granted: Mutex::new(VecDeque::with_capacity(limit)),
        }
    }

    /// The process-wide limiter for the API at `config.base_url` under
    /// `config.rate_limit`.
    ///
    /// Configs naming the same origin and budget share one limiter; a
    /// different budget for the same origin gets its own.
    #[must_use]
    pub fn shared(config: &ClientConfig) -> Arc<Self> {
        static REGISTRY: OnceLock<StdMutex<HashMap<(String, RateLimit), Arc<Throttle>>>> =
            OnceLock::new();

        let origin = config.base_url.origin().ascii_serialization();
        let mut registry = REGISTRY
            .get_or_init(StdMutex::default)
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if registry
            .keys()
            .any(|(known, limit)| *known == origin && *limit != config.rate_limit)
        {
            debug!(
                %origin,
                requests = config.rate_limit.requests,
                period_secs = config.rate_limit.period_secs,
                "separate throttle for a second budget on one origin"
            );
        }
        Arc::clone(
            registry
                .entry((origin, config.rate_limit))
                .or_insert_with(|| Arc::new(Self::new(config.rate_limit))),
        )
    }

    /// Maximum acquisitions per window.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Length of the window.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Waits until a request may be sent, then records it.
    pub async fn acquire(&self) {
        loop {
            let wait_until = {
                let mut granted = self.granted.lock().await;
                let now = Instant::now();
                while granted
                    .front()
                    .is_some_and(|at| now.duration_since(*at) >= self.period)
                {
                    granted.pop_front();
                }
                if granted.len() < self.limit {
                    granted.push_back(now);
                    trace!(in_window = granted.len(), "throttle slot granted");
                    return;
                }
                match granted.front() {
                    Some(oldest) => *oldest + self.period,
                    None => now,
                }
            };
            trace!(
                wait_ms = wait_until.saturating_duration_since(Instant::now()).as_millis(),
                "throttle budget exhausted, waiting"
            );
            sleep_until(wait_until).await;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test(start_paused = true)]
    async fn test_within_budget_does_not_wait() {
        let throttle = Throttle::new(RateLimit::new(3, 60));
        let start = Instant::now();
        for _ in 0..3 {
            throttle.acquire().await;
        }
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_over_budget_waits_for_window() {
        let throttle = Throttle::new(RateLimit::new(2, 60));
        let start = Instant::now();
        for _ in 0..3 {
            throttle.acquire().await;
        }
        assert_eq!(start.elapsed(), Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn test_window_slides() {
        let throttle = Throttle::new(RateLimit::new(2, 60));
        let start = Instant::now();
        throttle.acquire().await;
        tokio::time::sleep(Duration::from_secs(30)).await;
        throttle.acquire().await;

        // The first slot frees at 60s, the second at 90s.
        throttle.acquire().await;
        assert_eq!(start.elapsed(), Duration::from_secs(60));
        throttle.acquire().await;
        assert_eq!(start.elapsed(), Duration::from_secs(90));
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_callers_share_budget() {
        let throttle = Arc::new(Throttle::new(RateLimit::new(300, 60)));
        let start = Instant::now();
        let tasks: Vec<_> = (0..301)
            .map(|_| {
                let throttle = Arc::clone(&throttle);
                tokio::spawn(async move {
                    throttle.acquire().await;
                    Instant::now()
                })
            })
            .collect();

        let mut finished = Vec::new();
        for task in tasks {
            finished.push(task.await.unwrap());
        }
        let waited = finished
            .iter()
            .filter(|at| at.duration_since(start) >= Duration::from_secs(60))
            .count();
        assert_eq!(waited, 1);
    }

    #[test]
    fn test_shared_per_origin() {
        let official = ClientConfig::official();
        let mirror = ClientConfig::mirror();
        assert!(Arc::ptr_eq(
            &Throttle::shared(&official),
            &Throttle::shared(&official)
        ));
        assert!(!Arc::ptr_eq(
            &Throttle::shared(&official),
            &Throttle::shared(&mirror)
        ));
        assert_eq!(Throttle::shared(&mirror).limit(), 600);
    }

    #[test]
    fn test_shared_honours_configured_budget() {
        let url = "https://budget.example.test/v2";
        let default = ClientConfig::official().with_base_url(url).unwrap();
        let tight = default.clone().with_rate_limit(RateLimit::new(5, 60));

        let first = Throttle::shared(&default);
        let second = Throttle::shared(&tight);
        assert_eq!(first.limit(), 300);
        assert_eq!(second.limit(), 5);
        assert_eq!(second.period(), Duration::from_secs(60));
        assert!(!Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&second, &Throttle::shared(&tight)));
    }
}
