//! Rate limiting across endpoint instances.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use std::time::{Duration, Instant};

use common::MockApi;
use gw2::prelude::*;
use gw2::RateLimit;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_excess_requests_wait_instead_of_failing() {
    let api = MockApi::start(|_| (200, r#"{"id":1}"#.to_string())).await;
    let config = api.config().with_rate_limit(RateLimit::new(3, 1));
    let client = Gw2Client::from_config(&config).unwrap();

    let start = Instant::now();
    let builds: Vec<_> = (0..5).map(|_| client.build().unwrap()).collect();
    let results = futures::future::join_all(builds.iter().map(|b| b.get())).await;

    assert!(results.iter().all(Result::is_ok));
    assert_eq!(api.requests().len(), 5);
    assert!(start.elapsed() >= Duration::from_millis(900), "{:?}", start.elapsed());
}
