//! The gw2treasures mirror client.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::MockApi;
use gw2::prelude::*;
use gw2::{RateLimit, TreasuresClient};
use pretty_assertions::assert_eq;

fn item(id: &str) -> String {
    format!(
        r#"{{"id":{id},"name":"Item {id}","type":"Trophy","rarity":"Basic","level":0,"vendor_value":0,"flags":[],"chat_link":"[&AgEAAAA=]"}}"#
    )
}

fn client(api: &MockApi) -> TreasuresClient {
    let config = ClientConfig::mirror()
        .with_base_url(api.base_url.trim_end_matches("/v2"))
        .unwrap()
        .with_api_key(Some(ApiKey::new("TREASURES").unwrap()))
        .with_rate_limit(RateLimit::new(10_000, 60));
    TreasuresClient::from_config(&config).unwrap()
}

#[tokio::test]
async fn test_many_requests_each_id_by_path() {
    let api = MockApi::start(|request| {
        let id = request.path.split('/').nth(2).unwrap().to_string();
        (200, item(&id))
    })
    .await;
    let items = client(&api).items().unwrap();

    for resolution in [Resolution::Sequential, Resolution::Concurrent] {
        let records = items
            .many_collected(vec![30704, 19721].into(), resolution)
            .await
            .unwrap();
        let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![30704, 19721]);
    }

    let mut paths = api.paths();
    paths.sort();
    assert_eq!(
        paths,
        vec![
            "/items/19721/data",
            "/items/19721/data",
            "/items/30704/data",
            "/items/30704/data"
        ]
    );
    assert!(api.requests().iter().all(|r| r.bearer() == Some("TREASURES")));
}

#[tokio::test]
async fn test_all_selection_unsupported() {
    let api = MockApi::start(|_| (200, "[]".to_string())).await;
    let items = client(&api).items().unwrap();

    let err = items
        .many_collected(IdSelection::All, Resolution::Sequential)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::AllIdsUnsupported { .. }));
}

#[tokio::test]
async fn test_unauthorized_is_invalid_key() {
    let api = MockApi::start(|_| (401, "Unauthorized".to_string())).await;

    let err = client(&api).item(1).unwrap().get().await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidKey));
}

#[tokio::test]
async fn test_only_error_statuses_fail() {
    let api = MockApi::start(|request| {
        if request.path.ends_with("/achievements") {
            (206, "[1,2]".to_string())
        } else {
            (404, "not found".to_string())
        }
    })
    .await;
    let achievements = client(&api).achievements().unwrap();

    assert_eq!(achievements.ids().await.unwrap(), vec![1, 2]);
    let err = achievements.one(1).await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
}

#[tokio::test]
async fn test_single_record_path() {
    let api = MockApi::start(|_| {
        (
            200,
            r#"{"id":1,"name":"Centaur Slayer","type":"Default"}"#.to_string(),
        )
    })
    .await;

    let record = client(&api).achievement(1).unwrap().get().await.unwrap();
    assert_eq!(record.name, "Centaur Slayer");
    assert_eq!(api.paths(), vec!["/achievements/1/data"]);
}
