//! Catalogue endpoints against a loopback server.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::MockApi;
use gw2::catalog::RecipeQuery;
use gw2::models::DungeonPathKind;
use gw2::prelude::*;
use gw2::EndpointShape;
use gw2_domain::config::SCHEMA_VERSION;
use gw2_domain::DomainError;
use pretty_assertions::assert_eq;

const DUNGEON: &str = r#"{
    "id": "ascalonian_catacombs",
    "paths": [
        {"id": "ac_story", "type": "Story"},
        {"id": "hodgins", "type": "Explorable"}
    ]
}"#;

const GUILD: &str = r#"{
    "id": "116E0C0E-0035-44A9-BB22-4AE3E23127E5",
    "name": "Lords of Ascalon",
    "tag": "LoA"
}"#;

const BUILD_TABS: &str = r#"[
    {"tab": 1, "is_active": true, "build": {"name": "Power", "profession": "Engineer"}},
    {"tab": 2, "is_active": false, "build": {"name": "Condi", "profession": "Engineer"}}
]"#;

#[tokio::test]
async fn test_dungeons_and_dungeon() {
    let api = MockApi::start(|request| match request.param("id") {
        None => (200, r#"["ascalonian_catacombs","caudecus_manor"]"#.to_string()),
        Some(_) => (200, DUNGEON.to_string()),
    })
    .await;
    let client = api.client();

    let dungeons = client.dungeons().unwrap();
    assert_eq!(dungeons.shape(), EndpointShape::RawList);
    assert_eq!(
        dungeons.get().await.unwrap(),
        vec!["ascalonian_catacombs", "caudecus_manor"]
    );

    let dungeon = client
        .dungeon("ascalonian_catacombs")
        .unwrap()
        .get()
        .await
        .unwrap();
    assert_eq!(dungeon.paths.len(), 2);
    assert_eq!(dungeon.paths[0].kind, DungeonPathKind::Story);

    let sent = api.requests();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].path, "/v2/dungeons");
    assert!(sent[0].query.is_empty());
    assert_eq!(sent[1].path, "/v2/dungeons");
    assert_eq!(sent[1].param("id"), Some("ascalonian_catacombs"));
    assert_eq!(sent[1].param("ids"), None);
}

#[tokio::test]
async fn test_fixed_headers() {
    let api = MockApi::start(|_| (200, r#"{"id":115267}"#.to_string())).await;

    let build = api.client().build().unwrap().get().await.unwrap();
    assert_eq!(build.id, 115_267);

    let sent = &api.requests()[0];
    assert_eq!(sent.header("accept"), Some("application/json"));
    assert_eq!(sent.header("accept-language"), Some("en"));
    assert_eq!(sent.header("x-schema-version"), Some(SCHEMA_VERSION));
    assert!(sent.header("user-agent").unwrap().starts_with("gw2-rs/"));
    assert_eq!(sent.header("authorization"), None);
}

#[tokio::test]
async fn test_children_inherit_key_independently() {
    let api = MockApi::start(|_| (200, "[]".to_string())).await;
    let mut account = api.client_with_key("PARENT").account().unwrap();

    let mut wallet = account.wallet().unwrap();
    let achievements = account.achievements().unwrap();
    assert_eq!(wallet.api_key().unwrap().expose(), "PARENT");

    account.auth(Some(ApiKey::new("CHANGED").unwrap()));
    wallet.auth(None);
    assert_eq!(achievements.api_key().unwrap().expose(), "PARENT");

    wallet.get().await.unwrap();
    achievements.get().await.unwrap();
    account.dungeons().unwrap().get().await.unwrap();

    let bearers: Vec<Option<String>> = api
        .requests()
        .iter()
        .map(|r| r.bearer().map(ToString::to_string))
        .collect();
    assert_eq!(
        bearers,
        vec![None, Some("PARENT".to_string()), Some("CHANGED".to_string())]
    );
    assert_eq!(
        api.paths(),
        vec![
            "/v2/account/wallet",
            "/v2/account/achievements",
            "/v2/account/dungeons"
        ]
    );
}

#[tokio::test]
async fn test_character_paths_are_encoded() {
    let api = MockApi::start(|request| {
        if !request.path.ends_with("/buildtabs") {
            return (200, "[]".to_string());
        }
        match request.param("tabs") {
            None => (200, "[1,2,3]".to_string()),
            Some(_) => (200, BUILD_TABS.to_string()),
        }
    })
    .await;
    let character = api.client_with_key("KEY").character("Zojja Of Rata").unwrap();
    assert_eq!(character.name(), "Zojja Of Rata");

    let tabs = character.build_tabs().unwrap();
    assert_eq!(tabs.ids().await.unwrap(), vec![1, 2, 3]);
    let fetched = tabs
        .many_collected(vec![1, 2].into(), Resolution::Sequential)
        .await
        .unwrap();
    let numbers: Vec<u32> = fetched.iter().map(|tab| tab.tab).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert!(fetched[0].is_active);
    assert_eq!(fetched[1].build.profession, "Engineer");

    let sent = api.requests();
    assert_eq!(sent[0].path, "/v2/characters/Zojja%20Of%20Rata/buildtabs");
    assert_eq!(sent[1].param("tabs"), Some("1,2"));
    assert_eq!(sent[1].bearer(), Some("KEY"));
}

#[tokio::test]
async fn test_dot_segments_are_rejected() {
    let api = MockApi::start(|_| (200, "{}".to_string())).await;
    let client = api.client();

    for id in [".", ".."] {
        let err = client.guild(id).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Domain(DomainError::DotSegment { ref value, .. }) if value == id
        ));
        assert!(client.character(id).is_err());
    }
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn test_continent_floors() {
    let api = MockApi::start(|_| (200, "[-2,-1,0,1]".to_string())).await;
    let continent = api.client().continent(1).unwrap();

    let floors = continent.floors().unwrap().ids().await.unwrap();
    assert_eq!(floors, vec![-2, -1, 0, 1]);
    let floor = continent.floor(-1).unwrap();
    assert!(floor.url().as_str().ends_with("/v2/continents/1/floors/-1"));

    assert_eq!(api.paths(), vec!["/v2/continents/1/floors"]);
}

#[tokio::test]
async fn test_guild_search_fetches_first_match() {
    let api = MockApi::start(|request| {
        if request.path == "/v2/guild/search" {
            (
                200,
                r#"["116E0C0E-0035-44A9-BB22-4AE3E23127E5"]"#.to_string(),
            )
        } else {
            (200, GUILD.to_string())
        }
    })
    .await;

    let search = api.client().guild_search("Lords of Ascalon").unwrap();
    let guild = search.get().await.unwrap();
    assert_eq!(guild.tag, "LoA");

    let sent = api.requests();
    assert_eq!(sent[0].param("name"), Some("Lords of Ascalon"));
    assert_eq!(
        sent[1].path,
        "/v2/guild/116E0C0E-0035-44A9-BB22-4AE3E23127E5"
    );
}

#[tokio::test]
async fn test_recipe_search() {
    let api = MockApi::start(|_| (200, "[7314,7315]".to_string())).await;

    let ids = api
        .client()
        .recipe_search(RecipeQuery::Output(46731))
        .unwrap()
        .get()
        .await
        .unwrap();
    assert_eq!(ids, vec![7314, 7315]);
    assert_eq!(api.requests()[0].param("output"), Some("46731"));
}

#[tokio::test]
async fn test_close_releases_endpoint() {
    let api = MockApi::start(|_| (200, r#"{"id":1}"#.to_string())).await;
    let build = api.client().build().unwrap();
    build.get().await.unwrap();
    build.close();
    assert_eq!(api.requests().len(), 1);
}
