use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nolasales_core::AppState;
use nolasales_feeds::FeedClient;
use nolasales_store::StateStore;

use super::{refresh_all, refresh_store};

fn test_client() -> FeedClient {
    FeedClient::new(5, "nolasales-test/0.1").expect("failed to build test FeedClient")
}

fn test_gateway(dir: &tempfile::TempDir) -> StateStore {
    StateStore::new(dir.path().join("nolasales-data.json"))
}

fn breaux_body(names: &[&str]) -> serde_json::Value {
    let items: Vec<_> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({
                "id": format!("{i}"),
                "name": name,
                "price": "$1.00",
                "sale_price": "$1.00"
            })
        })
        .collect();
    json!({"total": items.len(), "items": items})
}

#[tokio::test]
async fn refresh_store_commits_and_persists_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/breaux.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&breaux_body(&["CUCUMBER"])))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let gateway = test_gateway(&dir);
    let mut state = AppState::with_default_stores();
    state.store_mut("breaux-mart").unwrap().api_url = format!("{}/breaux.json", server.uri());

    let count = refresh_store(&test_client(), &gateway, &mut state, "breaux-mart")
        .await
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(state.sales.len(), 1);
    assert!(state.store("breaux-mart").unwrap().last_updated.is_some());
    assert!(state.last_global_update.is_some());

    // The mutation was persisted through the gateway.
    let on_disk = gateway.load().unwrap().unwrap();
    assert_eq!(on_disk, state);
}

#[tokio::test]
async fn refresh_store_replaces_prior_listing_and_leaves_others_alone() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/breaux.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&breaux_body(&["Ground Beef", "Ice Cream"])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/zupp.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([
            {"id": 1, "name": "Grapes\n2999", "price": ""}
        ])))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let gateway = test_gateway(&dir);
    let mut state = AppState::with_default_stores();
    state.store_mut("breaux-mart").unwrap().api_url = format!("{}/breaux.json", server.uri());
    state.store_mut("zuppardos").unwrap().api_url = format!("{}/zupp.json", server.uri());

    let client = test_client();
    refresh_store(&client, &gateway, &mut state, "zuppardos")
        .await
        .unwrap();
    refresh_store(&client, &gateway, &mut state, "breaux-mart")
        .await
        .unwrap();
    refresh_store(&client, &gateway, &mut state, "breaux-mart")
        .await
        .unwrap();

    assert_eq!(state.sales.len(), 2, "refetch must replace, not append");
    let breaux = state
        .sales
        .iter()
        .find(|s| s.store_name == "Breaux Mart")
        .unwrap();
    assert_eq!(breaux.products.len(), 2);
    let zupp = state
        .sales
        .iter()
        .find(|s| s.store_name == "Zuppardo's")
        .unwrap();
    assert_eq!(zupp.products[0].sale_price, "$2.99");
}

#[tokio::test]
async fn refresh_store_without_url_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = test_gateway(&dir);
    let mut state = AppState::with_default_stores();

    let err = refresh_store(&test_client(), &gateway, &mut state, "rouses")
        .await
        .unwrap_err();
    assert!(
        err.to_string().contains("no API URL configured for Rouses"),
        "unexpected error: {err:#}"
    );
    assert!(state.sales.is_empty());
    assert!(state.store("rouses").unwrap().last_updated.is_none());
}

#[tokio::test]
async fn refresh_store_unknown_id_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = test_gateway(&dir);
    let mut state = AppState::with_default_stores();

    let err = refresh_store(&test_client(), &gateway, &mut state, "piggly-wiggly")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("piggly-wiggly"));
}

#[tokio::test]
async fn refresh_store_surfaces_http_status_and_keeps_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/breaux.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let gateway = test_gateway(&dir);
    let mut state = AppState::with_default_stores();
    state.store_mut("breaux-mart").unwrap().api_url = format!("{}/breaux.json", server.uri());

    let err = refresh_store(&test_client(), &gateway, &mut state, "breaux-mart")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("500"), "unexpected error: {err:#}");
    assert!(state.sales.is_empty());
    assert!(state.last_global_update.is_none());
}

#[tokio::test]
async fn refresh_all_fetches_only_active_stores_with_urls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/breaux.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&breaux_body(&["CUCUMBER"])))
        .expect(1)
        .mount(&server)
        .await;
    // The inactive store's endpoint must never be hit.
    Mock::given(method("GET"))
        .and(path("/zupp.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let gateway = test_gateway(&dir);
    let mut state = AppState::with_default_stores();
    // A: active with URL.
    state.store_mut("breaux-mart").unwrap().api_url = format!("{}/breaux.json", server.uri());
    // B: inactive with URL.
    state.store_mut("zuppardos").unwrap().api_url = format!("{}/zupp.json", server.uri());
    state.store_mut("zuppardos").unwrap().is_active = false;
    // C: active without URL (dorignacs and the rest stay as seeded).

    let summary = refresh_all(&test_client(), &gateway, &mut state, Duration::ZERO)
        .await
        .unwrap();
    assert_eq!(summary.refreshed, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(state.sales.len(), 1);
    assert_eq!(state.sales[0].store_name, "Breaux Mart");
}

#[tokio::test]
async fn refresh_all_continues_past_a_failing_store() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/breaux.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/robert.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([
            {"id": 1, "name": "Chuck Roast $5.99", "price": ""}
        ])))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let gateway = test_gateway(&dir);
    let mut state = AppState::with_default_stores();
    state.store_mut("breaux-mart").unwrap().api_url = format!("{}/breaux.json", server.uri());
    state.store_mut("robert-fresh").unwrap().api_url = format!("{}/robert.json", server.uri());

    let summary = refresh_all(&test_client(), &gateway, &mut state, Duration::ZERO)
        .await
        .unwrap();
    assert_eq!(summary.refreshed, 1);
    assert_eq!(summary.failed, 1);
    let robert = state
        .sales
        .iter()
        .find(|s| s.store_name == "Robert Fresh Market")
        .unwrap();
    assert_eq!(robert.products[0].sale_price, "$5.99");
}

#[tokio::test]
async fn refresh_all_errors_when_every_store_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/breaux.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let gateway = test_gateway(&dir);
    let mut state = AppState::with_default_stores();
    state.store_mut("breaux-mart").unwrap().api_url = format!("{}/breaux.json", server.uri());

    let result = refresh_all(&test_client(), &gateway, &mut state, Duration::ZERO).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn refresh_all_with_no_eligible_stores_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = test_gateway(&dir);
    let mut state = AppState::with_default_stores();

    let summary = refresh_all(&test_client(), &gateway, &mut state, Duration::ZERO)
        .await
        .unwrap();
    assert_eq!(summary.refreshed, 0);
    assert_eq!(summary.failed, 0);
    assert!(gateway.load().unwrap().is_none(), "no-op must not persist");
}
