//! End-to-end checks of the resolve and jurisdictions commands against a
//! mock permit API.

use permit_cmd::jurisdictions::list_enabled;
use permit_cmd::resolve::resolve_address;
use permit_core::client::PermitApiClient;
use permit_core::resolution::ResolutionSource;
use permit_core::{Geocoder, ResolutionState, ResolveOutcome};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn springfield() -> serde_json::Value {
    json!({
        "id": "1",
        "name": "Springfield",
        "qualifier": "City",
        "slug": "springfield",
        "reverseQualifiedName": "Springfield, City of",
        "qualifiedName": "City of Springfield"
    })
}

fn shelbyville() -> serde_json::Value {
    json!({
        "id": "7",
        "name": "Shelbyville",
        "qualifier": "Town",
        "slug": "shelbyville",
        "reverseQualifiedName": "Shelbyville, Town of",
        "qualifiedName": "Town of Shelbyville"
    })
}

async fn mock_geocoder(server: &MockServer, address: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/geocoder/jurisdiction"))
        .and(query_param("site_id", address))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn resolves_matching_address() {
    let server = MockServer::start().await;
    mock_geocoder(
        &server,
        "123 Main St",
        ResponseTemplate::new(200).set_body_json(json!({ "data": springfield() })),
    )
    .await;

    let client = PermitApiClient::new(server.uri());
    let report = resolve_address(&client, "123 Main St", None).await.unwrap();

    assert_eq!(report.outcome, ResolveOutcome::Resolved);
    let jurisdiction = report.state.jurisdiction().unwrap();
    assert_eq!(jurisdiction.name, "Springfield");
    assert_eq!(jurisdiction.detail_path(), "/jurisdictions/springfield");
    assert!(report.registered.is_empty());
}

#[tokio::test]
async fn null_data_is_no_match() {
    let server = MockServer::start().await;
    mock_geocoder(
        &server,
        "999 Nowhere",
        ResponseTemplate::new(200).set_body_json(json!({ "data": null })),
    )
    .await;

    let client = PermitApiClient::new(server.uri());
    let report = resolve_address(&client, "999 Nowhere", None).await.unwrap();

    assert_eq!(report.outcome, ResolveOutcome::NoMatch);
    assert_eq!(report.state, ResolutionState::Manual);
}

#[tokio::test]
async fn not_found_is_no_match() {
    let server = MockServer::start().await;
    mock_geocoder(&server, "999 Nowhere", ResponseTemplate::new(404)).await;

    let client = PermitApiClient::new(server.uri());
    let report = resolve_address(&client, "999 Nowhere", None).await.unwrap();

    assert_eq!(report.outcome, ResolveOutcome::NoMatch);
    assert_eq!(report.state, ResolutionState::Manual);
}

#[tokio::test]
async fn server_error_falls_back_to_manual_mode() {
    let server = MockServer::start().await;
    mock_geocoder(&server, "1 Error Way", ResponseTemplate::new(500)).await;

    let client = PermitApiClient::new(server.uri());
    let report = resolve_address(&client, "1 Error Way", None).await.unwrap();

    assert_eq!(report.outcome, ResolveOutcome::LookupFailed);
    assert_eq!(report.state, ResolutionState::Manual);
}

#[tokio::test]
async fn incomplete_jurisdiction_is_a_lookup_failure() {
    let server = MockServer::start().await;
    mock_geocoder(
        &server,
        "123 Main St",
        ResponseTemplate::new(200)
            .set_body_json(json!({ "data": { "id": "1", "name": "Springfield", "slug": "" } })),
    )
    .await;

    let client = PermitApiClient::new(server.uri());
    let report = resolve_address(&client, "123 Main St", None).await.unwrap();

    assert_eq!(report.outcome, ResolveOutcome::LookupFailed);
    assert_eq!(report.state, ResolutionState::Manual);
}

#[tokio::test]
async fn empty_address_is_sent_to_geocoder() {
    let server = MockServer::start().await;
    mock_geocoder(
        &server,
        "",
        ResponseTemplate::new(200).set_body_json(json!({ "data": null })),
    )
    .await;

    let client = PermitApiClient::new(server.uri());
    let report = resolve_address(&client, "", None).await.unwrap();

    assert_eq!(report.outcome, ResolveOutcome::NoMatch);
}

#[tokio::test]
async fn fallback_search_picks_and_registers_jurisdiction() {
    let server = MockServer::start().await;
    mock_geocoder(&server, "999 Nowhere", ResponseTemplate::new(404)).await;
    Mock::given(method("POST"))
        .and(path("/api/jurisdictions/search"))
        .and(body_partial_json(json!({ "query": "shelby", "page": 1 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [shelbyville()],
            "meta": { "totalPages": 1, "currentPage": 1 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PermitApiClient::new(server.uri());
    let report = resolve_address(&client, "999 Nowhere", Some("shelby"))
        .await
        .unwrap();

    assert_eq!(report.outcome, ResolveOutcome::NoMatch);
    assert_eq!(report.registered.len(), 1);
    assert_eq!(report.registered[0].id, "7");
    match report.state {
        ResolutionState::Resolved {
            jurisdiction,
            source,
        } => {
            assert_eq!(jurisdiction.slug, "shelbyville");
            assert_eq!(source, ResolutionSource::Manual);
        }
        other => panic!("expected a resolved state, got {:?}", other),
    }
}

#[tokio::test]
async fn fallback_is_ignored_when_address_resolves() {
    let server = MockServer::start().await;
    mock_geocoder(
        &server,
        "123 Main St",
        ResponseTemplate::new(200).set_body_json(json!({ "data": springfield() })),
    )
    .await;

    let client = PermitApiClient::new(server.uri());
    let report = resolve_address(&client, "123 Main St", Some("shelby"))
        .await
        .unwrap();

    assert_eq!(report.state.jurisdiction().unwrap().id, "1");
    assert!(report.registered.is_empty());
}

#[tokio::test]
async fn lists_enabled_jurisdictions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jurisdictions/search"))
        .and(body_partial_json(json!({
            "perPage": 12,
            "filters": { "enabled": true }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [shelbyville(), springfield(), { "id": "3", "name": "No Slug", "slug": "" }],
            "meta": { "totalPages": 3, "currentPage": 1 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PermitApiClient::new(format!("{}/", server.uri()));
    let page = list_enabled(&client, 12).await.unwrap();

    assert_eq!(page.jurisdictions.len(), 2);
    assert_eq!(page.total_pages, 3);
    assert!(page.has_more());
}

#[tokio::test]
async fn enabled_search_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jurisdictions/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = PermitApiClient::new(server.uri());
    let err = list_enabled(&client, 12).await.unwrap_err();
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn fetches_site_options() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/geocoder/site_options"))
        .and(query_param("address", "123 Ma"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "label": "123 Main St, Springfield", "value": "123 Main St" }]
        })))
        .mount(&server)
        .await;

    let client = PermitApiClient::new(server.uri());
    let options = client.fetch_site_options("123 Ma").await.unwrap();

    assert_eq!(options.len(), 1);
    assert_eq!(options[0].value, "123 Main St");
}
