//! End-to-end lookups against an in-process stand-in for sec-api.io.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use nport_data::{FilingLookupService, FilingSummary, Holding, NportError, SecApiConfig};
use rstest::rstest;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

type Recorded = Arc<Mutex<Vec<(HashMap<String, String>, Value)>>>;

#[derive(Clone)]
struct Upstream {
    status: StatusCode,
    body: String,
    requests: Recorded,
}

async fn form_nport(
    State(upstream): State<Upstream>,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    upstream.requests.lock().await.push((params, body));
    (
        upstream.status,
        [(header::CONTENT_TYPE, "application/json")],
        upstream.body.clone(),
    )
}

async fn lookup_against(status: StatusCode, body: impl Into<String>) -> (FilingLookupService, Recorded) {
    let requests = Recorded::default();
    let upstream = Upstream {
        status,
        body: body.into(),
        requests: requests.clone(),
    };
    let app = Router::new()
        .route("/form-nport", post(form_nport))
        .with_state(upstream);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    let config = SecApiConfig::new("test-key")
        .unwrap()
        .with_base_url(format!("http://{addr}"));
    (FilingLookupService::from_config(config).unwrap(), requests)
}

fn spdr_payload() -> String {
    json!({
        "filings": [{
            "genInfo": {"regName": "SPDR S&P 500 ETF TRUST"},
            "invstOrSecs": [
                {"name": "APPLE INC", "cusip": "037833100", "balance": 1000, "valUSD": 150000.0}
            ]
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_spdr_lookup() {
    let (service, requests) = lookup_against(StatusCode::OK, spdr_payload()).await;

    let summary = service.get_recent_filing("0000884394").await.unwrap();
    assert_eq!(
        summary,
        FilingSummary {
            registrant_name: "SPDR S&P 500 ETF TRUST".to_string(),
            holdings: vec![Holding {
                name: "APPLE INC".to_string(),
                cusip: "037833100".to_string(),
                balance: 1000.0,
                value: 150000.0,
            }],
        }
    );

    let requests = requests.lock().await;
    assert_eq!(requests.len(), 1);
    let (params, body) = &requests[0];
    assert_eq!(params.get("token").map(String::as_str), Some("test-key"));
    assert_eq!(
        body,
        &json!({
            "query": "filerInfo.filer.issuerCredentials.cik:0000884394",
            "from": "0",
            "size": "1",
            "sort": [{"filedAt": {"order": "desc"}}],
        })
    );
}

#[tokio::test]
async fn test_service_unavailable() {
    // A well-formed body must still be ignored on a non-2xx status.
    let (service, _) = lookup_against(StatusCode::SERVICE_UNAVAILABLE, spdr_payload()).await;

    let err = service.get_recent_filing("0000884394").await.unwrap_err();
    assert!(matches!(err, NportError::UpstreamUnavailable(_)));
    assert!(err.to_string().starts_with("Failed to fetch filing"));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_no_filings() {
    let (service, _) = lookup_against(StatusCode::OK, r#"{"filings":[]}"#).await;

    let err = service.get_recent_filing("0000000000").await.unwrap_err();
    assert!(matches!(err, NportError::MalformedResult(_)));
}

#[rstest]
#[case::not_json("<html>oops</html>")]
#[case::wrong_type(r#"{"filings":[{"genInfo":{"regName":"X"},"invstOrSecs":[{"name":"A","cusip":"1","balance":"many","valUSD":1}]}]}"#)]
#[case::missing_filings(r#"{"total":{"value":0}}"#)]
#[case::missing_holdings(r#"{"filings":[{"genInfo":{"regName":"X"}}]}"#)]
#[tokio::test]
async fn test_malformed_payloads(#[case] body: &str) {
    let (service, _) = lookup_against(StatusCode::OK, body).await;

    let err = service.get_recent_filing("1").await.unwrap_err();
    assert!(
        matches!(err, NportError::MalformedResult(_)),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_order_and_fractional_balances_preserved() {
    let body = json!({
        "filings": [{
            "genInfo": {"regName": "MIXED FUND"},
            "invstOrSecs": [
                {"name": "ZETA", "cusip": "3", "balance": 0.5, "valUSD": 1.25},
                {"name": "ALPHA", "cusip": "1", "balance": 2, "valUSD": 99.99},
                {"name": "ZETA", "cusip": "3", "balance": 0.5, "valUSD": 1.25}
            ]
        }]
    });
    let (service, _) = lookup_against(StatusCode::OK, body.to_string()).await;

    let summary = service.get_recent_filing("7").await.unwrap();
    let names: Vec<_> = summary.holdings.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, ["ZETA", "ALPHA", "ZETA"]);
    assert_eq!(summary.holdings[0].balance, 0.5);
    assert_eq!(summary.holdings[1].value, 99.99);
}
