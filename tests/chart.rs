use financelite::{FinClient, FinError, Ticker};
use httpmock::{Method::GET, MockServer};
use url::Url;

fn client_for(server: &MockServer) -> FinClient {
    FinClient::builder()
        .base_chart(Url::parse(&format!("{}/v8/finance/chart/", server.base_url())).unwrap())
        .build()
        .unwrap()
}

const CHART_BODY: &str = r#"{
  "chart": {
    "result": [
      {
        "meta": {
          "currency": "USD",
          "symbol": "AAPL",
          "regularMarketPrice": 190.25,
          "timezone": "EST"
        },
        "timestamp": [1700000000, 1700086400, 1700172800],
        "indicators": {
          "quote": [
            {"close": [189.5, null, 190.25]}
          ]
        }
      }
    ],
    "error": null
  }
}"#;

#[tokio::test]
async fn chart_happy_path() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("interval", "1d")
            .query_param("range", "5d");
        then.status(200)
            .header("content-type", "application/json")
            .body(CHART_BODY);
    });

    let client = client_for(&server);
    let chart = Ticker::new(&client, "AAPL").chart("1d", "5d").await.unwrap();
    mock.assert();

    assert_eq!(chart.meta.currency.as_deref(), Some("USD"));
    assert_eq!(chart.meta.symbol.as_deref(), Some("AAPL"));
    assert_eq!(chart.timestamps.len(), 3);
    assert_eq!(chart.closes, vec![Some(189.5), None, Some(190.25)]);
}

#[tokio::test]
async fn provider_error_wins_over_result() {
    let server = MockServer::start();

    let body = r#"{
      "chart": {
        "result": null,
        "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
      }
    }"#;

    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/NOTREAL");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let client = client_for(&server);
    match Ticker::new(&client, "NOTREAL").chart("1d", "5d").await {
        Err(FinError::DataRequest(msg)) => {
            assert_eq!(msg, "No data found, symbol may be delisted");
        }
        other => panic!("expected DataRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_result_list_is_rejected() {
    let server = MockServer::start();

    let body = r#"{"chart": {"result": [], "error": null}}"#;
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/AAPL");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let client = client_for(&server);
    match Ticker::new(&client, "AAPL").chart("1d", "5d").await {
        Err(FinError::DataRequest(msg)) => assert!(msg.contains("AAPL")),
        other => panic!("expected DataRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn live_price_comes_from_chart_meta() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("interval", "1d")
            .query_param("range", "1d");
        then.status(200)
            .header("content-type", "application/json")
            .body(CHART_BODY);
    });

    let client = client_for(&server);
    let live = Ticker::new(&client, "AAPL").live().await.unwrap();
    mock.assert();

    assert!((live.price - 190.25).abs() < 1e-9);
    assert_eq!(live.currency.as_deref(), Some("USD"));
}

#[tokio::test]
async fn history_collapses_gaps_and_keeps_bounds() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("interval", "1d")
            .query_param("range", "3mo");
        then.status(200)
            .header("content-type", "application/json")
            .body(CHART_BODY);
    });

    let client = client_for(&server);
    let hist = Ticker::new(&client, "AAPL").history("3mo").await.unwrap();
    mock.assert();

    assert_eq!(hist.closes, vec![189.5, 190.25]);
    assert_eq!(hist.currency.as_deref(), Some("USD"));
    assert_eq!(hist.start.unwrap().timestamp(), 1_700_000_000);
    assert_eq!(hist.end.unwrap().timestamp(), 1_700_172_800);
}

#[tokio::test]
async fn malformed_range_fails_before_any_request() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("{}");
    });

    let client = client_for(&server);
    let ticker = Ticker::new(&client, "AAPL");

    for range in ["abc", "5", "d5", "-3d", "0d"] {
        match ticker.history(range).await {
            Err(FinError::DataRequest(msg)) => assert!(msg.contains(range), "msg: {msg}"),
            other => panic!("expected DataRequest for {range}, got {other:?}"),
        }
    }

    mock.assert_hits(0);
}

#[tokio::test]
async fn case_insensitive_ranges_reach_the_provider() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("range", "2Y");
        then.status(200)
            .header("content-type", "application/json")
            .body(CHART_BODY);
    });

    let client = client_for(&server);
    Ticker::new(&client, "AAPL").history("2Y").await.unwrap();
    mock.assert();
}
