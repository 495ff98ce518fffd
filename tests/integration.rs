//! End-to-end tests for the fetch-and-render cycle against a mock signal API.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use signalboard::{App, PriceDirection, SignalsClient};

fn signal_json(symbol: &str, signal_type: &str, price: f64) -> serde_json::Value {
    json!({
        "symbol": symbol,
        "signal_type": signal_type,
        "current_price": price,
        "signal_update_time": "2024-03-05T07:08:09Z",
    })
}

async fn mount_signals(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/signals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .up_to_n_times(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn client_fetches_and_decodes_the_signal_list() {
    let server = MockServer::start().await;
    mount_signals(
        &server,
        json!([signal_json("BTC/USDT", "buy", 64000.5)]),
    )
    .await;

    let client = SignalsClient::new(&server.uri());
    let signals = client.get_signals().await.expect("fetch succeeds");

    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].symbol, "BTC/USDT");
    assert_eq!(signals[0].current_price, 64000.5);
}

#[tokio::test]
async fn client_rejects_error_status_and_bad_payloads() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/signals"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let client = SignalsClient::new(&server.uri());
    assert!(client.get_signals().await.is_err());

    mount_signals(&server, json!({"error": "not an array"})).await;
    assert!(client.get_signals().await.is_err());
}

#[tokio::test]
async fn refresh_populates_rows_and_counts() {
    let server = MockServer::start().await;
    mount_signals(
        &server,
        json!([
            signal_json("A", "buy", 1.0),
            signal_json("B", "SELL", 2.0),
            signal_json("C", "hold", 3.0),
            signal_json("D", "exit", 4.0),
            signal_json("E", "unknown", 5.0),
        ]),
    )
    .await;

    let mut app = App::new(&server.uri(), 30);
    app.refresh().await.expect("refresh never propagates errors");

    assert_eq!(app.rows.len(), 5);
    assert_eq!(app.counts.buy, 1);
    assert_eq!(app.counts.sell, 1);
    assert_eq!(app.counts.hold, 1);
    assert_eq!(app.counts.exit, 1);
    // First sighting of every symbol, so no direction markers yet
    assert!(app
        .rows
        .iter()
        .all(|row| row.direction == PriceDirection::Flat));
    assert!(app.error_message.is_none());
}

#[tokio::test]
async fn directions_follow_price_moves_across_refreshes() {
    let server = MockServer::start().await;
    mount_signals(
        &server,
        json!([
            signal_json("BTC/USDT", "buy", 64000.0),
            signal_json("ETH/USDT", "hold", 3000.0),
        ]),
    )
    .await;
    mount_signals(
        &server,
        json!([
            signal_json("BTC/USDT", "buy", 64100.0),
            signal_json("ETH/USDT", "hold", 2900.0),
            signal_json("SOL/USDT", "sell", 150.0),
        ]),
    )
    .await;

    let mut app = App::new(&server.uri(), 30);
    app.refresh().await.expect("first refresh");
    app.refresh().await.expect("second refresh");

    assert_eq!(app.rows[0].direction, PriceDirection::Up);
    assert_eq!(app.rows[1].direction, PriceDirection::Down);
    assert_eq!(app.rows[2].direction, PriceDirection::Flat);
}

#[tokio::test]
async fn failed_fetch_keeps_previous_rows_and_surfaces_the_error() {
    let server = MockServer::start().await;
    mount_signals(&server, json!([signal_json("BTC/USDT", "buy", 64000.0)])).await;

    let mut app = App::new(&server.uri(), 30);
    app.refresh().await.expect("initial refresh");
    assert_eq!(app.rows.len(), 1);

    // No mock left mounted, so the next fetch hits a 404
    let result = app.refresh().await;
    assert!(result.is_ok(), "fetch failure must not propagate");
    assert_eq!(app.rows.len(), 1, "stale rows stay visible");
    assert_eq!(app.counts.buy, 1);
    assert!(app.error_message.is_some());

    // A later successful fetch clears the error again
    mount_signals(&server, json!([signal_json("BTC/USDT", "sell", 63000.0)])).await;
    app.refresh().await.expect("recovery refresh");
    assert!(app.error_message.is_none());
    assert_eq!(app.rows[0].direction, PriceDirection::Down);
}
