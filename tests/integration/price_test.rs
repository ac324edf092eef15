//! Integration tests for the CoinDesk client against a local HTTP server

use btc_price_bot::price::{CoinDeskClient, CoinDeskConfig, FetchError, PriceSource};
use rust_decimal_macros::dec;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const BODY: &str = r#"{"time":{"updated":"Jan 1, 2024 00:00:00 UTC","updatedISO":"2024-01-01T00:00:00+00:00"},"bpi":{"USD":{"code":"USD","rate":"50,000.0000","rate_float":50000.0}}}"#;

/// Serve one canned response and return the URL to hit
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{}/v1/bpi/currentprice.json", addr)
}

fn client(api_url: String, timeout: Duration) -> CoinDeskClient {
    CoinDeskClient::with_config(CoinDeskConfig { api_url, timeout }).unwrap()
}

#[tokio::test]
async fn test_fetch_success() {
    let url = serve_once("200 OK", BODY).await;
    let quote = tokio_test::assert_ok!(client(url, Duration::from_secs(5)).fetch().await);

    assert_eq!(quote.usd_price, dec!(50000));
    assert_eq!(quote.cad_price, dec!(68000.00));
    assert_eq!(quote.updated_at, "Jan 1, 2024 00:00:00 UTC");
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let url = serve_once("200 OK", r#"{"bpi":{}}"#).await;
    let err = tokio_test::assert_err!(client(url, Duration::from_secs(5)).fetch().await);
    assert!(matches!(err, FetchError::Parse));
}

#[tokio::test]
async fn test_fetch_out_of_range_rate() {
    let url = serve_once(
        "200 OK",
        r#"{"time":{"updated":"t"},"bpi":{"USD":{"rate_float":7e28}}}"#,
    )
    .await;
    let err = tokio_test::assert_err!(client(url, Duration::from_secs(5)).fetch().await);
    assert!(matches!(err, FetchError::Parse));
}

#[tokio::test]
async fn test_fetch_error_page_is_parse_error() {
    let url = serve_once("503 Service Unavailable", "upstream down").await;
    let err = tokio_test::assert_err!(client(url, Duration::from_secs(5)).fetch().await);
    assert!(matches!(err, FetchError::Parse));
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = format!("http://{}/v1/bpi/currentprice.json", addr);
    let err = tokio_test::assert_err!(client(url, Duration::from_secs(5)).fetch().await);
    assert!(matches!(err, FetchError::Network(_)));
    assert_eq!(err.kind(), "network");
}

#[tokio::test]
async fn test_fetch_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        // Accept and never answer
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
    });

    let url = format!("http://{}/", addr);
    let err = tokio_test::assert_err!(client(url, Duration::from_millis(200)).fetch().await);
    match err {
        FetchError::Network(e) => assert!(e.is_timeout()),
        other => panic!("expected network timeout, got {:?}", other),
    }
}
