//! Integration tests for command dispatch

mod common;

use btc_price_bot::bot::{Command, Dispatcher, Response, INFO_FALLBACK, PRICE_FALLBACK};
use btc_price_bot::format::format_money;
use btc_price_bot::present::{CAD_FIELD, UPDATED_FIELD, USD_FIELD};
use common::{network_error, sample_quote, FixedSource, ScriptedSource};
use std::sync::Arc;

#[tokio::test]
async fn test_price_reply_any_casing() {
    let source = Arc::new(FixedSource::new(sample_quote()));
    let dispatcher = Dispatcher::new(source.clone());

    for text in ["!price", "!PRICE", "!PrIcE"] {
        let response = dispatcher.dispatch(text).await;
        assert_eq!(
            response,
            Some(Response::Reply(
                "The current Bitcoin price in CAD is: $68000.00".to_string()
            ))
        );
    }
    assert_eq!(source.calls(), 3);
}

#[tokio::test]
async fn test_price_network_failure_falls_back() {
    let source = Arc::new(ScriptedSource::new(vec![Err(network_error().await)]));
    let dispatcher = Dispatcher::new(source.clone());

    let response = dispatcher.dispatch("!price").await;

    assert_eq!(
        response,
        Some(Response::Reply("Failed to fetch Bitcoin price.".to_string()))
    );
    assert_eq!(PRICE_FALLBACK, "Failed to fetch Bitcoin price.");
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_btcinfo_panel() {
    let quote = sample_quote();
    let dispatcher = Dispatcher::new(Arc::new(FixedSource::new(quote.clone())));

    let Some(Response::Panel(panel)) = dispatcher.dispatch("!btcinfo").await else {
        panic!("expected a panel");
    };

    assert_eq!(panel.fields.len(), 3);
    assert_eq!(panel.fields[0].name, USD_FIELD);
    assert_eq!(panel.fields[1].name, CAD_FIELD);
    assert_eq!(panel.fields[2].name, UPDATED_FIELD);
    assert_eq!(panel.fields[1].value, format_money(quote.cad_price));
    assert_eq!(panel.fields[2].value, quote.updated_at);
}

#[tokio::test]
async fn test_btcinfo_failure_falls_back() {
    let dispatcher = Dispatcher::new(Arc::new(ScriptedSource::new(vec![Err(
        btc_price_bot::price::FetchError::Parse,
    )])));

    let response = dispatcher.dispatch("!BTCINFO").await;

    assert_eq!(response, Some(Response::Reply(INFO_FALLBACK.to_string())));
}

#[tokio::test]
async fn test_help_needs_no_fetch() {
    let source = Arc::new(ScriptedSource::new(vec![]));
    let dispatcher = Dispatcher::new(source.clone());

    let Some(Response::Panel(panel)) = dispatcher.dispatch("!help").await else {
        panic!("expected a panel");
    };

    assert_eq!(panel.title, "Bitcoin Bot Commands");
    let names: Vec<&str> = panel.fields.iter().map(|f| f.name.as_str()).collect();
    let triggers: Vec<&str> = Command::ALL.iter().map(|c| c.trigger()).collect();
    assert_eq!(names, triggers);
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_unrecognized_is_ignored() {
    let source = Arc::new(ScriptedSource::new(vec![]));
    let dispatcher = Dispatcher::new(source.clone());

    for text in ["hello", "", "!price please", "price"] {
        assert_eq!(dispatcher.dispatch(text).await, None);
    }
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_concurrent_commands_are_independent() {
    let source = Arc::new(FixedSource::new(sample_quote()));
    let dispatcher = Dispatcher::new(source.clone());

    let (a, b, c) = tokio::join!(
        dispatcher.dispatch("!price"),
        dispatcher.dispatch("!btcinfo"),
        dispatcher.dispatch("!price"),
    );

    assert!(matches!(a, Some(Response::Reply(_))));
    assert!(matches!(b, Some(Response::Panel(_))));
    assert_eq!(a, c);
    assert_eq!(source.calls(), 3);
}
