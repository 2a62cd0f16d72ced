//! Integration tests for the oracle over the real Gemini client
//!
//! A mockito server stands in for the Gemini REST endpoint.

use chrono::NaiveDate;
use lunar_almanac_backend::config::GeminiConfig;
use lunar_almanac_backend::domain::{CompatibilityResult, LunarDetails};
use lunar_almanac_backend::oracle::{Oracle, ADVICE_DISCONNECTED, ADVICE_NO_ANSWER};
use lunar_almanac_backend::views::{CompatibilityState, CompatibilityView};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use serial_test::serial;

const ENDPOINT: &str = "/models/gemini-2.5-flash:generateContent";

fn oracle_for(server: &ServerGuard) -> Oracle {
    Oracle::from_config(&GeminiConfig {
        api_key: "test-key".to_string(),
        base_url: server.url(),
        ..Default::default()
    })
}

/// Wrap `text` in a `generateContent` envelope
fn envelope(text: &str) -> String {
    json!({
        "candidates": [{
            "content": {"parts": [{"text": text}], "role": "model"},
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
#[serial]
async fn test_lunar_details_over_http() {
    let mut server = Server::new_async().await;
    let payload = json!({
        "lunarDate": "1/1",
        "lunarYear": "Giap Thin",
        "element": "Fire",
        "luckyHours": ["Ty"],
        "badHours": ["Suu"],
        "advice": "Welcome the spring.",
        "auspicious": ["pray", "visit", "give"],
        "inauspicious": ["argue", "sweep", "lend"]
    });
    let mock = server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "required": [
                        "lunarDate", "lunarYear", "element", "luckyHours",
                        "badHours", "advice", "auspicious", "inauspicious"
                    ]
                }
            }
        })))
        .with_status(200)
        .with_body(envelope(&payload.to_string()))
        .create_async()
        .await;

    let details = oracle_for(&server)
        .fetch_lunar_details(ymd(2024, 2, 10))
        .await;

    mock.assert_async().await;
    assert_eq!(details.lunar_date, "1/1");
    assert_eq!(details.advice, "Welcome the spring.");
}

#[tokio::test]
#[serial]
async fn test_lunar_details_malformed_payload_falls_back() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(envelope(r#"{"lunarDate": "1/1", "advice": "partial"}"#))
        .create_async()
        .await;

    let details = oracle_for(&server)
        .fetch_lunar_details(ymd(2024, 2, 10))
        .await;

    mock.assert_async().await;
    assert_eq!(details, LunarDetails::fallback());
}

#[tokio::test]
#[serial]
async fn test_compatibility_view_over_http() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .match_body(Matcher::Regex("1990-05-01".to_string()))
        .with_status(200)
        .with_body(envelope(
            r#"{"score": 78, "summary": "Good match", "details": "...", "elementAnalysis": "..."}"#,
        ))
        .create_async()
        .await;

    let oracle = oracle_for(&server);
    let mut view = CompatibilityView::new();
    view.set_first(Some(ymd(1990, 5, 1)));
    view.set_second(Some(ymd(1992, 11, 20)));
    assert!(view.check(&oracle).await);

    mock.assert_async().await;
    match view.state() {
        CompatibilityState::Resulted(result) => assert_eq!(result.score, 78),
        other => panic!("expected result, got {:?}", other),
    }
}

#[tokio::test]
#[serial]
async fn test_compatibility_server_error_falls_back() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal")
        .create_async()
        .await;

    let result = oracle_for(&server)
        .check_compatibility(ymd(1990, 5, 1), ymd(1992, 11, 20))
        .await;

    mock.assert_async().await;
    assert_eq!(result, CompatibilityResult::fallback());
}

#[tokio::test]
#[serial]
async fn test_advice_is_plain_text_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(json!({
            "contents": [{"parts": [{"text": "You are a wise feng shui virtual assistant. The user asks: \"Is today lucky?\". Answer briefly and helpfully, in a positive and spiritually healthy way."}]}]
        })))
        .with_status(200)
        .with_body(envelope("Today favors patience."))
        .create_async()
        .await;

    let reply = oracle_for(&server).get_advice("Is today lucky?").await;

    mock.assert_async().await;
    assert_eq!(reply, "Today favors patience.");
}

#[tokio::test]
#[serial]
async fn test_advice_empty_and_failed_replies() {
    let mut server = Server::new_async().await;
    let empty = server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(envelope(""))
        .create_async()
        .await;
    assert_eq!(oracle_for(&server).get_advice("hello").await, ADVICE_NO_ANSWER);
    empty.assert_async().await;

    let mut server = Server::new_async().await;
    let limited = server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body("slow down")
        .create_async()
        .await;
    assert_eq!(oracle_for(&server).get_advice("hello").await, ADVICE_DISCONNECTED);
    limited.assert_async().await;
}

#[tokio::test]
async fn test_missing_api_key_falls_back_everywhere() {
    let oracle = Oracle::from_config(&GeminiConfig::default());
    assert!(oracle.fetch_lunar_details(ymd(2024, 1, 1)).await.is_fallback());
    assert!(oracle
        .check_compatibility(ymd(1990, 5, 1), ymd(1992, 11, 20))
        .await
        .is_fallback());
    assert_eq!(oracle.get_advice("hello").await, ADVICE_DISCONNECTED);
}
