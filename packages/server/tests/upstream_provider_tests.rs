//! End-to-end tests of the real provider adapters against stub vendor
//! servers on localhost.

mod common;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use common::{post_json, spawn_stub};
use gemini_client::GeminiClient;
use openai_client::OpenAIClient;
use qloo_client::QlooClient;
use server_core::domains::recommendations::models::{PreferenceCategory, PreferenceSet};
use server_core::domains::recommendations::normalizer::FALLBACK_MESSAGE;
use server_core::kernel::{
    BaseTasteProvider, GeminiTasteProvider, OpenAiTasteProvider, QlooTasteProvider, ServerDeps,
    TasteRequest,
};
use server_core::server::build_app;

fn app_with(provider: impl BaseTasteProvider + 'static) -> Router {
    build_app(ServerDeps::new(Arc::new(provider)), &[])
}

// =============================================================================
// Qloo
// =============================================================================

/// Insights stub keyed on `filter.type`: artists succeed with the nested
/// `entities` shape, movies fail with 500, places succeed as a bare array.
async fn qloo_stub(seen: Arc<Mutex<Vec<HashMap<String, String>>>>) -> String {
    let router = Router::new().route(
        "/v2/insights",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let seen = seen.clone();
            async move {
                seen.lock().unwrap().push(params.clone());
                match params.get("filter.type").map(String::as_str) {
                    Some("urn:entity:artist") => (
                        StatusCode::OK,
                        Json(json!({
                            "success": true,
                            "results": { "entities": [
                                { "name": "Bill Evans", "type": "urn:entity:artist",
                                  "properties": { "description": "Pianist" },
                                  "query": { "affinity": 0.93 } },
                                { "name": "Chet Baker", "type": "urn:entity:artist" }
                            ]}
                        })),
                    ),
                    Some("urn:entity:movie") => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({ "error": "boom" })),
                    ),
                    Some("urn:entity:place") => (
                        StatusCode::OK,
                        Json(json!({
                            "results": [
                                { "name": "Ichiran", "type": "urn:entity:place", "affinity_score": 0.7 },
                                { "type": "urn:entity:place" }
                            ]
                        })),
                    ),
                    _ => (StatusCode::OK, Json(json!({ "results": [] }))),
                }
            }
        }),
    );
    spawn_stub(router).await
}

#[tokio::test]
async fn qloo_failed_category_is_omitted_and_others_kept() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let base = qloo_stub(seen.clone()).await;
    let provider = QlooTasteProvider::new(QlooClient::new("test-key").with_base_url(base));

    let preferences = PreferenceSet::new()
        .with(PreferenceCategory::Music, ["Jazz"])
        .with(PreferenceCategory::Movies, ["Drama"])
        .with(PreferenceCategory::Food, ["Ramen"]);
    let items = provider
        .recommend(&TasteRequest::onboarding(preferences))
        .await
        .unwrap();

    let names: Vec<Option<&str>> = items.iter().map(|i| i.name.as_deref()).collect();
    assert_eq!(
        names,
        [Some("Bill Evans"), Some("Ichiran"), Some("Chet Baker"), None]
    );
    assert_eq!(items[0].score, Some(0.93));
    assert_eq!(items[0].description.as_deref(), Some("Pianist"));
    assert_eq!(items[1].source_category, Some(PreferenceCategory::Food));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    let music = seen
        .iter()
        .find(|p| p.get("filter.type").map(String::as_str) == Some("urn:entity:artist"))
        .unwrap();
    assert_eq!(music.get("query").map(String::as_str), Some("Jazz"));
    assert_eq!(music.get("take").map(String::as_str), Some("3"));
}

#[tokio::test]
async fn qloo_all_categories_failing_is_an_error() {
    let base = qloo_stub(Arc::default()).await;
    let provider = QlooTasteProvider::new(QlooClient::new("test-key").with_base_url(base));

    let preferences = PreferenceSet::new().with(PreferenceCategory::Movies, ["Drama"]);
    let outcome = provider.recommend(&TasteRequest::onboarding(preferences)).await;

    assert!(outcome.is_err());
}

#[tokio::test]
async fn qloo_chat_uses_search_match_as_signal() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let insights_seen = seen.clone();
    let router = Router::new()
        .route(
            "/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("types").map(String::as_str), Some("urn:entity:artist"));
                Json(json!({ "results": [{ "entity_id": "E-BILL", "name": "Bill Evans" }] }))
            }),
        )
        .route(
            "/v2/insights",
            get(move |Query(params): Query<HashMap<String, String>>| {
                let seen = insights_seen.clone();
                async move {
                    seen.lock().unwrap().push(params);
                    Json(json!({ "results": [{ "name": "Scott LaFaro", "type": "urn:entity:artist" }] }))
                }
            }),
        );
    let base = spawn_stub(router).await;
    let provider = QlooTasteProvider::new(QlooClient::new("test-key").with_base_url(base));

    let preferences = PreferenceSet::new().with(PreferenceCategory::Music, ["Jazz"]);
    let items = provider
        .recommend(&TasteRequest::chat("Bill Evans", preferences))
        .await
        .unwrap();

    assert_eq!(items[0].name.as_deref(), Some("Scott LaFaro"));
    let seen = seen.lock().unwrap();
    assert_eq!(
        seen[0].get("signal.interests.entities").map(String::as_str),
        Some("E-BILL")
    );
    assert_eq!(seen[0].get("query").map(String::as_str), Some("Bill Evans"));
}

#[tokio::test]
async fn qloo_through_the_onboarding_endpoint() {
    let base = qloo_stub(Arc::default()).await;
    let app = app_with(QlooTasteProvider::new(
        QlooClient::new("test-key").with_base_url(base),
    ));

    let (status, body) = post_json(
        &app,
        "/api/process-onboarding",
        json!({ "preferences": { "music": ["Jazz"], "movies": ["Drama"] } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["recommendations"],
        json!([
            { "title": "Bill Evans", "category": "artist", "description": "Pianist", "confidence": 0.93 },
            { "title": "Chet Baker", "category": "artist",
              "description": "Based on your artist preferences", "confidence": 0.85 }
        ])
    );
}

#[tokio::test]
async fn qloo_unreachable_degrades_to_fallback() {
    // Nothing listens on port 9 locally.
    let app = app_with(QlooTasteProvider::new(
        QlooClient::new("test-key").with_base_url("http://127.0.0.1:9"),
    ));

    let (status, body) = post_json(
        &app,
        "/api/chat-ai",
        json!({ "message": "jazz bars", "preferences": { "music": ["Jazz"] } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], FALLBACK_MESSAGE);
    assert_eq!(body["recommendations"][0]["title"], "Personalized Recommendation");
}

// =============================================================================
// OpenAI
// =============================================================================

#[tokio::test]
async fn openai_fenced_reply_is_parsed_and_normalized() {
    let captured = Arc::new(Mutex::new(None::<Value>));
    let sink = captured.clone();
    let router = Router::new().route(
        "/chat/completions",
        post(move |Json(body): Json<Value>| {
            let sink = sink.clone();
            async move {
                *sink.lock().unwrap() = Some(body);
                let content = "```json\n{\"recommendations\": [\
                    {\"title\": \"Blue Note Tokyo\", \"category\": \"music\", \
                     \"description\": \"Live jazz in Aoyama\", \"confidence\": 0.91},\
                    {\"title\": \"\", \"category\": \"music\"}]}\n```";
                Json(json!({
                    "choices": [{ "message": { "role": "assistant", "content": content } }],
                    "usage": { "prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30 }
                }))
            }
        }),
    );
    let base = spawn_stub(router).await;
    let app = app_with(OpenAiTasteProvider::new(
        OpenAIClient::new("sk-test").with_base_url(base),
        "gpt-4o",
    ));

    let (status, body) = post_json(
        &app,
        "/api/chat-ai",
        json!({ "message": "a jazz club in Tokyo", "preferences": { "music": ["Jazz"] } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["recommendations"],
        json!([{
            "title": "Blue Note Tokyo",
            "category": "music",
            "description": "Live jazz in Aoyama",
            "confidence": 0.91
        }])
    );

    let request = captured.lock().unwrap().clone().unwrap();
    assert_eq!(request["model"], "gpt-4o");
    assert_eq!(request["response_format"]["type"], "json_object");
    let user_prompt = request["messages"][1]["content"].as_str().unwrap();
    assert!(user_prompt.contains("a jazz club in Tokyo"));
    assert!(user_prompt.contains("Jazz"));
}

#[tokio::test]
async fn openai_unparseable_reply_falls_back() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async {
            Json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "I'd suggest some jazz!" } }]
            }))
        }),
    );
    let base = spawn_stub(router).await;
    let app = app_with(OpenAiTasteProvider::new(
        OpenAIClient::new("sk-test").with_base_url(base),
        "gpt-4o",
    ));

    let (status, body) = post_json(
        &app,
        "/api/process-onboarding",
        json!({ "preferences": { "music": ["Jazz"] } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], FALLBACK_MESSAGE);
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 1);
}

// =============================================================================
// Gemini
// =============================================================================

#[tokio::test]
async fn gemini_json_reply_is_normalized() {
    let captured = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = captured.clone();
    let router = Router::new().route(
        "/models/*action",
        post(
            move |axum::extract::Path(action): axum::extract::Path<String>,
                  Json(_): Json<Value>| {
                let sink = sink.clone();
                async move {
                    sink.lock().unwrap().push(action);
                    let text = json!([
                        { "title": "Kyoto", "category": "travel", "confidence": "high" }
                    ])
                    .to_string();
                    Json(json!({
                        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
                    }))
                }
            },
        ),
    );
    let base = spawn_stub(router).await;
    let app = app_with(GeminiTasteProvider::new(
        GeminiClient::new("g-test")
            .with_base_url(base)
            .with_model("gemini-test"),
    ));

    let (status, body) = post_json(
        &app,
        "/api/process-onboarding",
        json!({ "preferences": { "travel": ["Temples"] } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["recommendations"],
        json!([{
            "title": "Kyoto",
            "category": "travel",
            "description": "Based on your travel preferences",
            "confidence": 0.85
        }])
    );
    assert_eq!(
        captured.lock().unwrap().as_slice(),
        ["gemini-test:generateContent".to_string()]
    );
}

#[tokio::test]
async fn gemini_error_status_falls_back() {
    let router = Router::new().route(
        "/models/*action",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "quota exceeded") }),
    );
    let base = spawn_stub(router).await;
    let app = app_with(GeminiTasteProvider::new(
        GeminiClient::new("g-test").with_base_url(base),
    ));

    let (status, body) = post_json(&app, "/api/chat-ai", json!({ "message": "beaches" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], FALLBACK_MESSAGE);
}
