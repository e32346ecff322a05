#![expect(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use leadline_http::{AppState, create_router};
use leadline_storage::Storage;
use serde_json::{Value, json};
use tower::ServiceExt as _;

fn app() -> Router {
    let storage = Arc::new(Storage::in_memory().unwrap());
    create_router(Arc::new(AppState::new(storage)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

async fn create(app: &Router, body: Value) -> Value {
    let (status, lead) = send(app, Method::POST, "/api/leads", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    lead
}

#[tokio::test]
async fn health_and_version() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".to_owned()));

    let (status, body) = send(&app, Method::GET, "/api/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn create_without_fields_applies_defaults() {
    let app = app();
    let lead = create(&app, json!({})).await;
    assert_eq!(lead["source"], "manual");
    assert_eq!(lead["status"], "new");
    assert_eq!(lead["stage"], "inquiry");
    assert_eq!(lead["priority"], "medium");
    assert_eq!(lead["score"], 0);
    assert_eq!(lead["amount"], 0.0);
    assert!(lead["created_at"].is_string());
    assert_eq!(lead["created_at"], lead["updated_at"]);

    let id = lead["id"].as_str().unwrap();
    let (status, fetched) = send(&app, Method::GET, &format!("/api/leads/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["activities"][0]["type"], "created");
    assert_eq!(fetched["messages"], json!([]));
}

#[tokio::test]
async fn empty_body_creates_default_lead() {
    let app = app();
    let (status, lead) = send(&app, Method::POST, "/api/leads", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(lead["stage"], "inquiry");
}

#[tokio::test]
async fn ids_are_unique_and_stable() {
    let app = app();
    let a = create(&app, json!({"name": "A"})).await;
    let b = create(&app, json!({"name": "B"})).await;
    assert_ne!(a["id"], b["id"]);
    for lead in [&a, &b] {
        let uri = format!("/api/leads/{}", lead["id"].as_str().unwrap());
        let (_, fetched) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(fetched["id"], lead["id"]);
        assert_eq!(fetched["name"], lead["name"]);
    }
}

#[tokio::test]
async fn invalid_enum_value_is_400() {
    let app = app();
    let (status, body) =
        send(&app, Method::POST, "/api/leads", Some(json!({"stage": "won"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("won"));
}

#[tokio::test]
async fn noop_patch_returns_lead_unchanged() {
    let app = app();
    let lead = create(&app, json!({"name": "Jane"})).await;
    let uri = format!("/api/leads/{}", lead["id"].as_str().unwrap());

    let (status, same) = send(&app, Method::PATCH, &uri, Some(json!({"unknown": 1}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(same, lead);

    let (_, detail) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(detail["activities"].as_array().unwrap().len(), 1);
    assert_eq!(detail["updated_at"], lead["updated_at"]);
}

#[tokio::test]
async fn stage_patch_logs_one_stage_change() {
    let app = app();
    let lead = create(&app, json!({})).await;
    let uri = format!("/api/leads/{}", lead["id"].as_str().unwrap());

    let (status, updated) =
        send(&app, Method::PATCH, &uri, Some(json!({"stage": "qualified", "score": 40}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["stage"], "qualified");
    assert_eq!(updated["score"], 40);
    assert_eq!(updated["created_at"], lead["created_at"]);

    let (_, detail) = send(&app, Method::GET, &uri, None).await;
    let changes: Vec<&Value> = detail["activities"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|a| a["type"] == "stage_change")
        .collect();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0]["description"], "Stage changed from inquiry to qualified");
}

#[tokio::test]
async fn missing_lead_is_404_everywhere() {
    let app = app();
    for method in [Method::GET, Method::PATCH, Method::DELETE] {
        let body = (method == Method::PATCH).then(|| json!({"stage": "proposal"}));
        let (status, body) = send(&app, method, "/api/leads/nope", body).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn delete_cascades_and_then_404s() {
    let app = app();
    let (_, chat) = send(
        &app,
        Method::POST,
        "/api/chat",
        Some(json!({"message": "I'm Kim Lee, kim@initech.com"})),
    )
    .await;
    let id = chat["leadId"].as_str().unwrap().to_owned();
    let uri = format!("/api/leads/{id}");

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, feed) = send(&app, Method::GET, "/api/activities", None).await;
    assert_eq!(feed, json!([]));
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let app = app();
    create(&app, json!({"name": "Zed", "company": "ACME Holdings"})).await;
    create(&app, json!({"name": "Ann", "email": "ann@Acme.io"})).await;
    create(&app, json!({"name": "Bob", "company": "Globex"})).await;

    let (status, leads) = send(&app, Method::GET, "/api/leads?search=acme", None).await;
    assert_eq!(status, StatusCode::OK);
    let mut names: Vec<&str> =
        leads.as_array().unwrap().iter().map(|l| l["name"].as_str().unwrap()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Ann", "Zed"]);
}

#[tokio::test]
async fn bogus_sort_falls_back_to_created_at() {
    let app = app();
    create(&app, json!({"name": "first", "score": 90})).await;
    create(&app, json!({"name": "second", "score": 10})).await;

    let (status, leads) = send(&app, Method::GET, "/api/leads?sort=bogusColumn", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> =
        leads.as_array().unwrap().iter().map(|l| l["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["second", "first"]);

    let (_, leads) = send(&app, Method::GET, "/api/leads?sort=score&order=desc", None).await;
    assert_eq!(leads[0]["name"], "first");
}

#[tokio::test]
async fn filters_by_stage_and_tolerates_unknown_values() {
    let app = app();
    create(&app, json!({"name": "q", "stage": "qualified"})).await;
    create(&app, json!({"name": "i"})).await;

    let (_, leads) = send(&app, Method::GET, "/api/leads?stage=qualified", None).await;
    assert_eq!(leads.as_array().unwrap().len(), 1);
    assert_eq!(leads[0]["name"], "q");

    let (status, leads) = send(&app, Method::GET, "/api/leads?status=archived", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(leads, json!([]));
}

#[tokio::test]
async fn stats_aggregate_pipeline() {
    let app = app();
    create(&app, json!({"stage": "proposal", "amount": 1500.0})).await;
    create(&app, json!({"amount": 500.0, "status": "active"})).await;

    let (status, stats) = send(&app, Method::GET, "/api/leads/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total"], 2);
    assert_eq!(stats["total_amount"], 2000.0);
    assert_eq!(stats["by_stage"]["proposal"], 1);
    assert_eq!(stats["by_stage"]["inquiry"], 1);
    assert_eq!(stats["by_status"]["active"], 1);
    assert_eq!(stats["recent"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn chat_introduction_creates_lead_with_two_messages() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/chat",
        Some(json!({"message": "Hi, I'm Jane Doe, jane@acme.com, I work at Acme Corp"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let lead_id = body["leadId"].as_str().unwrap();
    assert_eq!(body["reply"]["leadId"], lead_id);
    assert_eq!(body["reply"]["role"], "assistant");
    assert!(body["reply"]["timestamp"].is_string());

    let (_, detail) = send(&app, Method::GET, &format!("/api/leads/{lead_id}"), None).await;
    assert_eq!(detail["name"], "Jane Doe");
    assert_eq!(detail["email"], "jane@acme.com");
    assert_eq!(detail["company"], "Acme Corp");
    assert_eq!(detail["source"], "chat");
    let messages = detail["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "user");
    assert_eq!(messages[1]["role"], "assistant");
    assert_eq!(messages[1]["id"], body["reply"]["id"]);
}

#[tokio::test]
async fn chat_pricing_reply_is_fixed() {
    let app = app();
    let pricing = json!({"message": "What's your pricing?"});
    let (_, first) = send(&app, Method::POST, "/api/chat", Some(pricing)).await;
    let (_, second) = send(
        &app,
        Method::POST,
        "/api/chat",
        Some(json!({
            "message": "Hello! I'm Jane Doe from Acme, curious about PRICING for 40 seats"
        })),
    )
    .await;
    assert_eq!(first["reply"]["text"], second["reply"]["text"]);
    assert!(first["reply"]["text"].as_str().unwrap().starts_with("Pricing depends"));
    assert_eq!(first["leadId"], Value::Null);
}

#[tokio::test]
async fn chat_with_existing_lead_id_attaches_messages() {
    let app = app();
    let lead = create(&app, json!({"name": "Ops"})).await;
    let id = lead["id"].as_str().unwrap();
    let turn = json!({"message": "need support", "leadId": id});
    let (status, body) = send(&app, Method::POST, "/api/chat", Some(turn)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["leadId"], id);

    let (_, detail) = send(&app, Method::GET, &format!("/api/leads/{id}"), None).await;
    assert_eq!(detail["messages"].as_array().unwrap().len(), 2);

    let ghost = json!({"message": "hi", "leadId": "ghost"});
    let (status, _) = send(&app, Method::POST, "/api/chat", Some(ghost)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn chat_without_message_is_400_and_writes_nothing() {
    let app = app();
    for body in [json!({}), json!({"message": ""}), json!({"message": "   "})] {
        let (status, err) = send(&app, Method::POST, "/api/chat", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err["error"], "message is required");
    }
    let (_, leads) = send(&app, Method::GET, "/api/leads", None).await;
    assert_eq!(leads, json!([]));
    let (_, feed) = send(&app, Method::GET, "/api/activities", None).await;
    assert_eq!(feed, json!([]));
}

#[tokio::test]
async fn malformed_json_is_400_with_error_body() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/leads")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{oops"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("invalid JSON body"));
}

#[tokio::test]
async fn activity_feed_joins_lead_names() {
    let app = app();
    let lead = create(&app, json!({"name": "Jane", "company": "Acme"})).await;
    let uri = format!("/api/leads/{}", lead["id"].as_str().unwrap());
    send(&app, Method::PATCH, &uri, Some(json!({"status": "active"}))).await;

    let (status, feed) = send(&app, Method::GET, "/api/activities", None).await;
    assert_eq!(status, StatusCode::OK);
    let feed = feed.as_array().unwrap();
    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0]["type"], "status_change");
    assert_eq!(feed[0]["description"], "Status changed from new to active");
    assert_eq!(feed[0]["lead_name"], "Jane");
    assert_eq!(feed[0]["lead_company"], "Acme");

    let (_, limited) = send(&app, Method::GET, "/api/activities?limit=1", None).await;
    assert_eq!(limited.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn bad_query_string_is_400_with_error_body() {
    let app = app();
    for uri in ["/api/activities?limit=abc", "/api/activities?limit=-1"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("limit"));
    }
}

#[tokio::test]
async fn storage_failure_is_500_and_server_keeps_serving() {
    let dir = tempfile::TempDir::new().unwrap();
    let db_path = dir.path().join("leads.db");
    let storage = Arc::new(Storage::new(&db_path).unwrap());
    let app = create_router(Arc::new(AppState::new(storage)));
    create(&app, json!({"name": "Before"})).await;

    rusqlite::Connection::open(&db_path).unwrap().execute_batch("DROP TABLE messages").unwrap();

    let (status, body) =
        send(&app, Method::POST, "/api/chat", Some(json!({"message": "hello there"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "internal server error"}));

    let (status, _) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, leads) = send(&app, Method::GET, "/api/leads", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(leads[0]["name"], "Before");
}
