use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use countdown_timer::{create_router, state::AppState, tasks::tick_driver_task};

fn app() -> (Router, Arc<AppState>) {
    let (state, ticks) = AppState::new(20554, "127.0.0.1".to_string(), Duration::from_secs(1));
    let state = Arc::new(state);
    tokio::spawn(tick_driver_task(Arc::clone(&state), ticks));
    (create_router(Arc::clone(&state)), state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn set_duration_updates_display() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::POST, "/duration", Some(json!({ "duration": "65" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "applied");
    assert_eq!(body["timer"]["display"], "01:05");
    assert_eq!(body["timer"]["run_state"], "idle");
    assert_eq!(body["timer"]["can_start"], true);
}

#[tokio::test]
async fn whole_float_duration_is_accepted() {
    let (app, _) = app();
    for (duration, display) in [(json!(90.0), "01:30"), (json!("1e3"), "16:40"), (json!("60."), "01:00")] {
        let (status, body) = send(&app, Method::POST, "/duration", Some(json!({ "duration": duration }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "applied");
        assert_eq!(body["timer"]["display"], display);
    }

    let (_, body) = send(&app, Method::POST, "/duration", Some(json!({ "duration": 2.5 }))).await;
    assert_eq!(body["status"], "ignored");
    assert_eq!(body["timer"]["remaining_seconds"], 60);
}

#[tokio::test]
async fn invalid_duration_is_ignored() {
    let (app, _) = app();
    send(&app, Method::POST, "/duration", Some(json!({ "duration": 30 }))).await;

    for bad in [json!({ "duration": "abc" }), json!({ "duration": -4 }), json!({ "duration": 0 }), json!({})] {
        let (status, body) = send(&app, Method::POST, "/duration", Some(bad)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ignored");
        assert_eq!(body["timer"]["remaining_seconds"], 30);
    }
}

#[tokio::test]
async fn start_without_duration_is_ignored() {
    let (app, _) = app();
    let (_, body) = send(&app, Method::POST, "/start", None).await;
    assert_eq!(body["status"], "ignored");
    assert_eq!(body["timer"]["run_state"], "idle");

    let (_, body) = send(&app, Method::POST, "/pause", None).await;
    assert_eq!(body["status"], "ignored");
}

#[tokio::test]
async fn reset_is_always_applied() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::POST, "/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "applied");
    assert_eq!(body["message"], "Countdown reset");
    assert_eq!(body["timer"]["display"], "00:00");
}

#[tokio::test(start_paused = true)]
async fn pause_resume_and_reset() {
    let (app, _) = app();
    send(&app, Method::POST, "/duration", Some(json!({ "duration": "10" }))).await;
    send(&app, Method::POST, "/start", None).await;
    tokio::time::sleep(Duration::from_millis(1500)).await;

    let (_, body) = send(&app, Method::POST, "/pause", None).await;
    assert_eq!(body["status"], "applied");
    assert_eq!(body["timer"]["remaining_seconds"], 9);
    assert_eq!(body["timer"]["start_label"], "Resume");

    let (_, body) = send(&app, Method::POST, "/start", None).await;
    assert_eq!(body["timer"]["run_state"], "running");
    tokio::time::sleep(Duration::from_millis(1200)).await;

    let (_, body) = send(&app, Method::GET, "/status", None).await;
    assert_eq!(body["timer"]["remaining_seconds"], 8);
    assert_eq!(body["last_action"], "start");

    let (_, body) = send(&app, Method::POST, "/reset", None).await;
    assert_eq!(body["status"], "applied");
    assert_eq!(body["timer"]["remaining_seconds"], 10);
    assert_eq!(body["timer"]["run_state"], "idle");
    assert_eq!(body["timer"]["ticking"], false);
}

#[tokio::test(start_paused = true)]
async fn countdown_finishes_at_zero() {
    let (app, state) = app();
    send(&app, Method::POST, "/duration", Some(json!({ "duration": 5 }))).await;
    send(&app, Method::POST, "/start", None).await;
    tokio::time::sleep(Duration::from_secs(8)).await;

    let (_, body) = send(&app, Method::GET, "/status", None).await;
    assert_eq!(body["timer"]["display"], "00:00");
    assert_eq!(body["timer"]["run_state"], "idle");
    assert_eq!(body["timer"]["finished"], true);

    let (_, body) = send(&app, Method::POST, "/start", None).await;
    assert_eq!(body["status"], "ignored");
    assert!(!state.get_timer_state().unwrap().ticking);
}
