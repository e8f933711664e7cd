//! End-to-end tests for the login/month server

use axum::Router;
use backend_labs::{api, server, state::LoginLog};
use chrono::DateTime;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;

async fn spawn_app(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        server::serve(listener, app).await.unwrap();
    });
    addr
}

async fn spawn_login_server() -> SocketAddr {
    let log = Arc::new(RwLock::new(LoginLog::new()));
    spawn_app(server::with_middleware(api::login::router(log))).await
}

#[tokio::test]
async fn test_root_returns_welcome_message() {
    let addr = spawn_login_server().await;

    let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.text().await.unwrap(),
        "Welcome to the express server"
    );
}

#[tokio::test]
async fn test_login_confirms_and_appears_in_details() {
    let addr = spawn_login_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/login/alice", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "alice, You are logged in!");

    let response = reqwest::get(format!("http://{}/loginDetails", addr))
        .await
        .unwrap();
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/json"));

    let details: Value = response.json().await.unwrap();
    let entries = details.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "alice");

    // login_time must serialize as a parseable timestamp
    let login_time = entries[0]["login_time"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(login_time).is_ok());
}

#[tokio::test]
async fn test_login_details_tracks_call_order() {
    let addr = spawn_login_server().await;
    let client = reqwest::Client::new();

    for name in ["alice", "bob", "carol"] {
        client
            .post(format!("http://{}/login/{}", addr, name))
            .send()
            .await
            .unwrap();
    }

    let details: Value = reqwest::get(format!("http://{}/loginDetails", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let names: Vec<&str> = details
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["alice", "bob", "carol"]);
}

#[tokio::test]
async fn test_login_details_idempotent_without_logins() {
    let addr = spawn_login_server().await;

    let first: Value = reqwest::get(format!("http://{}/loginDetails", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = reqwest::get(format!("http://{}/loginDetails", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first, Value::Array(Vec::new()));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_catch_all_greets_by_name() {
    let addr = spawn_login_server().await;

    let body = reqwest::get(format!("http://{}/bob", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "Hello bob");
}

#[tokio::test]
async fn test_specific_routes_win_over_catch_all() {
    let addr = spawn_login_server().await;

    // /loginDetails must reach the JSON handler, not "Hello loginDetails"
    let response = reqwest::get(format!("http://{}/loginDetails", addr))
        .await
        .unwrap();
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/json"));

    // /fetchMonths/:num must reach the month handler
    let body = reqwest::get(format!("http://{}/fetchMonths/3", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "March");
}

#[tokio::test]
async fn test_fetch_months_lookup() {
    let addr = spawn_login_server().await;

    for (num, expected) in [("1", "January"), ("12", "December")] {
        let body = reqwest::get(format!("http://{}/fetchMonths/{}", addr, num))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, expected);
    }
}

#[tokio::test]
async fn test_fetch_months_rejects_out_of_range_and_non_numeric() {
    let addr = spawn_login_server().await;
    let expected = "Invalid month number. Please provide a number between 1 and 12.";

    for num in ["0", "13", "abc"] {
        let response = reqwest::get(format!("http://{}/fetchMonths/{}", addr, num))
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.text().await.unwrap(), expected);
    }
}

#[tokio::test]
async fn test_unmatched_route_falls_through_to_default() {
    let addr = spawn_login_server().await;

    let response = reqwest::get(format!("http://{}/a/b/c", addr)).await.unwrap();
    assert_eq!(response.status(), 404);
}
