use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{create_test_user_and_login, make_authenticated_request, spawn_app, TestUser};

async fn record_metric_at(
    client: &Client,
    address: &str,
    user: &TestUser,
    metric_type: &str,
    value: f64,
    days_ago: i64,
) {
    let recorded_at = (Utc::now() - Duration::days(days_ago)).to_rfc3339();
    let response = make_authenticated_request(
        client,
        reqwest::Method::POST,
        &format!("{}/health/metrics", address),
        &user.token,
        Some(json!({
            "metricType": metric_type,
            "value": value,
            "recordedAt": recorded_at
        })),
    )
    .await;
    assert!(response.status().is_success());
}

#[tokio::test]
async fn latest_metrics_returns_most_recent_reading_per_type() {
    let app = spawn_app().await;
    let client = Client::new();
    let user = create_test_user_and_login(&app.address).await;

    record_metric_at(&client, &app.address, &user, "BP_SYSTOLIC", 118.0, 5).await;
    record_metric_at(&client, &app.address, &user, "BP_SYSTOLIC", 132.0, 1).await;
    record_metric_at(&client, &app.address, &user, "BLOOD_SUGAR", 95.0, 2).await;

    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!("{}/health/metrics/latest", app.address),
        &user.token,
        None,
    )
    .await;

    assert!(response.status().is_success());
    let latest: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(latest["BP_SYSTOLIC"]["value"].as_f64(), Some(132.0));
    assert_eq!(latest["BP_SYSTOLIC"]["condition"], "high");
    assert_eq!(latest["BP_SYSTOLIC"]["unit"], "mmHg");
    assert_eq!(latest["BLOOD_SUGAR"]["value"].as_f64(), Some(95.0));
    assert!(latest.get("WEIGHT").is_none());
}

#[tokio::test]
async fn summary_computes_trend_from_oldest_to_newest_in_window() {
    let app = spawn_app().await;
    let client = Client::new();
    let user = create_test_user_and_login(&app.address).await;

    record_metric_at(&client, &app.address, &user, "WEIGHT", 100.0, 20).await;
    record_metric_at(&client, &app.address, &user, "WEIGHT", 150.0, 1).await;

    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!("{}/health/summary", app.address),
        &user.token,
        None,
    )
    .await;

    assert!(response.status().is_success());
    let summary: serde_json::Value = response.json().await.expect("Failed to parse response");
    let trend = &summary["trends"]["WEIGHT"];
    assert_eq!(trend["current"].as_f64(), Some(150.0));
    assert_eq!(trend["previous"].as_f64(), Some(100.0));
    assert_eq!(trend["change"].as_f64(), Some(50.0));
    assert_eq!(trend["changePercent"].as_f64(), Some(50.0));
    assert_eq!(summary["averages"]["WEIGHT"].as_f64(), Some(125.0));
    assert_eq!(summary["latestMetrics"]["WEIGHT"]["value"].as_f64(), Some(150.0));
}

#[tokio::test]
async fn summary_has_no_trend_for_a_single_sample() {
    let app = spawn_app().await;
    let client = Client::new();
    let user = create_test_user_and_login(&app.address).await;

    record_metric_at(&client, &app.address, &user, "PULSE", 72.0, 3).await;

    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!("{}/health/summary", app.address),
        &user.token,
        None,
    )
    .await;

    let summary: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(summary["trends"].get("PULSE").is_none());
    assert_eq!(summary["averages"]["PULSE"].as_f64(), Some(72.0));
}

#[tokio::test]
async fn samples_older_than_thirty_days_are_excluded_from_trends_and_averages() {
    let app = spawn_app().await;
    let client = Client::new();
    let user = create_test_user_and_login(&app.address).await;

    record_metric_at(&client, &app.address, &user, "BLOOD_SUGAR", 200.0, 45).await;
    record_metric_at(&client, &app.address, &user, "BLOOD_SUGAR", 90.0, 2).await;

    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!("{}/health/summary", app.address),
        &user.token,
        None,
    )
    .await;

    let summary: serde_json::Value = response.json().await.expect("Failed to parse response");
    // Only one in-window sample: no trend, and the stale reading does not
    // drag the average.
    assert!(summary["trends"].get("BLOOD_SUGAR").is_none());
    assert_eq!(summary["averages"]["BLOOD_SUGAR"].as_f64(), Some(90.0));
    // Latest is all-time, so the in-window reading still wins by recency.
    assert_eq!(summary["latestMetrics"]["BLOOD_SUGAR"]["value"].as_f64(), Some(90.0));
}

#[tokio::test]
async fn zero_baseline_trend_serializes_change_percent_as_null() {
    let app = spawn_app().await;
    let client = Client::new();
    let user = create_test_user_and_login(&app.address).await;

    record_metric_at(&client, &app.address, &user, "BLOOD_SUGAR", 0.0, 10).await;
    record_metric_at(&client, &app.address, &user, "BLOOD_SUGAR", 95.0, 1).await;

    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!("{}/health/summary", app.address),
        &user.token,
        None,
    )
    .await;

    assert!(response.status().is_success());
    let summary: serde_json::Value = response.json().await.expect("Failed to parse response");
    let trend = &summary["trends"]["BLOOD_SUGAR"];
    assert_eq!(trend["change"].as_f64(), Some(95.0));
    // Unguarded division by zero: the non-finite percent comes out as null.
    assert!(trend["changePercent"].is_null());
}

#[tokio::test]
async fn summary_is_empty_for_a_user_without_metrics() {
    let app = spawn_app().await;
    let client = Client::new();
    let user = create_test_user_and_login(&app.address).await;

    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!("{}/health/summary", app.address),
        &user.token,
        None,
    )
    .await;

    assert!(response.status().is_success());
    let summary: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(summary["latestMetrics"], json!({}));
    assert_eq!(summary["trends"], json!({}));
    assert_eq!(summary["averages"], json!({}));
}
