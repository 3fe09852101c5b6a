use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

mod common;
use common::utils::{create_test_user_and_login, spawn_app};

#[tokio::test]
async fn register_then_login_returns_a_token() {
    let app = spawn_app().await;
    let user = create_test_user_and_login(&app.address).await;

    assert!(!user.token.is_empty());

    let stored_username: String = sqlx::query_scalar("SELECT username FROM users WHERE id = $1")
        .bind(user.user_id)
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to fetch user.");
    assert_eq!(stored_username, user.username);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = spawn_app().await;
    let client = Client::new();
    let user = create_test_user_and_login(&app.address).await;

    let response = client
        .post(format!("{}/login", app.address))
        .json(&json!({
            "username": user.username,
            "password": "not-the-password"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn login_with_unknown_user_is_unauthorized() {
    let app = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/login", app.address))
        .json(&json!({
            "username": format!("nobody{}", Uuid::new_v4()),
            "password": "password123"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health/summary", app.address))
        .bearer_auth("not-a-jwt")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 401);
}
