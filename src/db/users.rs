use chrono::Utc;
use secrecy::ExposeSecret;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::user::RegistrationRequest;
use crate::utils::password::hash_password;

#[derive(Debug, FromRow)]
pub struct UserCredentials {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
}

pub async fn insert_user(
    pool: &PgPool,
    user_form: &RegistrationRequest,
) -> Result<Uuid, sqlx::Error> {
    let user_id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(user_id)
    .bind(&user_form.username)
    .bind(&user_form.email)
    .bind(hash_password(user_form.password.expose_secret()))
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute user insert query: {:?}", e);
        e
    })?;

    Ok(user_id)
}

pub async fn find_user_credentials(
    pool: &PgPool,
    username: &str,
) -> Result<Option<UserCredentials>, sqlx::Error> {
    sqlx::query_as::<_, UserCredentials>(
        r#"
        SELECT id, username, password_hash
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}
