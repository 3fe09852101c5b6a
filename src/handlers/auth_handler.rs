use actix_web::{web, HttpResponse};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::config::jwt::JwtSettings;
use crate::db::users::find_user_credentials;
use crate::middleware::auth::Claims;
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::utils::password::verify_password;

#[tracing::instrument(
    name = "Login user attempt",
    skip(login_form, pool, jwt_settings),
    fields(
        username = %login_form.username
    )
)]
pub async fn login_user(
    login_form: web::Json<LoginRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> HttpResponse {
    let user = match find_user_credentials(&pool, &login_form.username).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::info!("User not found or invalid credentials");
            return HttpResponse::Unauthorized().finish();
        }
        Err(e) => {
            tracing::error!("Database error occurred: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    // Verify password
    if !verify_password(login_form.password.expose_secret(), &user.password_hash) {
        tracing::info!("Invalid password");
        return HttpResponse::Unauthorized().finish();
    }

    // Generate JWT token
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(jwt_settings.expiration_hours))
        .expect("Valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: user.id.to_string(),
        username: user.username,
        exp: expiration,
    };

    let token = match encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_settings.secret.expose_secret().as_bytes()),
    ) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("Error generating JWT token: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    HttpResponse::Ok().json(LoginResponse { token })
}
