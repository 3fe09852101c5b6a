use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::db::users::insert_user;
use crate::models::user::RegistrationRequest;

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show the password
    skip(user_form, pool),
    fields(
        username = %user_form.username,
        email = %user_form
    )
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    match insert_user(&pool, &user_form).await {
        Ok(user_id) => HttpResponse::Ok().json(json!({
            "success": true,
            "user_id": user_id
        })),
        Err(e) => {
            tracing::error!("Failed to register user: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
