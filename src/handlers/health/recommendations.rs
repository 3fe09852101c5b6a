use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::health::summary::load_summary;
use crate::middleware::auth::Claims;
use crate::services::recommendations::health_recommendations;

#[tracing::instrument(
    name = "Get health recommendations",
    skip(pool, claims),
    fields(
        username = %claims.username
    )
)]
pub async fn get_recommendations(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    match load_summary(&pool, user_id).await {
        Ok(summary) => HttpResponse::Ok().json(health_recommendations(&summary)),
        Err(response) => response,
    }
}
