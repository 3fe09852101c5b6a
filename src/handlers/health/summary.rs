use actix_web::{web, HttpResponse};
use chrono::{Duration, Utc};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::health::{latest_metrics_per_type, metrics_since};
use crate::db::helpers::{db_result, DbResult};
use crate::middleware::auth::Claims;
use crate::models::health::HealthSummary;
use crate::services::health_summary::{build_summary, TREND_WINDOW_DAYS};

/// Fetch the grouped latest rows plus the 30-day window and compose the
/// summary. Shared with the recommendations handler.
pub async fn load_summary(pool: &PgPool, user_id: Uuid) -> DbResult<HealthSummary> {
    let latest_rows = db_result(latest_metrics_per_type(pool, user_id).await)?;
    let cutoff = Utc::now() - Duration::days(TREND_WINDOW_DAYS);
    let window_rows = db_result(metrics_since(pool, user_id, cutoff).await)?;

    build_summary(&latest_rows, &window_rows).map_err(|e| {
        tracing::error!("Corrupt metric row: {}", e);
        HttpResponse::InternalServerError().json(json!({
            "success": false,
            "message": "Invalid metric data"
        }))
    })
}

#[tracing::instrument(
    name = "Get health summary",
    skip(pool, claims),
    fields(
        username = %claims.username
    )
)]
pub async fn get_health_summary(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    match load_summary(&pool, user_id).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(response) => response,
    }
}
