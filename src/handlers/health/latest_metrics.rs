use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::db::health::latest_metrics_per_type;
use crate::db::helpers::db_result;
use crate::middleware::auth::Claims;
use crate::services::health_summary::latest_metrics_map;

#[tracing::instrument(
    name = "Get latest health metrics",
    skip(pool, claims),
    fields(
        username = %claims.username
    )
)]
pub async fn get_latest_metrics(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    let rows = match db_result(latest_metrics_per_type(&pool, user_id).await) {
        Ok(rows) => rows,
        Err(response) => return response,
    };

    match latest_metrics_map(&rows) {
        Ok(latest) => HttpResponse::Ok().json(latest),
        Err(e) => {
            tracing::error!("Corrupt metric row: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Invalid metric data"
            }))
        }
    }
}
