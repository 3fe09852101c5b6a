use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::db::health::insert_metric;
use crate::middleware::auth::Claims;
use crate::models::health::CreateHealthMetricRequest;

#[tracing::instrument(
    name = "Record health metric",
    skip(request, pool, claims),
    fields(
        username = %claims.username,
        metric_type = %request.metric_type
    )
)]
pub async fn record_metric(
    request: web::Json<CreateHealthMetricRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    match insert_metric(&pool, user_id, &request).await {
        Ok(metric) => HttpResponse::Ok().json(metric),
        Err(e) => {
            tracing::error!("Failed to record health metric: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Database error"
            }))
        }
    }
}
