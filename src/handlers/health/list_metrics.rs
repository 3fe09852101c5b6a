use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::health::{get_metrics, metrics_in_range};
use crate::db::helpers::db_result;
use crate::middleware::auth::Claims;
use crate::models::health::{HealthMetricsFilter, HealthMetricsPage, MetricsRangeFilter};

#[tracing::instrument(
    name = "List health metrics",
    skip(filter, pool, claims),
    fields(
        username = %claims.username
    )
)]
pub async fn list_metrics(
    filter: web::Query<HealthMetricsFilter>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    match db_result(get_metrics(&pool, user_id, &filter).await) {
        Ok((data, total)) => HttpResponse::Ok().json(HealthMetricsPage {
            data,
            total,
            limit: filter.limit.unwrap_or(100),
            offset: filter.offset.unwrap_or(0),
        }),
        Err(response) => response,
    }
}

#[tracing::instrument(
    name = "Get health metrics range",
    skip(filter, pool, claims),
    fields(
        username = %claims.username
    )
)]
pub async fn get_metrics_range(
    filter: web::Query<MetricsRangeFilter>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    match db_result(
        metrics_in_range(
            &pool,
            user_id,
            filter.start_date,
            filter.end_date,
            filter.metric_type,
        )
        .await,
    ) {
        Ok(metrics) => HttpResponse::Ok().json(metrics),
        Err(response) => response,
    }
}
