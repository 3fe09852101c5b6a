use actix_web::{get, post, web, HttpResponse};
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::handlers::health;
use crate::middleware::auth::Claims;
use crate::models::health::{
    BloodPressureReading, CreateHealthMetricRequest, CreateHealthSessionRequest,
    HealthMetricsFilter, MetricsRangeFilter, SessionsQuery, SingleReading,
};

#[post("/metrics")]
async fn record_metric(
    request: web::Json<CreateHealthMetricRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    health::record_metric::record_metric(request, pool, claims).await
}

#[get("/metrics")]
async fn list_metrics(
    filter: web::Query<HealthMetricsFilter>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    health::list_metrics::list_metrics(filter, pool, claims).await
}

#[get("/metrics/latest")]
async fn latest_metrics(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    health::latest_metrics::get_latest_metrics(pool, claims).await
}

#[get("/metrics/range")]
async fn metrics_range(
    filter: web::Query<MetricsRangeFilter>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    health::list_metrics::get_metrics_range(filter, pool, claims).await
}

#[get("/summary")]
async fn summary(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    health::summary::get_health_summary(pool, claims).await
}

#[get("/recommendations")]
async fn recommendations(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    health::recommendations::get_recommendations(pool, claims).await
}

#[post("/sessions")]
async fn record_session(
    request: web::Json<CreateHealthSessionRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    health::sessions::record_session(request, pool, claims).await
}

#[get("/sessions")]
async fn list_sessions(
    query: web::Query<SessionsQuery>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    health::sessions::list_sessions(query, pool, claims).await
}

#[get("/sessions/{date}")]
async fn session_by_date(
    date: web::Path<NaiveDate>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    health::sessions::session_by_date(date, pool, claims).await
}

#[post("/analyze/bp")]
async fn analyze_bp(reading: web::Json<BloodPressureReading>) -> HttpResponse {
    health::analyze::analyze_bp(reading).await
}

#[post("/analyze/blood-sugar")]
async fn analyze_blood_sugar(reading: web::Json<SingleReading>) -> HttpResponse {
    health::analyze::analyze_blood_sugar(reading).await
}

#[post("/analyze/bmi")]
async fn analyze_bmi(reading: web::Json<SingleReading>) -> HttpResponse {
    health::analyze::analyze_bmi(reading).await
}
