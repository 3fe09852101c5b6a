use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde_json::json;
use sqlx::PgPool;

use crate::db::health::{get_session_by_date, get_sessions, insert_session};
use crate::db::helpers::{db_result, require_record};
use crate::middleware::auth::Claims;
use crate::models::health::{CreateHealthSessionRequest, SessionsQuery};

const DEFAULT_SESSIONS_LIMIT: i64 = 30;

#[tracing::instrument(
    name = "Record health session",
    skip(request, pool, claims),
    fields(
        username = %claims.username,
        date = %request.date
    )
)]
pub async fn record_session(
    request: web::Json<CreateHealthSessionRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    match insert_session(&pool, user_id, &request).await {
        Ok(session) => HttpResponse::Ok().json(session),
        Err(e) => {
            tracing::error!("Failed to record health session: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Database error"
            }))
        }
    }
}

#[tracing::instrument(
    name = "List health sessions",
    skip(query, pool, claims),
    fields(
        username = %claims.username
    )
)]
pub async fn list_sessions(
    query: web::Query<SessionsQuery>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    let limit = query.limit.unwrap_or(DEFAULT_SESSIONS_LIMIT);
    match db_result(get_sessions(&pool, user_id, limit).await) {
        Ok(sessions) => HttpResponse::Ok().json(sessions),
        Err(response) => response,
    }
}

#[tracing::instrument(
    name = "Get health session by date",
    skip(pool, claims),
    fields(
        username = %claims.username,
        date = %date
    )
)]
pub async fn session_by_date(
    date: web::Path<NaiveDate>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    match require_record(
        get_session_by_date(&pool, user_id, *date).await,
        "Session not found",
    ) {
        Ok(session) => HttpResponse::Ok().json(session),
        Err(response) => response,
    }
}
