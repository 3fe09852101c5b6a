use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::health::{
    CreateHealthMetricRequest, CreateHealthSessionRequest, HealthMetric, HealthMetricSession,
    HealthMetricsFilter, MetricType,
};
use crate::utils::conditions::evaluate_condition;

const METRIC_COLUMNS: &str =
    "id, user_id, metric_type, value, unit, notes, condition, recorded_at, created_at";

const SESSION_COLUMNS: &str = "id, user_id, date, bp_systolic, bp_diastolic, blood_sugar, \
     bmi, weight, height, temperature, pulse, notes, created_at";

/// Insert a single measurement. The unit falls back to the per-type default
/// and the condition label is always derived here, regardless of what the
/// caller sent.
pub async fn insert_metric(
    pool: &PgPool,
    user_id: Uuid,
    request: &CreateHealthMetricRequest,
) -> Result<HealthMetric, sqlx::Error> {
    let unit = request
        .unit
        .clone()
        .unwrap_or_else(|| request.metric_type.default_unit().to_string());
    let condition = evaluate_condition(request.metric_type, request.value);
    let recorded_at = request.recorded_at.unwrap_or_else(Utc::now);

    sqlx::query_as::<_, HealthMetric>(&format!(
        r#"
        INSERT INTO health_metrics (id, user_id, metric_type, value, unit, notes, condition, recorded_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {METRIC_COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(request.metric_type.as_str())
    .bind(request.value)
    .bind(unit)
    .bind(&request.notes)
    .bind(condition.as_str())
    .bind(recorded_at)
    .fetch_one(pool)
    .await
}

/// Filtered, paginated listing, newest first. The date bounds only apply when
/// both are present.
pub async fn get_metrics(
    pool: &PgPool,
    user_id: Uuid,
    filter: &HealthMetricsFilter,
) -> Result<(Vec<HealthMetric>, i64), sqlx::Error> {
    let limit = filter.limit.unwrap_or(100);
    let offset = filter.offset.unwrap_or(0);
    let metric_type = filter.metric_type.map(|t| t.as_str());
    let (start_date, end_date) = match (filter.start_date, filter.end_date) {
        (Some(start), Some(end)) => (Some(start), Some(end)),
        _ => (None, None),
    };

    let rows = sqlx::query_as::<_, HealthMetric>(&format!(
        r#"
        SELECT {METRIC_COLUMNS}
        FROM health_metrics
        WHERE user_id = $1
          AND ($2::varchar IS NULL OR metric_type = $2)
          AND ($3::timestamptz IS NULL OR recorded_at BETWEEN $3 AND $4)
        ORDER BY recorded_at DESC
        LIMIT $5 OFFSET $6
        "#
    ))
    .bind(user_id)
    .bind(metric_type)
    .bind(start_date)
    .bind(end_date)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let total: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM health_metrics
        WHERE user_id = $1
          AND ($2::varchar IS NULL OR metric_type = $2)
          AND ($3::timestamptz IS NULL OR recorded_at BETWEEN $3 AND $4)
        "#,
    )
    .bind(user_id)
    .bind(metric_type)
    .bind(start_date)
    .bind(end_date)
    .fetch_one(pool)
    .await?;

    Ok((rows, total))
}

/// Latest row per metric type in a single grouped read.
pub async fn latest_metrics_per_type(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<HealthMetric>, sqlx::Error> {
    sqlx::query_as::<_, HealthMetric>(&format!(
        r#"
        SELECT DISTINCT ON (metric_type) {METRIC_COLUMNS}
        FROM health_metrics
        WHERE user_id = $1
        ORDER BY metric_type, recorded_at DESC
        "#
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// All rows on or after the cutoff, newest first. Feeds the trend window.
pub async fn metrics_since(
    pool: &PgPool,
    user_id: Uuid,
    cutoff: DateTime<Utc>,
) -> Result<Vec<HealthMetric>, sqlx::Error> {
    sqlx::query_as::<_, HealthMetric>(&format!(
        r#"
        SELECT {METRIC_COLUMNS}
        FROM health_metrics
        WHERE user_id = $1 AND recorded_at >= $2
        ORDER BY recorded_at DESC
        "#
    ))
    .bind(user_id)
    .bind(cutoff)
    .fetch_all(pool)
    .await
}

/// Rows inside [start, end], oldest first, optionally narrowed to one type.
pub async fn metrics_in_range(
    pool: &PgPool,
    user_id: Uuid,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    metric_type: Option<MetricType>,
) -> Result<Vec<HealthMetric>, sqlx::Error> {
    sqlx::query_as::<_, HealthMetric>(&format!(
        r#"
        SELECT {METRIC_COLUMNS}
        FROM health_metrics
        WHERE user_id = $1
          AND recorded_at BETWEEN $2 AND $3
          AND ($4::varchar IS NULL OR metric_type = $4)
        ORDER BY recorded_at ASC
        "#
    ))
    .bind(user_id)
    .bind(start)
    .bind(end)
    .bind(metric_type.map(|t| t.as_str()))
    .fetch_all(pool)
    .await
}

/// Store a daily snapshot verbatim. No upsert: a second submission for the
/// same date adds another row.
pub async fn insert_session(
    pool: &PgPool,
    user_id: Uuid,
    request: &CreateHealthSessionRequest,
) -> Result<HealthMetricSession, sqlx::Error> {
    sqlx::query_as::<_, HealthMetricSession>(&format!(
        r#"
        INSERT INTO health_metric_sessions
            (id, user_id, date, bp_systolic, bp_diastolic, blood_sugar, bmi,
             weight, height, temperature, pulse, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING {SESSION_COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(request.date)
    .bind(request.bp_systolic)
    .bind(request.bp_diastolic)
    .bind(request.blood_sugar)
    .bind(request.bmi)
    .bind(request.weight)
    .bind(request.height)
    .bind(request.temperature)
    .bind(request.pulse)
    .bind(&request.notes)
    .fetch_one(pool)
    .await
}

pub async fn get_sessions(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
) -> Result<Vec<HealthMetricSession>, sqlx::Error> {
    sqlx::query_as::<_, HealthMetricSession>(&format!(
        r#"
        SELECT {SESSION_COLUMNS}
        FROM health_metric_sessions
        WHERE user_id = $1
        ORDER BY date DESC
        LIMIT $2
        "#
    ))
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn get_session_by_date(
    pool: &PgPool,
    user_id: Uuid,
    date: NaiveDate,
) -> Result<Option<HealthMetricSession>, sqlx::Error> {
    sqlx::query_as::<_, HealthMetricSession>(&format!(
        r#"
        SELECT {SESSION_COLUMNS}
        FROM health_metric_sessions
        WHERE user_id = $1 AND date = $2
        ORDER BY created_at DESC
        LIMIT 1
        "#
    ))
    .bind(user_id)
    .bind(date)
    .fetch_optional(pool)
    .await
}
