//! Database query helpers shared by handlers: unwrap an optional row as
//! NotFound, or map a query failure to a 500 response.

use actix_web::HttpResponse;
use serde_json::json;

/// Result type for database operations that return an HttpResponse on error
pub type DbResult<T> = Result<T, HttpResponse>;

/// Unwrap an optional database result, returning NotFound if None.
pub fn require_record<T>(
    result: Result<Option<T>, sqlx::Error>,
    not_found_message: &str,
) -> DbResult<T> {
    match result {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": not_found_message
        }))),
        Err(e) => {
            tracing::error!("Database error: {}", e);
            Err(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Database error"
            })))
        }
    }
}

/// Unwrap a database result, returning InternalServerError on error.
pub fn db_result<T>(result: Result<T, sqlx::Error>) -> DbResult<T> {
    result.map_err(|e| {
        tracing::error!("Database error: {}", e);
        HttpResponse::InternalServerError().json(json!({
            "success": false,
            "message": "Database error"
        }))
    })
}
