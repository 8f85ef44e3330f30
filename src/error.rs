// HTTP API error types and store-error translation
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::database::manager::DbError;

/// HTTP API error with appropriate status codes and client-visible messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request - the store rejected caller-supplied data
    BadRequest(String),

    // 404 Not Found
    NotFound(String),

    // 409 Conflict - duplicate identity or serialization failure
    Conflict(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg)
            | ApiError::InternalServerError(msg)
            | ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "success": false,
            "error": self.message(),
            "code": self.error_code(),
        })
    }
}

// Static constructors
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

/// How a store-reported SQLSTATE maps onto the HTTP surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreRejection {
    /// Content rejected by a trigger or constraint: the caller's fault.
    ClientData,
    /// Uniqueness or serialization failure: concurrent-create collision.
    Conflict,
    /// Anything else: not attributable to the caller.
    Server,
}

/// Classify a Postgres SQLSTATE. Trigger RAISE lands in class P0;
/// integrity_constraint_violation is class 23.
pub fn classify_sqlstate(code: &str) -> StoreRejection {
    match code {
        // unique_violation, serialization_failure
        "23505" | "40001" => StoreRejection::Conflict,
        // not_null, foreign_key, check violations
        "23502" | "23503" | "23514" => StoreRejection::ClientData,
        // raise_exception and friends
        c if c.starts_with("P0") => StoreRejection::ClientData,
        _ => StoreRejection::Server,
    }
}

// Translate database-layer failures into client-visible responses. Write
// rejections coming from the store's trigger/constraint layer carry the
// engine's own message back to the caller with a client-error status.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConfigMissing(name) => {
                ApiError::service_unavailable(format!("missing configuration: {}", name))
            }
            DbError::InvalidDatabaseUrl => {
                ApiError::service_unavailable("invalid database URL")
            }
            DbError::Sqlx(sqlx::Error::Database(db_err)) => {
                let message = db_err.message().to_string();
                match db_err.code().as_deref().map(classify_sqlstate) {
                    Some(StoreRejection::ClientData) => ApiError::bad_request(message),
                    Some(StoreRejection::Conflict) => ApiError::conflict(message),
                    _ => {
                        tracing::error!("database error: {}", message);
                        ApiError::internal_server_error(message)
                    }
                }
            }
            DbError::Sqlx(sqlx::Error::RowNotFound) => ApiError::not_found("record not found"),
            DbError::Sqlx(sqlx::Error::PoolTimedOut) => {
                ApiError::service_unavailable("database temporarily unavailable")
            }
            DbError::Sqlx(other) => {
                tracing::error!("sqlx error: {}", other);
                ApiError::internal_server_error(other.to_string())
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::from(DbError::from(err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON serialization error: {}", err);
        ApiError::internal_server_error("failed to format response")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
