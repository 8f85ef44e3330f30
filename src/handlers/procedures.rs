use serde_json::{Map, Value};

use crate::database::manager::DatabaseManager;
use crate::database::rows::row_to_record;
use crate::error::ApiError;
use crate::response::{ApiResponse, ApiResult};

/// Run one parameterless stored procedure and pass its result set back
/// verbatim: no transformation, filtering, or pagination. Every failure is a
/// 500 carrying the raw error text; the caller cannot tell a missing
/// procedure from a lost connection, and that boundary is deliberate.
pub(crate) async fn call_procedure(name: &str) -> ApiResult<Vec<Map<String, Value>>> {
    let pool = DatabaseManager::pool()
        .await
        .map_err(|e| ApiError::internal_server_error(e.to_string()))?;

    let sql = format!("SELECT * FROM {}()", name);
    let rows = sqlx::query(&sql)
        .fetch_all(&pool)
        .await
        .map_err(|e| ApiError::internal_server_error(e.to_string()))?;

    let records = rows
        .iter()
        .map(row_to_record)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ApiError::internal_server_error(e.to_string()))?;

    Ok(ApiResponse::success(records))
}

/// GET /api/procedures/department-service-count
pub async fn department_service_count() -> ApiResult<Vec<Map<String, Value>>> {
    call_procedure("sp_department_service_count").await
}

/// GET /api/procedures/pending-requests
pub async fn pending_requests() -> ApiResult<Vec<Map<String, Value>>> {
    call_procedure("sp_pending_requests").await
}

/// GET /api/procedures/payment-summary
pub async fn payment_summary() -> ApiResult<Vec<Map<String, Value>>> {
    call_procedure("sp_payment_summary").await
}

/// GET /api/procedures/grievances-by-department
pub async fn grievances_by_department() -> ApiResult<Vec<Map<String, Value>>> {
    call_procedure("sp_grievances_by_department").await
}
