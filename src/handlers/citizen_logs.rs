use crate::database::manager::DatabaseManager;
use crate::database::models::CitizenLog;
use crate::response::{ApiResponse, ApiResult};

/// Hard cap on returned log rows
const LOG_LIMIT: i64 = 50;

/// GET /api/citizen-logs - most recent trigger-written log rows, newest
/// first, joined with the citizen display name. Read-only surface: the store
/// trigger owns citizen_log and no write endpoint exists for it.
pub async fn list_citizen_logs() -> ApiResult<Vec<CitizenLog>> {
    let pool = DatabaseManager::pool().await?;

    let logs = sqlx::query_as::<_, CitizenLog>(
        "SELECT cl.log_id, cl.citizen_id, c.name AS citizen_name, \
                cl.total_services, cl.log_date \
         FROM citizen_log cl \
         JOIN citizen c ON c.citizen_id = cl.citizen_id \
         ORDER BY cl.log_date DESC \
         LIMIT $1",
    )
    .bind(LOG_LIMIT)
    .fetch_all(&pool)
    .await?;

    Ok(ApiResponse::success(logs))
}
