use axum::extract::Query;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::response::{ApiResponse, ApiResult};

use super::procedures::call_procedure;

/// Headline counters for the dashboard landing cards
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DashboardStats {
    pub total_citizens: i64,
    pub total_requests: i64,
    pub total_grievances: i64,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecentRequest {
    pub request_id: i32,
    pub citizen_name: String,
    pub service_name: String,
    pub department_name: Option<String>,
    pub request_date: Option<NaiveDate>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DepartmentPerformance {
    pub department_id: i32,
    pub department_name: String,
    pub total_requests: i64,
    pub total_grievances: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MonthlyTrend {
    pub month: String,
    pub total_requests: i64,
}

/// GET /api/dashboard/stats - headline totals across the whole store
pub async fn stats() -> ApiResult<DashboardStats> {
    let pool = DatabaseManager::pool().await?;

    let stats = sqlx::query_as::<_, DashboardStats>(
        "SELECT \
            (SELECT COUNT(*) FROM citizen) AS total_citizens, \
            (SELECT COUNT(*) FROM service_request) AS total_requests, \
            (SELECT COUNT(*) FROM grievance) AS total_grievances, \
            (SELECT COALESCE(SUM(s.fee), 0)::float8 \
               FROM service_request sr \
               JOIN service s ON s.service_id = sr.service_id) AS total_revenue",
    )
    .fetch_one(&pool)
    .await?;

    Ok(ApiResponse::success(stats))
}

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<i64>,
}

/// GET /api/dashboard/recent-requests - latest requests joined with citizen,
/// service, and department display names
pub async fn recent_requests(Query(query): Query<RecentQuery>) -> ApiResult<Vec<RecentRequest>> {
    let limit = query.limit.unwrap_or(10);
    if limit <= 0 {
        return Err(ApiError::bad_request("limit must be a positive integer"));
    }

    let pool = DatabaseManager::pool().await?;

    let rows = sqlx::query_as::<_, RecentRequest>(
        "SELECT sr.request_id, c.name AS citizen_name, s.name AS service_name, \
                d.name AS department_name, sr.request_date, sr.status \
         FROM service_request sr \
         JOIN citizen c ON c.citizen_id = sr.citizen_id \
         JOIN service s ON s.service_id = sr.service_id \
         LEFT JOIN department d ON d.department_id = s.department_id \
         ORDER BY sr.request_id DESC \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(&pool)
    .await?;

    Ok(ApiResponse::success(rows))
}

/// GET /api/dashboard/department-performance - request and grievance volume
/// per department
pub async fn department_performance() -> ApiResult<Vec<DepartmentPerformance>> {
    let pool = DatabaseManager::pool().await?;

    let rows = sqlx::query_as::<_, DepartmentPerformance>(
        "SELECT d.department_id, d.name AS department_name, \
                COUNT(DISTINCT sr.request_id) AS total_requests, \
                COUNT(DISTINCT g.grievance_id) AS total_grievances \
         FROM department d \
         LEFT JOIN service s ON s.department_id = d.department_id \
         LEFT JOIN service_request sr ON sr.service_id = s.service_id \
         LEFT JOIN grievance g ON g.department_id = d.department_id \
         GROUP BY d.department_id, d.name \
         ORDER BY d.department_id",
    )
    .fetch_all(&pool)
    .await?;

    Ok(ApiResponse::success(rows))
}

/// GET /api/dashboard/monthly-trends - service-request volume per month
pub async fn monthly_trends() -> ApiResult<Vec<MonthlyTrend>> {
    let pool = DatabaseManager::pool().await?;

    let rows = sqlx::query_as::<_, MonthlyTrend>(
        "SELECT to_char(date_trunc('month', sr.request_date), 'YYYY-MM') AS month, \
                COUNT(*) AS total_requests \
         FROM service_request sr \
         WHERE sr.request_date IS NOT NULL \
         GROUP BY 1 \
         ORDER BY 1",
    )
    .fetch_all(&pool)
    .await?;

    Ok(ApiResponse::success(rows))
}

/// GET /api/dashboard/department-performance-function - rows of the
/// store-side SQL function, passed through like the procedure proxies
pub async fn department_performance_function() -> ApiResult<Vec<Map<String, Value>>> {
    call_procedure("fn_department_performance").await
}

/// GET /api/dashboard/service-revenue-function - rows of the store-side
/// revenue SQL function
pub async fn service_revenue_function() -> ApiResult<Vec<Map<String, Value>>> {
    call_procedure("fn_service_revenue").await
}
