use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::database::manager::DatabaseManager;
use crate::database::resource::{Resource, ResourceStore};
use crate::error::ApiError;
use crate::response::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Pagination (optional)
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Validate the list window: skip must be non-negative, limit positive
fn window(query: &ListQuery) -> Result<(i64, i64), ApiError> {
    let skip = query.skip.unwrap_or(0);
    if skip < 0 {
        return Err(ApiError::bad_request("skip must be non-negative"));
    }
    let limit = query.limit.unwrap_or(100);
    if limit <= 0 {
        return Err(ApiError::bad_request("limit must be a positive integer"));
    }
    Ok((skip, limit))
}

/// GET /api/<entities> - window over the table in identity order
pub async fn list<R: Resource>(Query(query): Query<ListQuery>) -> ApiResult<Value> {
    let (skip, limit) = window(&query)?;

    let pool = DatabaseManager::pool().await?;
    let store = ResourceStore::<R>::new(pool);
    let rows = store.list(skip, limit).await?;

    Ok(ApiResponse::success(serde_json::to_value(rows)?))
}

/// POST /api/<entities> - create one row with the next assigned identity.
/// Store-side rejections come back as 400 with the engine's message.
pub async fn create<R: Resource>(Json(payload): Json<R::Create>) -> ApiResult<Value> {
    let pool = DatabaseManager::pool().await?;
    let store = ResourceStore::<R>::new(pool);
    let row = store.create(&payload).await?;

    Ok(ApiResponse::created(serde_json::to_value(row)?))
}

/// GET /api/<entities>/:id - fetch one row by identity
pub async fn get_one<R: Resource>(Path(id): Path<i32>) -> ApiResult<Value> {
    let pool = DatabaseManager::pool().await?;
    let store = ResourceStore::<R>::new(pool);

    match store.get(id).await? {
        Some(row) => Ok(ApiResponse::success(serde_json::to_value(row)?)),
        None => Err(ApiError::not_found(format!("{} {} not found", R::TABLE, id))),
    }
}

/// PUT /api/<entities>/:id - full update (fields minus identity)
pub async fn update_one<R: Resource>(
    Path(id): Path<i32>,
    Json(payload): Json<R::Create>,
) -> ApiResult<Value> {
    let pool = DatabaseManager::pool().await?;
    let store = ResourceStore::<R>::new(pool);

    match store.update(id, &payload).await? {
        Some(row) => Ok(ApiResponse::success(serde_json::to_value(row)?)),
        None => Err(ApiError::not_found(format!("{} {} not found", R::TABLE, id))),
    }
}

/// DELETE /api/<entities>/:id - delete one row, returning it
pub async fn delete_one<R: Resource>(Path(id): Path<i32>) -> ApiResult<Value> {
    let pool = DatabaseManager::pool().await?;
    let store = ResourceStore::<R>::new(pool);

    match store.delete(id).await? {
        Some(row) => Ok(ApiResponse::success(serde_json::to_value(row)?)),
        None => Err(ApiError::not_found(format!("{} {} not found", R::TABLE, id))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(skip: Option<i64>, limit: Option<i64>) -> ListQuery {
        ListQuery { skip, limit }
    }

    #[test]
    fn window_defaults() {
        assert_eq!(window(&query(None, None)).unwrap(), (0, 100));
        assert_eq!(window(&query(Some(5), Some(20))).unwrap(), (5, 20));
    }

    #[test]
    fn window_rejects_non_positive_limit() {
        assert!(window(&query(None, Some(0))).is_err());
        assert!(window(&query(None, Some(-5))).is_err());
    }

    #[test]
    fn window_rejects_negative_skip() {
        assert!(window(&query(Some(-1), None)).is_err());
    }
}
