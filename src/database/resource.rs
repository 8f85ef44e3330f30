use serde::{de::DeserializeOwned, Serialize};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{FromRow, PgPool, Postgres};

use crate::database::manager::DbError;

/// Shape of one REST-exposed entity: its table, identity column, and the
/// columns a create payload supplies. One `ResourceStore` implementation
/// serves every entity through this trait.
pub trait Resource: Send + Sync + 'static {
    type Row: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin;
    type Create: DeserializeOwned + Send + Sync;

    const TABLE: &'static str;
    const ID_COLUMN: &'static str;
    /// Insert columns in bind order, identity excluded
    const INSERT_COLUMNS: &'static [&'static str];

    /// Bind the create payload's fields in `INSERT_COLUMNS` order
    fn bind_insert<'q>(
        query: Query<'q, Postgres, PgArguments>,
        payload: &Self::Create,
    ) -> Query<'q, Postgres, PgArguments>;
}

pub struct ResourceStore<R: Resource> {
    pool: PgPool,
    _marker: std::marker::PhantomData<R>,
}

impl<R: Resource> ResourceStore<R> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _marker: std::marker::PhantomData,
        }
    }

    /// List rows in identity order with offset/limit windowing
    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<R::Row>, DbError> {
        let sql = Self::list_sql();
        let rows = sqlx::query_as::<_, R::Row>(&sql)
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create one row. The identity is computed as max + 1 inside a
    /// SERIALIZABLE transaction: concurrent creates either serialize or fail
    /// with a conflict, never commit a duplicate identity. Trigger and
    /// constraint rejections abort the transaction (rolled back on drop) and
    /// bubble up with the engine's message intact.
    pub async fn create(&self, payload: &R::Create) -> Result<R::Row, DbError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *tx)
            .await?;

        let max_sql = format!(
            "SELECT COALESCE(MAX({}), 0) + 1 FROM {}",
            R::ID_COLUMN,
            R::TABLE
        );
        let next_id: i32 = sqlx::query_scalar(&max_sql).fetch_one(&mut *tx).await?;

        let insert_sql = Self::insert_sql();
        let insert = R::bind_insert(sqlx::query(&insert_sql).bind(next_id), payload);
        insert.execute(&mut *tx).await?;

        // Re-read so store-computed defaults land in the response
        let select_sql = format!(
            "SELECT * FROM {} WHERE {} = $1",
            R::TABLE,
            R::ID_COLUMN
        );
        let row = sqlx::query_as::<_, R::Row>(&select_sql)
            .bind(next_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row)
    }

    /// Fetch one row by identity
    pub async fn get(&self, id: i32) -> Result<Option<R::Row>, DbError> {
        let sql = format!(
            "SELECT * FROM {} WHERE {} = $1",
            R::TABLE,
            R::ID_COLUMN
        );
        let row = sqlx::query_as::<_, R::Row>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Full update of one row (fields minus identity). Returns None when the
    /// identity does not exist; store rejections bubble up with the engine's
    /// message, same as create.
    pub async fn update(&self, id: i32, payload: &R::Create) -> Result<Option<R::Row>, DbError> {
        let sql = Self::update_sql();
        let query = R::bind_insert(sqlx::query(&sql).bind(id), payload);
        match query.fetch_optional(&self.pool).await? {
            Some(row) => Ok(Some(R::Row::from_row(&row)?)),
            None => Ok(None),
        }
    }

    /// Delete one row by identity, returning it. None when absent.
    pub async fn delete(&self, id: i32) -> Result<Option<R::Row>, DbError> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = $1 RETURNING *",
            R::TABLE,
            R::ID_COLUMN
        );
        let row = sqlx::query_as::<_, R::Row>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    fn list_sql() -> String {
        format!(
            "SELECT * FROM {} ORDER BY {} LIMIT $1 OFFSET $2",
            R::TABLE,
            R::ID_COLUMN
        )
    }

    fn insert_sql() -> String {
        let placeholders: Vec<String> = (0..R::INSERT_COLUMNS.len())
            .map(|i| format!("${}", i + 2))
            .collect();
        format!(
            "INSERT INTO {} ({}, {}) VALUES ($1, {})",
            R::TABLE,
            R::ID_COLUMN,
            R::INSERT_COLUMNS.join(", "),
            placeholders.join(", ")
        )
    }

    fn update_sql() -> String {
        let assignments: Vec<String> = R::INSERT_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{} = ${}", col, i + 2))
            .collect();
        format!(
            "UPDATE {} SET {} WHERE {} = $1 RETURNING *",
            R::TABLE,
            assignments.join(", "),
            R::ID_COLUMN
        )
    }
}
