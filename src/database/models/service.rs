use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{FromRow, Postgres};

use crate::database::resource::Resource;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Service {
    pub service_id: i32,
    pub name: String,
    pub department_id: Option<i32>,
    pub fee: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceCreate {
    pub name: String,
    pub department_id: Option<i32>,
    pub fee: Option<f64>,
}

impl Resource for Service {
    type Row = Service;
    type Create = ServiceCreate;

    const TABLE: &'static str = "service";
    const ID_COLUMN: &'static str = "service_id";
    const INSERT_COLUMNS: &'static [&'static str] = &["name", "department_id", "fee"];

    fn bind_insert<'q>(
        query: Query<'q, Postgres, PgArguments>,
        payload: &Self::Create,
    ) -> Query<'q, Postgres, PgArguments> {
        query
            .bind(payload.name.clone())
            .bind(payload.department_id)
            .bind(payload.fee)
    }
}
