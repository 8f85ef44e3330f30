use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{FromRow, Postgres};

use crate::database::resource::Resource;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Grievance {
    pub grievance_id: i32,
    pub citizen_id: i32,
    pub department_id: i32,
    pub description: Option<String>,
    /// Constrained to a fixed vocabulary by a store trigger
    pub status: String,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GrievanceCreate {
    pub citizen_id: i32,
    pub department_id: i32,
    pub description: Option<String>,
    pub status: String,
    pub date: Option<NaiveDate>,
}

impl Resource for Grievance {
    type Row = Grievance;
    type Create = GrievanceCreate;

    const TABLE: &'static str = "grievance";
    const ID_COLUMN: &'static str = "grievance_id";
    const INSERT_COLUMNS: &'static [&'static str] =
        &["citizen_id", "department_id", "description", "status", "date"];

    fn bind_insert<'q>(
        query: Query<'q, Postgres, PgArguments>,
        payload: &Self::Create,
    ) -> Query<'q, Postgres, PgArguments> {
        query
            .bind(payload.citizen_id)
            .bind(payload.department_id)
            .bind(payload.description.clone())
            .bind(payload.status.clone())
            .bind(payload.date)
    }
}
