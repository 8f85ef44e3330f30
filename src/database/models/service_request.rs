use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{FromRow, Postgres};

use crate::database::resource::Resource;

/// Inserting a row here also fires the store trigger that maintains
/// the citizen_log table; see handlers::citizen_logs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceRequest {
    pub request_id: i32,
    pub citizen_id: i32,
    pub service_id: i32,
    pub status: String,
    pub request_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceRequestCreate {
    pub citizen_id: i32,
    pub service_id: i32,
    pub status: String,
    pub request_date: Option<NaiveDate>,
}

impl Resource for ServiceRequest {
    type Row = ServiceRequest;
    type Create = ServiceRequestCreate;

    const TABLE: &'static str = "service_request";
    const ID_COLUMN: &'static str = "request_id";
    const INSERT_COLUMNS: &'static [&'static str] =
        &["citizen_id", "service_id", "status", "request_date"];

    fn bind_insert<'q>(
        query: Query<'q, Postgres, PgArguments>,
        payload: &Self::Create,
    ) -> Query<'q, Postgres, PgArguments> {
        query
            .bind(payload.citizen_id)
            .bind(payload.service_id)
            .bind(payload.status.clone())
            .bind(payload.request_date)
    }
}
