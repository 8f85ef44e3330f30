use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{FromRow, Postgres};

use crate::database::resource::Resource;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Citizen {
    pub citizen_id: i32,
    pub name: String,
    pub contact: Option<String>,
    pub address: Option<String>,
}

/// Create payload: everything but the identity. A store trigger rejects
/// empty names; this layer does not duplicate that rule.
#[derive(Debug, Clone, Deserialize)]
pub struct CitizenCreate {
    pub name: String,
    pub contact: Option<String>,
    pub address: Option<String>,
}

impl Resource for Citizen {
    type Row = Citizen;
    type Create = CitizenCreate;

    const TABLE: &'static str = "citizen";
    const ID_COLUMN: &'static str = "citizen_id";
    const INSERT_COLUMNS: &'static [&'static str] = &["name", "contact", "address"];

    fn bind_insert<'q>(
        query: Query<'q, Postgres, PgArguments>,
        payload: &Self::Create,
    ) -> Query<'q, Postgres, PgArguments> {
        query
            .bind(payload.name.clone())
            .bind(payload.contact.clone())
            .bind(payload.address.clone())
    }
}
