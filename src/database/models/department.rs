use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{FromRow, Postgres};

use crate::database::resource::Resource;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Department {
    pub department_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentCreate {
    pub name: String,
}

impl Resource for Department {
    type Row = Department;
    type Create = DepartmentCreate;

    const TABLE: &'static str = "department";
    const ID_COLUMN: &'static str = "department_id";
    const INSERT_COLUMNS: &'static [&'static str] = &["name"];

    fn bind_insert<'q>(
        query: Query<'q, Postgres, PgArguments>,
        payload: &Self::Create,
    ) -> Query<'q, Postgres, PgArguments> {
        query.bind(payload.name.clone())
    }
}
