use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the trigger-maintained citizen_log table, joined with the citizen
/// display name. This layer never inserts into citizen_log; the table is a
/// side effect of service-request writes and there is deliberately no
/// `Resource` impl for it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CitizenLog {
    pub log_id: i32,
    pub citizen_id: i32,
    pub citizen_name: String,
    pub total_services: i32,
    pub log_date: DateTime<Utc>,
}
