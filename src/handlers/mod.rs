pub mod citizen_logs;
pub mod dashboard;
pub mod entities;
pub mod procedures;
