pub mod manager;
pub mod models;
pub mod resource;
pub mod rows;
