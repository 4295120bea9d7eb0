pub mod models;
pub mod pagination;
pub mod pg_store;
pub mod store;
