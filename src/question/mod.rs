pub mod db;
pub mod handlers;
pub mod models;
pub mod search;
