pub mod app_state;
pub mod error;
pub mod fallback;
pub mod router;
