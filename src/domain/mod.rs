pub mod activity;
pub mod aggregate;
pub mod attendance;
pub mod models;
