pub mod employees;
pub mod error;
pub mod ws;

use crate::state::SharedState;
use axum::{routing::get, Router};

async fn health() -> &'static str {
    "OK"
}

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/employees", get(employees::get_employees))
        .route("/ws", get(ws::ws_handler))
        .with_state(state)
}
