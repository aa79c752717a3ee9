//! Employee API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
///
/// | Method | Path | Handler |
/// |--------|------|---------|
/// | GET | /employees | `list` |
/// | POST | /employees | `create` |
/// | GET | /employees/{id} | `get_by_id` |
/// | PUT | /employees/{id} | `update` |
/// | DELETE | /employees/{id} | `delete` |
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/employees", get(handler::list).post(handler::create))
        .route(
            "/employees/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
