use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::check_permission;

pub fn init_permissions_router() -> Router<AppState> {
    Router::new().route("/check", get(check_permission))
}
