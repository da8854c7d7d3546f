use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_role_access, get_role_matrix, get_roles};

pub fn init_roles_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_roles))
        .route("/{role}/permissions", get(get_role_matrix))
        .route("/{role}/access", get(get_role_access))
}
