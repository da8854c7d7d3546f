use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_category, get_module, get_modules};

pub fn init_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_modules))
        .route("/{id}", get(get_module))
        .route("/{id}/category", get(get_category))
}
