use axum::{Json, extract::Query};

use super::model::{CheckPermissionQuery, CheckPermissionResponse};
use super::service;

#[utoipa::path(
    get,
    path = "/api/permissions/check",
    params(CheckPermissionQuery),
    responses(
        (status = 200, description = "Decision for the role, module and action", body = CheckPermissionResponse),
        (status = 400, description = "Missing query parameter")
    ),
    tag = "Permissions"
)]
pub async fn check_permission(
    Query(query): Query<CheckPermissionQuery>,
) -> Json<CheckPermissionResponse> {
    Json(service::check(query))
}
