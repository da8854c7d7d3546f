use axum::{Json, extract::Path};
use ziyarat_models::Role;
use ziyarat_rbac::{
    RoleAccessSummary, get_role_display_name, get_role_permissions, role_access_summary,
};

use super::model::{RoleInfo, RoleListResponse, RolePermissionsResponse};

#[utoipa::path(
    get,
    path = "/api/roles",
    responses(
        (status = 200, description = "Known roles with display names", body = RoleListResponse)
    ),
    tag = "Roles"
)]
pub async fn get_roles() -> Json<RoleListResponse> {
    Json(RoleListResponse {
        data: Role::ALL.into_iter().map(RoleInfo::from).collect(),
    })
}

#[utoipa::path(
    get,
    path = "/api/roles/{role}/permissions",
    params(
        ("role" = String, Path, description = "Role as issued by the login API, e.g. hotel-manager")
    ),
    responses(
        (status = 200, description = "Permission matrix, empty for unknown roles", body = RolePermissionsResponse)
    ),
    tag = "Roles"
)]
pub async fn get_role_matrix(Path(role): Path<String>) -> Json<RolePermissionsResponse> {
    let known = role.parse::<Role>().is_ok();
    if !known {
        tracing::debug!(role = %role, "Matrix requested for unknown role");
    }

    Json(RolePermissionsResponse {
        display_name: get_role_display_name(&role).to_string(),
        known,
        permissions: get_role_permissions(&role).clone(),
        role,
    })
}

#[utoipa::path(
    get,
    path = "/api/roles/{role}/access",
    params(
        ("role" = String, Path, description = "Role as issued by the login API")
    ),
    responses(
        (status = 200, description = "Derived access flags and visible modules", body = RoleAccessSummary)
    ),
    tag = "Roles"
)]
pub async fn get_role_access(Path(role): Path<String>) -> Json<RoleAccessSummary> {
    Json(role_access_summary(&role))
}
