use utoipa::OpenApi;

use crate::modules::catalog::model::{
    ModuleCategoryResponse, ModuleFilterParams, ModuleListResponse,
};
use crate::modules::permissions::model::{CheckPermissionQuery, CheckPermissionResponse};
use crate::modules::roles::model::{RoleInfo, RoleListResponse, RolePermissionsResponse};
use ziyarat_models::{Module, ModuleCategory, ModulePermissions, PermissionAction, Role};
use ziyarat_rbac::RoleAccessSummary;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::catalog::controller::get_modules,
        crate::modules::catalog::controller::get_module,
        crate::modules::catalog::controller::get_category,
        crate::modules::roles::controller::get_roles,
        crate::modules::roles::controller::get_role_matrix,
        crate::modules::roles::controller::get_role_access,
        crate::modules::permissions::controller::check_permission,
    ),
    components(
        schemas(
            Module,
            ModuleCategory,
            ModuleFilterParams,
            ModuleListResponse,
            ModuleCategoryResponse,
            ModulePermissions,
            PermissionAction,
            Role,
            RoleInfo,
            RoleListResponse,
            RolePermissionsResponse,
            RoleAccessSummary,
            CheckPermissionQuery,
            CheckPermissionResponse,
        )
    ),
    tags(
        (name = "Modules", description = "Module registry"),
        (name = "Roles", description = "Role permission matrices and derived access"),
        (name = "Permissions", description = "Single permission decisions")
    ),
    info(
        title = "Ziyarat RBAC API",
        version = "0.1.0",
        description = "Read-only permission queries for the Ziyarat admin dashboard"
    )
)]
pub struct ApiDoc;
