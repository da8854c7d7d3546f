use serde::Serialize;
use utoipa::ToSchema;
use ziyarat_models::{Role, RolePermissions};

#[derive(Debug, Serialize, ToSchema)]
pub struct RoleInfo {
    pub role: Role,
    pub display_name: String,
}

impl From<Role> for RoleInfo {
    fn from(role: Role) -> Self {
        Self {
            role,
            display_name: role.display_name().to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoleListResponse {
    pub data: Vec<RoleInfo>,
}

/// A role's full matrix. Unknown roles get an empty `permissions` object.
#[derive(Debug, Serialize, ToSchema)]
pub struct RolePermissionsResponse {
    pub role: String,
    pub display_name: String,
    /// Whether `role` is one of the known roles
    pub known: bool,
    /// Module id to capability record, in matrix order
    #[schema(value_type = Object)]
    pub permissions: RolePermissions,
}
