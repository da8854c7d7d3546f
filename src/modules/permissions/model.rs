use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct CheckPermissionQuery {
    /// Role as issued by the login API
    pub role: String,
    /// Module ID, e.g. accommodation
    pub module: String,
    /// One of view, add, edit, delete, approve, lock, restore, manageUsers
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CheckPermissionResponse {
    pub role: String,
    pub module: String,
    pub action: String,
    pub allowed: bool,
}
