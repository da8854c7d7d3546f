use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use ziyarat_models::Module;

#[derive(Debug, Default, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct ModuleFilterParams {
    /// Only modules in this category (operations, finance, staff, facility, masters, system)
    pub category: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModuleListResponse {
    pub data: Vec<Module>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ModuleCategoryResponse {
    pub module_id: String,
    /// Category slug, or `general` for ids outside the registry
    pub category: String,
}
