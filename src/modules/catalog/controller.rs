use axum::{
    Json,
    extract::{Path, Query},
};
use ziyarat_core::AppError;
use ziyarat_models::modules::modules_in_category;
use ziyarat_models::{Module, ModuleCategory, find_module, list_modules};
use ziyarat_rbac::get_module_category;

use super::model::{ModuleCategoryResponse, ModuleFilterParams, ModuleListResponse};

#[utoipa::path(
    get,
    path = "/api/modules",
    params(ModuleFilterParams),
    responses(
        (status = 200, description = "Module registry in declaration order", body = ModuleListResponse),
        (status = 400, description = "Unknown category")
    ),
    tag = "Modules"
)]
pub async fn get_modules(
    Query(params): Query<ModuleFilterParams>,
) -> Result<Json<ModuleListResponse>, AppError> {
    let data: Vec<Module> = match params.category.as_deref() {
        Some(raw) => {
            let category: ModuleCategory = raw.parse().map_err(AppError::bad_request)?;
            modules_in_category(category).copied().collect()
        }
        None => list_modules().to_vec(),
    };

    Ok(Json(ModuleListResponse {
        total: data.len(),
        data,
    }))
}

#[utoipa::path(
    get,
    path = "/api/modules/{id}",
    params(
        ("id" = String, Path, description = "Module ID")
    ),
    responses(
        (status = 200, description = "Module details", body = Module),
        (status = 404, description = "Module not found")
    ),
    tag = "Modules"
)]
pub async fn get_module(Path(id): Path<String>) -> Result<Json<Module>, AppError> {
    find_module(&id)
        .copied()
        .map(Json)
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Module not found: {}", id)))
}

#[utoipa::path(
    get,
    path = "/api/modules/{id}/category",
    params(
        ("id" = String, Path, description = "Module ID")
    ),
    responses(
        (status = 200, description = "Category of the module, `general` when unknown", body = ModuleCategoryResponse)
    ),
    tag = "Modules"
)]
pub async fn get_category(Path(id): Path<String>) -> Json<ModuleCategoryResponse> {
    let category = get_module_category(&id).to_string();
    Json(ModuleCategoryResponse {
        module_id: id,
        category,
    })
}
