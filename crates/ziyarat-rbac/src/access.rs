//! Permission queries over a resolved role string.
//!
//! Every function here is total and default-deny: an unknown role, an
//! unknown module or an unparseable action yields `false`, an empty list or
//! the fallback label. Nothing here returns an error or panics, so a caller
//! can never end up on an "allow" branch by mishandling a failure.

use serde::Serialize;
use utoipa::ToSchema;

use ziyarat_models::{PermissionAction, Role, RolePermissions, find_module};

use crate::matrices::{empty_matrix, matrix_for};

/// Spellings accepted by [`is_super_admin`] after normalisation.
pub const SUPER_ADMIN_ALIASES: [&str; 5] =
    ["super-admin", "super admin", "superadmin", "sa", "super"];

/// Category reported for module ids outside the registry.
pub const GENERAL_CATEGORY: &str = "general";

/// The matrix for `role`, or an empty matrix when the role is unknown.
pub fn get_role_permissions(role: &str) -> &'static RolePermissions {
    match role.parse::<Role>() {
        Ok(role) => matrix_for(role),
        Err(_) => empty_matrix(),
    }
}

/// Whether `role` holds `action` on `module_id`.
pub fn check_permission(role: &str, module_id: &str, action: PermissionAction) -> bool {
    get_role_permissions(role)
        .get(module_id)
        .is_some_and(|record| record.allows(action))
}

/// Like [`check_permission`], with the action given by its wire name.
/// Names that are not one of the eight actions are denied.
pub fn check_permission_named(role: &str, module_id: &str, action: &str) -> bool {
    action
        .parse::<PermissionAction>()
        .is_ok_and(|action| check_permission(role, module_id, action))
}

pub fn can_view_module(role: &str, module_id: &str) -> bool {
    check_permission(role, module_id, PermissionAction::View)
}

pub fn can_add_to_module(role: &str, module_id: &str) -> bool {
    check_permission(role, module_id, PermissionAction::Add)
}

pub fn can_edit_in_module(role: &str, module_id: &str) -> bool {
    check_permission(role, module_id, PermissionAction::Edit)
}

pub fn can_delete_from_module(role: &str, module_id: &str) -> bool {
    check_permission(role, module_id, PermissionAction::Delete)
}

pub fn can_approve_in_module(role: &str, module_id: &str) -> bool {
    check_permission(role, module_id, PermissionAction::Approve)
}

pub fn can_manage_module_users(role: &str, module_id: &str) -> bool {
    check_permission(role, module_id, PermissionAction::ManageUsers)
}

fn modules_where(role: &str, action: PermissionAction) -> Vec<&'static str> {
    get_role_permissions(role)
        .iter()
        .filter(|(_, record)| record.allows(action))
        .map(|(id, _)| *id)
        .collect()
}

/// Module ids `role` can view, in matrix order.
pub fn get_accessible_modules(role: &str) -> Vec<&'static str> {
    modules_where(role, PermissionAction::View)
}

/// Module ids on which `role` may manage users, in matrix order.
pub fn get_modules_with_user_management(role: &str) -> Vec<&'static str> {
    modules_where(role, PermissionAction::ManageUsers)
}

/// Whether the "User Management" section is shown at all.
///
/// The two admin roles always get it. Everyone else gets it when they can
/// manage users on at least one module, which is a narrower grant than
/// administering the `user-management` module itself.
pub fn has_user_management_access(role: &str) -> bool {
    is_admin_or_above(role) || !get_modules_with_user_management(role).is_empty()
}

/// Whether the "Role Management" section is shown. Only the two admin roles,
/// regardless of any matrix.
pub fn has_role_management_access(role: &str) -> bool {
    is_admin_or_above(role)
}

/// Lowercase, trim and collapse whitespace runs to a single space.
pub fn normalize_role(role: &str) -> String {
    role.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Tolerant super-admin match for role strings from inconsistent sources.
///
/// Unlike [`is_admin_or_above`] this normalises the input first, so
/// `"Super Admin"` and `" SUPERADMIN "` both match.
pub fn is_super_admin(role: Option<&str>) -> bool {
    role.map(normalize_role)
        .is_some_and(|role| SUPER_ADMIN_ALIASES.contains(&role.as_str()))
}

/// Exact match against `super-admin` or `admin`. No normalisation.
pub fn is_admin_or_above(role: &str) -> bool {
    matches!(role.parse::<Role>(), Ok(Role::SuperAdmin | Role::Admin))
}

/// Label for `role`, or the input unchanged when the role is unknown.
pub fn get_role_display_name(role: &str) -> &str {
    role.parse::<Role>()
        .map(|role| role.display_name())
        .unwrap_or(role)
}

/// Category slug of `module_id`, or `"general"` when the id is unknown.
pub fn get_module_category(module_id: &str) -> &'static str {
    find_module(module_id)
        .map(|module| module.category.as_str())
        .unwrap_or(GENERAL_CATEGORY)
}

/// Everything the dashboard shell needs to decide what to render for a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RoleAccessSummary {
    pub role: String,
    pub display_name: String,
    pub is_super_admin: bool,
    pub is_admin_or_above: bool,
    pub has_user_management_access: bool,
    pub has_role_management_access: bool,
    #[schema(value_type = Vec<String>)]
    pub accessible_modules: Vec<&'static str>,
    #[schema(value_type = Vec<String>)]
    pub user_management_modules: Vec<&'static str>,
}

pub fn role_access_summary(role: &str) -> RoleAccessSummary {
    RoleAccessSummary {
        role: role.to_string(),
        display_name: get_role_display_name(role).to_string(),
        is_super_admin: is_super_admin(Some(role)),
        is_admin_or_above: is_admin_or_above(role),
        has_user_management_access: has_user_management_access(role),
        has_role_management_access: has_role_management_access(role),
        accessible_modules: get_accessible_modules(role),
        user_management_modules: get_modules_with_user_management(role),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziyarat_models::modules::ids;

    #[test]
    fn test_check_permission_reads_the_record() {
        assert!(check_permission("tour-operator", ids::TOURS, PermissionAction::Edit));
        assert!(!check_permission("tour-operator", ids::TOURS, PermissionAction::Delete));
    }

    #[test]
    fn test_check_permission_named() {
        assert!(check_permission_named("hotel-manager", ids::LAUNDRY, "manageUsers"));
        assert!(!check_permission_named("hotel-manager", ids::LAUNDRY, "manage_users"));
        assert!(!check_permission_named("super-admin", ids::LAUNDRY, "fly"));
    }

    #[test]
    fn test_specialisations_match_actions() {
        let role = "finance-officer";
        let module = ids::MANNAT_NIYAZ;
        assert!(can_view_module(role, module));
        assert!(can_add_to_module(role, module));
        assert!(can_edit_in_module(role, module));
        assert!(!can_delete_from_module(role, module));
        assert!(can_approve_in_module(role, module));
        assert!(!can_manage_module_users(role, module));
    }

    #[test]
    fn test_role_lookup_is_case_sensitive() {
        assert!(get_role_permissions("Hotel-Manager").is_empty());
        assert!(!get_role_permissions("Mannat-User").is_empty());
        assert!(get_role_permissions("mannat-user").is_empty());
    }

    #[test]
    fn test_accessible_modules_keep_matrix_order() {
        assert_eq!(
            get_accessible_modules("Mannat-User"),
            vec![ids::DASHBOARD, ids::MANNAT_NIYAZ]
        );
    }

    #[test]
    fn test_normalize_role() {
        assert_eq!(normalize_role("  Super \t  Admin\n"), "super admin");
        assert_eq!(normalize_role(""), "");
    }

    #[test]
    fn test_is_super_admin_aliases() {
        for alias in ["SA", "Super", "super-admin", "SuperAdmin"] {
            assert!(is_super_admin(Some(alias)), "{alias}");
        }
        assert!(!is_super_admin(Some("super-duper")));
        assert!(!is_super_admin(Some("")));
    }

    #[test]
    fn test_summary_for_unknown_role() {
        let summary = role_access_summary("guest");
        assert_eq!(summary.display_name, "guest");
        assert!(!summary.is_super_admin);
        assert!(!summary.has_user_management_access);
        assert!(summary.accessible_modules.is_empty());
        assert!(summary.user_management_modules.is_empty());
    }

    #[test]
    fn test_summary_for_admin() {
        let summary = role_access_summary("admin");
        assert_eq!(summary.display_name, "Administrator");
        assert!(summary.is_admin_or_above);
        assert!(!summary.is_super_admin);
        assert!(summary.has_role_management_access);
        assert!(!summary.user_management_modules.contains(&ids::ROLE_MANAGEMENT));
    }
}
