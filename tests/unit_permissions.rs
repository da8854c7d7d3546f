use std::collections::HashSet;

use ziyarat_models::modules::{ids, module_ids};
use ziyarat_models::{PermissionAction, Role, list_modules};
use ziyarat_rbac::{
    can_manage_module_users, can_view_module, check_permission, get_accessible_modules,
    get_module_category, get_modules_with_user_management, get_role_display_name,
    get_role_permissions, has_role_management_access, has_user_management_access,
    is_admin_or_above, is_super_admin,
};

const UNKNOWN_ROLES: [&str; 6] = [
    "",
    "guest",
    "Admin",
    "SUPER-ADMIN",
    "super admin",
    "hotel_manager",
];

#[test]
fn test_unknown_role_is_denied_everything() {
    for role in UNKNOWN_ROLES {
        assert!(get_role_permissions(role).is_empty(), "{role:?}");
        for module in list_modules() {
            for action in PermissionAction::ALL {
                assert!(
                    !check_permission(role, module.id, action),
                    "{role:?} {action} {}",
                    module.id
                );
            }
        }
        assert!(get_accessible_modules(role).is_empty());
    }
}

#[test]
fn test_unknown_module_is_denied_for_every_role() {
    for role in Role::ALL {
        for module in ["nonexistent-module", "", "Accommodation", "user_management"] {
            for action in PermissionAction::ALL {
                assert!(!check_permission(role.as_str(), module, action));
            }
        }
    }
}

#[test]
fn test_super_admin_holds_every_capability() {
    for module in list_modules() {
        for action in PermissionAction::ALL {
            assert!(check_permission("super-admin", module.id, action));
        }
    }
}

#[test]
fn test_role_management_is_admin_only() {
    for role in Role::ALL {
        let expected = matches!(role, Role::SuperAdmin | Role::Admin);
        assert_eq!(has_role_management_access(role.as_str()), expected, "{role}");
    }
    for role in UNKNOWN_ROLES {
        assert!(!has_role_management_access(role));
    }
}

#[test]
fn test_hotel_manager_user_management_is_derived() {
    assert!(has_user_management_access("hotel-manager"));
    assert!(!has_role_management_access("hotel-manager"));

    assert_eq!(
        get_modules_with_user_management("hotel-manager"),
        vec![
            ids::ACCOMMODATION,
            ids::MAWAID,
            ids::HOUSEKEEPING,
            ids::LAUNDRY,
            ids::MAINTENANCE,
            ids::INVENTORY,
        ]
    );

    // Managing users of a specialty module is not administering user-management.
    assert!(can_view_module("hotel-manager", ids::USER_MANAGEMENT));
    assert!(!check_permission(
        "hotel-manager",
        ids::USER_MANAGEMENT,
        PermissionAction::Add
    ));
    assert!(!check_permission(
        "hotel-manager",
        ids::USER_MANAGEMENT,
        PermissionAction::Edit
    ));
    assert!(!can_manage_module_users("hotel-manager", ids::USER_MANAGEMENT));
}

#[test]
fn test_user_management_access_by_role() {
    assert!(has_user_management_access("super-admin"));
    assert!(has_user_management_access("admin"));
    assert!(has_user_management_access("finance-officer"));
    assert!(has_user_management_access("hr-team"));
    assert!(!has_user_management_access("support-staff"));
    assert!(!has_user_management_access("Mannat-User"));
    assert!(!has_user_management_access("made-up-role"));
}

#[test]
fn test_is_super_admin_tolerates_spelling() {
    assert!(is_super_admin(Some("Super Admin")));
    assert!(is_super_admin(Some("SUPERADMIN")));
    assert!(is_super_admin(Some(" super  admin ")));
    assert!(is_super_admin(Some("super-admin")));
    assert!(is_super_admin(Some("sa")));
    assert!(!is_super_admin(Some("admin")));
    assert!(!is_super_admin(None));
}

#[test]
fn test_is_admin_or_above_is_strict() {
    // The two checks disagree on purpose for near-miss spellings.
    assert!(is_super_admin(Some("Super Admin")));
    assert!(!is_admin_or_above("Super Admin"));

    assert!(is_admin_or_above("super-admin"));
    assert!(is_admin_or_above("admin"));
    assert!(!is_admin_or_above("Admin"));
    assert!(!is_admin_or_above(" admin"));
    assert!(!is_admin_or_above("hotel-manager"));
}

#[test]
fn test_accessible_modules_are_registered() {
    let registry: HashSet<_> = module_ids().collect();
    for role in Role::ALL {
        let accessible = get_accessible_modules(role.as_str());
        assert!(!accessible.is_empty(), "{role} sees nothing");
        for id in accessible {
            assert!(registry.contains(id), "{role} sees unregistered {id}");
        }
    }
}

#[test]
fn test_every_role_sees_the_dashboard() {
    for role in Role::ALL {
        assert!(can_view_module(role.as_str(), ids::DASHBOARD), "{role}");
    }
}

#[test]
fn test_module_category_fallback() {
    assert_eq!(get_module_category("nonexistent-module"), "general");
    assert_eq!(get_module_category(""), "general");
    assert_eq!(get_module_category(ids::LAUNDRY), "facility");
    assert_eq!(get_module_category(ids::MANNAT_NIYAZ), "finance");
    assert_eq!(get_module_category(ids::ROLE_MANAGEMENT), "system");
}

#[test]
fn test_role_display_name_passthrough() {
    assert_eq!(get_role_display_name("made-up-role"), "made-up-role");
    assert_eq!(get_role_display_name(""), "");
    assert_eq!(get_role_display_name("hr-team"), "HR Team");
    assert_eq!(get_role_display_name("Mannat-Finance"), "Mannat Finance");
}
