//! Text renderers behind the `ziyarat-cli` subcommands.
//!
//! Each function returns the full output as a `String` so the binary only
//! prints and the formatting stays testable.

use std::fmt::Write as _;

use ziyarat_models::modules::modules_in_category;
use ziyarat_models::{ModuleCategory, PermissionAction, Role, find_module, list_modules};
use ziyarat_rbac::{
    CoverageError, check_permission_named, get_module_category, get_role_display_name,
    get_role_permissions, role_access_summary, validate_role_matrices,
};

const COLUMNS: [&str; 8] = ["view", "add", "edit", "del", "appr", "lock", "rest", "users"];

fn mark(granted: bool) -> &'static str {
    if granted { "✓" } else { "·" }
}

/// Registry table, optionally narrowed to one category.
pub fn render_modules(category: Option<ModuleCategory>) -> String {
    let modules: Vec<_> = match category {
        Some(category) => modules_in_category(category).collect(),
        None => list_modules().iter().collect(),
    };

    let mut out = String::new();
    let _ = writeln!(out, "{:<18} {:<18} {:<11} PATH", "ID", "NAME", "CATEGORY");
    for module in &modules {
        let _ = writeln!(
            out,
            "{:<18} {:<18} {:<11} /{}",
            module.id, module.name, module.category, module.path
        );
    }
    let _ = writeln!(out, "{} module(s)", modules.len());
    out
}

pub fn render_roles() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<16} NAME", "ROLE");
    for role in Role::ALL {
        let _ = writeln!(out, "{:<16} {}", role.as_str(), role.display_name());
    }
    out
}

/// One row per module with a mark per capability, followed by the derived
/// access flags.
pub fn render_matrix(role: &str) -> String {
    let matrix = get_role_permissions(role);
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", get_role_display_name(role), role);
    if matrix.is_empty() {
        let _ = writeln!(out, "No permissions: unknown role");
        return out;
    }

    let _ = write!(out, "{:<18}", "MODULE");
    for column in COLUMNS {
        let _ = write!(out, " {:>5}", column);
    }
    let _ = writeln!(out);

    for (module_id, record) in matrix {
        let _ = write!(out, "{:<18}", module_id);
        for action in PermissionAction::ALL {
            let _ = write!(out, " {:>5}", mark(record.allows(action)));
        }
        let _ = writeln!(out);
    }

    let summary = role_access_summary(role);
    let _ = writeln!(
        out,
        "user management: {}, role management: {}",
        if summary.has_user_management_access { "yes" } else { "no" },
        if summary.has_role_management_access { "yes" } else { "no" },
    );
    out
}

/// Single decision line, e.g. `hotel-manager edit laundry: allowed`.
pub fn render_check(role: &str, module_id: &str, action: &str) -> String {
    let allowed = check_permission_named(role, module_id, action);
    let mut line = format!(
        "{} {} {}: {}",
        role,
        action,
        module_id,
        if allowed { "allowed" } else { "denied" }
    );

    if find_module(module_id).is_none() {
        let _ = write!(line, " (unknown module, category {})", get_module_category(module_id));
    }
    if action.parse::<PermissionAction>().is_err() {
        let _ = write!(line, " (unknown action)");
    }
    line
}

/// Coverage report and whether every matrix matched the registry.
pub fn render_coverage() -> (bool, String) {
    render_coverage_result(validate_role_matrices())
}

pub fn render_coverage_result(result: Result<(), CoverageError>) -> (bool, String) {
    match result {
        Ok(()) => (
            true,
            format!(
                "All {} role matrices cover the {} registry modules",
                Role::ALL.len(),
                list_modules().len()
            ),
        ),
        Err(err) => {
            let mut out = String::new();
            for gap in &err.gaps {
                let _ = writeln!(out, "{}", gap);
            }
            (false, out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziyarat_models::modules::ids;

    #[test]
    fn test_render_modules_filters_by_category() {
        let out = render_modules(Some(ModuleCategory::System));
        assert!(out.contains(ids::USER_MANAGEMENT));
        assert!(out.contains(ids::SETTINGS));
        assert!(!out.contains(ids::LAUNDRY));
        assert!(out.ends_with("3 module(s)\n"));
    }

    #[test]
    fn test_render_roles_lists_every_role() {
        let out = render_roles();
        for role in Role::ALL {
            assert!(out.contains(role.as_str()));
        }
    }

    #[test]
    fn test_render_matrix_unknown_role() {
        let out = render_matrix("made-up-role");
        assert!(out.starts_with("made-up-role (made-up-role)"));
        assert!(out.contains("unknown role"));
    }

    #[test]
    fn test_render_matrix_hotel_manager() {
        let out = render_matrix("hotel-manager");
        assert!(out.starts_with("Hotel Manager (hotel-manager)"));
        assert!(out.contains("user management: yes, role management: no"));
    }

    #[test]
    fn test_render_check() {
        assert_eq!(
            render_check("hotel-manager", ids::LAUNDRY, "edit"),
            "hotel-manager edit laundry: allowed"
        );
        assert_eq!(
            render_check("admin", "casino", "view"),
            "admin view casino: denied (unknown module, category general)"
        );
        assert_eq!(
            render_check("admin", ids::TOURS, "fly"),
            "admin fly tours: denied (unknown action)"
        );
    }

    #[test]
    fn test_render_coverage_passes() {
        let (ok, out) = render_coverage();
        assert!(ok);
        assert!(out.starts_with("All 9 role matrices"));
    }

    #[test]
    fn test_render_coverage_lists_gaps() {
        let mut matrix = get_role_permissions("hr-team").clone();
        matrix.shift_remove(ids::ATTENDANCE);
        matrix.shift_remove(ids::LOCATIONS);
        let gap = ziyarat_rbac::check_matrix_coverage(Role::HrTeam, &matrix).unwrap();

        let (ok, out) = render_coverage_result(Err(CoverageError { gaps: vec![gap] }));
        assert!(!ok);
        assert_eq!(out, "hr-team: missing [attendance, locations]\n");
    }
}
