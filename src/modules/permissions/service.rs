use ziyarat_rbac::check_permission_named;

use crate::metrics::track_permission_check;

use super::model::{CheckPermissionQuery, CheckPermissionResponse};

/// Evaluate a single check. Unknown roles, modules and actions are denied.
pub fn check(query: CheckPermissionQuery) -> CheckPermissionResponse {
    let allowed = check_permission_named(&query.role, &query.module, &query.action);
    track_permission_check(&query.module, &query.action, allowed);

    if !allowed {
        tracing::debug!(
            role = %query.role,
            module = %query.module,
            action = %query.action,
            "Permission denied"
        );
    }

    CheckPermissionResponse {
        role: query.role,
        module: query.module,
        action: query.action,
        allowed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(role: &str, module: &str, action: &str) -> CheckPermissionQuery {
        CheckPermissionQuery {
            role: role.to_string(),
            module: module.to_string(),
            action: action.to_string(),
        }
    }

    #[test]
    fn test_check_echoes_input() {
        let result = check(query("hotel-manager", "housekeeping", "manageUsers"));
        assert_eq!(
            result,
            CheckPermissionResponse {
                role: "hotel-manager".to_string(),
                module: "housekeeping".to_string(),
                action: "manageUsers".to_string(),
                allowed: true,
            }
        );
    }

    #[test]
    fn test_check_denies_unknown_inputs() {
        assert!(!check(query("guest", "housekeeping", "view")).allowed);
        assert!(!check(query("admin", "casino", "view")).allowed);
        assert!(!check(query("admin", "housekeeping", "teleport")).allowed);
    }
}
