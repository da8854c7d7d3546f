//! # Ziyarat RBAC
//!
//! Static role permission matrices and the query façade the dashboard uses
//! to gate navigation and actions.
//!
//! - [`matrices`]: One full module→capability table per role
//! - [`access`]: Default-deny permission queries over a raw role string
//! - [`coverage`]: Load-time check that every matrix covers the registry
//!
//! # Example
//!
//! ```ignore
//! use ziyarat_rbac::access::{can_edit_in_module, get_accessible_modules};
//! use ziyarat_models::modules::ids;
//!
//! if can_edit_in_module(&role, ids::ACCOMMODATION) {
//!     // render the edit button
//! }
//!
//! let sidebar = get_accessible_modules(&role);
//! ```

pub mod access;
pub mod coverage;
pub mod matrices;

pub use access::{
    RoleAccessSummary, can_add_to_module, can_approve_in_module, can_delete_from_module,
    can_edit_in_module, can_manage_module_users, can_view_module, check_permission,
    check_permission_named, get_accessible_modules, get_module_category,
    get_modules_with_user_management, get_role_display_name, get_role_permissions,
    has_role_management_access, has_user_management_access, is_admin_or_above, is_super_admin,
    role_access_summary,
};
pub use coverage::{CoverageError, MatrixGap, check_matrix_coverage, validate_role_matrices};
pub use matrices::matrix_for;
