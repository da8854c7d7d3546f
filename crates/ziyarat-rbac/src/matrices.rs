//! Per-role permission matrices.
//!
//! Every role except `super-admin` is written out in full, one row per
//! registry module with all eight flags explicit. No role extends another.
//! Adding a module to the registry means adding a row to every matrix here;
//! [`crate::coverage`] reports any matrix that was missed.
//!
//! Columns: view, add, edit, delete, approve, lock, restore, manageUsers.

use std::sync::OnceLock;

use ziyarat_models::modules::{ids, list_modules};
use ziyarat_models::{ModulePermissions, Role, RolePermissions};

const T: bool = true;
const F: bool = false;

#[allow(clippy::too_many_arguments)]
const fn p(
    view: bool,
    add: bool,
    edit: bool,
    delete: bool,
    approve: bool,
    lock: bool,
    restore: bool,
    manage_users: bool,
) -> ModulePermissions {
    ModulePermissions::new(view, add, edit, delete, approve, lock, restore, manage_users)
}

const NONE: ModulePermissions = ModulePermissions::none();
const VIEW: ModulePermissions = p(T, F, F, F, F, F, F, F);

fn matrix(rows: &[(&'static str, ModulePermissions)]) -> RolePermissions {
    rows.iter().copied().collect()
}

/// The matrix for `role`. Built on first use and shared for the process
/// lifetime.
pub fn matrix_for(role: Role) -> &'static RolePermissions {
    static SUPER_ADMIN: OnceLock<RolePermissions> = OnceLock::new();
    static ADMIN: OnceLock<RolePermissions> = OnceLock::new();
    static TOUR_OPERATOR: OnceLock<RolePermissions> = OnceLock::new();
    static HOTEL_MANAGER: OnceLock<RolePermissions> = OnceLock::new();
    static FINANCE_OFFICER: OnceLock<RolePermissions> = OnceLock::new();
    static HR_TEAM: OnceLock<RolePermissions> = OnceLock::new();
    static SUPPORT_STAFF: OnceLock<RolePermissions> = OnceLock::new();
    static MANNAT_FINANCE: OnceLock<RolePermissions> = OnceLock::new();
    static MANNAT_USER: OnceLock<RolePermissions> = OnceLock::new();

    match role {
        Role::SuperAdmin => SUPER_ADMIN.get_or_init(super_admin),
        Role::Admin => ADMIN.get_or_init(admin),
        Role::TourOperator => TOUR_OPERATOR.get_or_init(tour_operator),
        Role::HotelManager => HOTEL_MANAGER.get_or_init(hotel_manager),
        Role::FinanceOfficer => FINANCE_OFFICER.get_or_init(finance_officer),
        Role::HrTeam => HR_TEAM.get_or_init(hr_team),
        Role::SupportStaff => SUPPORT_STAFF.get_or_init(support_staff),
        Role::MannatFinance => MANNAT_FINANCE.get_or_init(mannat_finance),
        Role::MannatUser => MANNAT_USER.get_or_init(mannat_user),
    }
}

/// The matrix handed out for role strings outside the enumeration.
pub fn empty_matrix() -> &'static RolePermissions {
    static EMPTY: OnceLock<RolePermissions> = OnceLock::new();
    EMPTY.get_or_init(RolePermissions::new)
}

// Derived from the registry so it can never fall out of sync.
fn super_admin() -> RolePermissions {
    list_modules()
        .iter()
        .map(|module| (module.id, ModulePermissions::all()))
        .collect()
}

fn admin() -> RolePermissions {
    matrix(&[
        (ids::DASHBOARD, p(T, T, T, T, T, T, T, T)),
        (ids::TOURS, p(T, T, T, T, T, T, T, T)),
        (ids::PILGRIMS, p(T, T, T, T, T, T, T, T)),
        (ids::VISA, p(T, T, T, T, T, T, T, T)),
        (ids::ACCOMMODATION, p(T, T, T, T, T, T, T, T)),
        (ids::TRANSPORT, p(T, T, T, T, T, T, T, T)),
        (ids::FINANCE, p(T, T, T, T, T, T, T, T)),
        (ids::MANNAT_NIYAZ, p(T, T, T, T, T, T, T, T)),
        (ids::REPORTS, p(T, T, T, T, T, T, T, T)),
        (ids::HR, p(T, T, T, T, T, T, T, T)),
        (ids::ATTENDANCE, p(T, T, T, T, T, T, T, T)),
        (ids::MAWAID, p(T, T, T, T, T, T, T, T)),
        (ids::HOUSEKEEPING, p(T, T, T, T, T, T, T, T)),
        (ids::LAUNDRY, p(T, T, T, T, T, T, T, T)),
        (ids::MAINTENANCE, p(T, T, T, T, T, T, T, T)),
        (ids::INVENTORY, p(T, T, T, T, T, T, T, T)),
        (ids::MASTERS, p(T, T, T, T, T, T, T, T)),
        (ids::LOCATIONS, p(T, T, T, T, T, T, T, T)),
        (ids::USER_MANAGEMENT, p(T, T, T, T, T, T, T, T)),
        (ids::ROLE_MANAGEMENT, p(T, T, T, T, T, F, F, F)),
        (ids::SETTINGS, p(T, T, T, F, T, F, F, F)),
    ])
}

fn tour_operator() -> RolePermissions {
    matrix(&[
        (ids::DASHBOARD, VIEW),
        (ids::TOURS, p(T, T, T, F, F, F, F, F)),
        (ids::PILGRIMS, p(T, T, T, F, F, F, F, F)),
        (ids::VISA, p(T, T, T, F, F, F, F, F)),
        (ids::ACCOMMODATION, VIEW),
        (ids::TRANSPORT, p(T, T, T, F, F, F, F, F)),
        (ids::FINANCE, NONE),
        (ids::MANNAT_NIYAZ, NONE),
        (ids::REPORTS, VIEW),
        (ids::HR, NONE),
        (ids::ATTENDANCE, NONE),
        (ids::MAWAID, VIEW),
        (ids::HOUSEKEEPING, NONE),
        (ids::LAUNDRY, NONE),
        (ids::MAINTENANCE, NONE),
        (ids::INVENTORY, NONE),
        (ids::MASTERS, VIEW),
        (ids::LOCATIONS, VIEW),
        (ids::USER_MANAGEMENT, NONE),
        (ids::ROLE_MANAGEMENT, NONE),
        (ids::SETTINGS, NONE),
    ])
}

fn hotel_manager() -> RolePermissions {
    matrix(&[
        (ids::DASHBOARD, VIEW),
        (ids::TOURS, VIEW),
        (ids::PILGRIMS, VIEW),
        (ids::VISA, NONE),
        (ids::ACCOMMODATION, p(T, T, T, T, T, T, T, T)),
        (ids::TRANSPORT, NONE),
        (ids::FINANCE, NONE),
        (ids::MANNAT_NIYAZ, NONE),
        (ids::REPORTS, VIEW),
        (ids::HR, NONE),
        (ids::ATTENDANCE, VIEW),
        (ids::MAWAID, p(T, T, T, T, T, F, F, T)),
        (ids::HOUSEKEEPING, p(T, T, T, T, T, F, F, T)),
        (ids::LAUNDRY, p(T, T, T, T, T, F, F, T)),
        (ids::MAINTENANCE, p(T, T, T, T, T, F, F, T)),
        (ids::INVENTORY, p(T, T, T, T, T, F, F, T)),
        (ids::MASTERS, VIEW),
        (ids::LOCATIONS, VIEW),
        (ids::USER_MANAGEMENT, VIEW),
        (ids::ROLE_MANAGEMENT, VIEW),
        (ids::SETTINGS, NONE),
    ])
}

fn finance_officer() -> RolePermissions {
    matrix(&[
        (ids::DASHBOARD, VIEW),
        (ids::TOURS, VIEW),
        (ids::PILGRIMS, VIEW),
        (ids::VISA, NONE),
        (ids::ACCOMMODATION, VIEW),
        (ids::TRANSPORT, NONE),
        (ids::FINANCE, p(T, T, T, T, T, T, T, T)),
        (ids::MANNAT_NIYAZ, p(T, T, T, F, T, T, F, F)),
        (ids::REPORTS, p(T, T, T, F, T, F, F, T)),
        (ids::HR, NONE),
        (ids::ATTENDANCE, NONE),
        (ids::MAWAID, NONE),
        (ids::HOUSEKEEPING, NONE),
        (ids::LAUNDRY, NONE),
        (ids::MAINTENANCE, NONE),
        (ids::INVENTORY, VIEW),
        (ids::MASTERS, VIEW),
        (ids::LOCATIONS, NONE),
        (ids::USER_MANAGEMENT, VIEW),
        (ids::ROLE_MANAGEMENT, VIEW),
        (ids::SETTINGS, NONE),
    ])
}

fn hr_team() -> RolePermissions {
    matrix(&[
        (ids::DASHBOARD, VIEW),
        (ids::TOURS, NONE),
        (ids::PILGRIMS, NONE),
        (ids::VISA, NONE),
        (ids::ACCOMMODATION, NONE),
        (ids::TRANSPORT, NONE),
        (ids::FINANCE, NONE),
        (ids::MANNAT_NIYAZ, NONE),
        (ids::REPORTS, VIEW),
        (ids::HR, p(T, T, T, T, T, T, T, T)),
        (ids::ATTENDANCE, p(T, T, T, T, T, F, F, T)),
        (ids::MAWAID, NONE),
        (ids::HOUSEKEEPING, NONE),
        (ids::LAUNDRY, NONE),
        (ids::MAINTENANCE, NONE),
        (ids::INVENTORY, NONE),
        (ids::MASTERS, VIEW),
        (ids::LOCATIONS, NONE),
        (ids::USER_MANAGEMENT, VIEW),
        (ids::ROLE_MANAGEMENT, VIEW),
        (ids::SETTINGS, NONE),
    ])
}

fn support_staff() -> RolePermissions {
    matrix(&[
        (ids::DASHBOARD, VIEW),
        (ids::TOURS, VIEW),
        (ids::PILGRIMS, p(T, T, T, F, F, F, F, F)),
        (ids::VISA, VIEW),
        (ids::ACCOMMODATION, VIEW),
        (ids::TRANSPORT, VIEW),
        (ids::FINANCE, NONE),
        (ids::MANNAT_NIYAZ, NONE),
        (ids::REPORTS, NONE),
        (ids::HR, NONE),
        (ids::ATTENDANCE, NONE),
        (ids::MAWAID, VIEW),
        (ids::HOUSEKEEPING, VIEW),
        (ids::LAUNDRY, VIEW),
        (ids::MAINTENANCE, p(T, T, F, F, F, F, F, F)),
        (ids::INVENTORY, NONE),
        (ids::MASTERS, NONE),
        (ids::LOCATIONS, VIEW),
        (ids::USER_MANAGEMENT, NONE),
        (ids::ROLE_MANAGEMENT, NONE),
        (ids::SETTINGS, NONE),
    ])
}

fn mannat_finance() -> RolePermissions {
    matrix(&[
        (ids::DASHBOARD, VIEW),
        (ids::TOURS, NONE),
        (ids::PILGRIMS, NONE),
        (ids::VISA, NONE),
        (ids::ACCOMMODATION, NONE),
        (ids::TRANSPORT, NONE),
        (ids::FINANCE, VIEW),
        (ids::MANNAT_NIYAZ, p(T, T, T, T, T, T, T, F)),
        (ids::REPORTS, VIEW),
        (ids::HR, NONE),
        (ids::ATTENDANCE, NONE),
        (ids::MAWAID, NONE),
        (ids::HOUSEKEEPING, NONE),
        (ids::LAUNDRY, NONE),
        (ids::MAINTENANCE, NONE),
        (ids::INVENTORY, NONE),
        (ids::MASTERS, NONE),
        (ids::LOCATIONS, NONE),
        (ids::USER_MANAGEMENT, NONE),
        (ids::ROLE_MANAGEMENT, NONE),
        (ids::SETTINGS, NONE),
    ])
}

fn mannat_user() -> RolePermissions {
    matrix(&[
        (ids::DASHBOARD, VIEW),
        (ids::TOURS, NONE),
        (ids::PILGRIMS, NONE),
        (ids::VISA, NONE),
        (ids::ACCOMMODATION, NONE),
        (ids::TRANSPORT, NONE),
        (ids::FINANCE, NONE),
        (ids::MANNAT_NIYAZ, p(T, T, F, F, F, F, F, F)),
        (ids::REPORTS, NONE),
        (ids::HR, NONE),
        (ids::ATTENDANCE, NONE),
        (ids::MAWAID, NONE),
        (ids::HOUSEKEEPING, NONE),
        (ids::LAUNDRY, NONE),
        (ids::MAINTENANCE, NONE),
        (ids::INVENTORY, NONE),
        (ids::MASTERS, NONE),
        (ids::LOCATIONS, NONE),
        (ids::USER_MANAGEMENT, NONE),
        (ids::ROLE_MANAGEMENT, NONE),
        (ids::SETTINGS, NONE),
    ])
}
