//! The module registry.
//!
//! A module is one navigable functional area of the dashboard. The registry
//! is a static table defined once; every role matrix is keyed by the ids
//! declared here. Use the constants in [`ids`] instead of string literals so
//! a typo fails to compile rather than silently denying access.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Error returned when a category slug is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl std::error::Error for ParseCategoryError {}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown module category: {}", self.0)
    }
}

/// Grouping used by the navigation sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ModuleCategory {
    Operations,
    Finance,
    Staff,
    Facility,
    Masters,
    System,
}

impl ModuleCategory {
    pub const ALL: [ModuleCategory; 6] = [
        Self::Operations,
        Self::Finance,
        Self::Staff,
        Self::Facility,
        Self::Masters,
        Self::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operations => "operations",
            Self::Finance => "finance",
            Self::Staff => "staff",
            Self::Facility => "facility",
            Self::Masters => "masters",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ModuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// A functional area of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Module {
    /// Stable identifier, used as the matrix key.
    #[schema(value_type = String, example = "accommodation")]
    pub id: &'static str,
    #[schema(value_type = String)]
    pub name: &'static str,
    #[schema(value_type = String)]
    pub description: &'static str,
    pub category: ModuleCategory,
    /// Routing slug.
    #[schema(value_type = String)]
    pub path: &'static str,
    #[schema(value_type = String)]
    pub icon: &'static str,
}

// =============================================================================
// Module ids
// =============================================================================

pub mod ids {
    // Operations
    pub const DASHBOARD: &str = "dashboard";
    pub const TOURS: &str = "tours";
    pub const PILGRIMS: &str = "pilgrims";
    pub const VISA: &str = "visa";
    pub const ACCOMMODATION: &str = "accommodation";
    pub const TRANSPORT: &str = "transport";

    // Finance
    pub const FINANCE: &str = "finance";
    pub const MANNAT_NIYAZ: &str = "mannat-niyaz";
    pub const REPORTS: &str = "reports";

    // Staff
    pub const HR: &str = "hr";
    pub const ATTENDANCE: &str = "attendance";

    // Facility
    pub const MAWAID: &str = "mawaid";
    pub const HOUSEKEEPING: &str = "housekeeping";
    pub const LAUNDRY: &str = "laundry";
    pub const MAINTENANCE: &str = "maintenance";
    pub const INVENTORY: &str = "inventory";

    // Masters
    pub const MASTERS: &str = "masters";
    pub const LOCATIONS: &str = "locations";

    // System
    pub const USER_MANAGEMENT: &str = "user-management";
    pub const ROLE_MANAGEMENT: &str = "role-management";
    pub const SETTINGS: &str = "settings";
}

const fn module(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: ModuleCategory,
    path: &'static str,
    icon: &'static str,
) -> Module {
    Module {
        id,
        name,
        description,
        category,
        path,
        icon,
    }
}

static MODULES: [Module; 21] = [
    module(
        ids::DASHBOARD,
        "Dashboard",
        "Overview of tours, occupancy and pending approvals",
        ModuleCategory::Operations,
        "dashboard",
        "LayoutDashboard",
    ),
    module(
        ids::TOURS,
        "Tours",
        "Tour schedules, batches and itineraries",
        ModuleCategory::Operations,
        "tours",
        "Map",
    ),
    module(
        ids::PILGRIMS,
        "Pilgrims",
        "Pilgrim registration and travel documents",
        ModuleCategory::Operations,
        "pilgrims",
        "Users",
    ),
    module(
        ids::VISA,
        "Visa",
        "Visa applications and status tracking",
        ModuleCategory::Operations,
        "visa",
        "Stamp",
    ),
    module(
        ids::ACCOMMODATION,
        "Accommodation",
        "Hotels, room allotment and check-ins",
        ModuleCategory::Operations,
        "accommodation",
        "Hotel",
    ),
    module(
        ids::TRANSPORT,
        "Transport",
        "Flights, buses and transfer schedules",
        ModuleCategory::Operations,
        "transport",
        "Bus",
    ),
    module(
        ids::FINANCE,
        "Finance",
        "Payments, refunds and ledgers",
        ModuleCategory::Finance,
        "finance",
        "Wallet",
    ),
    module(
        ids::MANNAT_NIYAZ,
        "Mannat Niyaz",
        "Donation receipts and collection summaries",
        ModuleCategory::Finance,
        "mannat-niyaz",
        "Receipt",
    ),
    module(
        ids::REPORTS,
        "Reports",
        "Financial and operational reports",
        ModuleCategory::Finance,
        "reports",
        "BarChart3",
    ),
    module(
        ids::HR,
        "Human Resources",
        "Staff records, contracts and payroll inputs",
        ModuleCategory::Staff,
        "hr",
        "Briefcase",
    ),
    module(
        ids::ATTENDANCE,
        "Attendance",
        "Staff attendance and duty rosters",
        ModuleCategory::Staff,
        "attendance",
        "CalendarCheck",
    ),
    module(
        ids::MAWAID,
        "Mawaid",
        "Community kitchen menus and meal counts",
        ModuleCategory::Facility,
        "mawaid",
        "Utensils",
    ),
    module(
        ids::HOUSEKEEPING,
        "Housekeeping",
        "Room cleaning schedules and checklists",
        ModuleCategory::Facility,
        "housekeeping",
        "Sparkles",
    ),
    module(
        ids::LAUNDRY,
        "Laundry",
        "Linen issue, return and laundry batches",
        ModuleCategory::Facility,
        "laundry",
        "Shirt",
    ),
    module(
        ids::MAINTENANCE,
        "Maintenance",
        "Facility complaints and work orders",
        ModuleCategory::Facility,
        "maintenance",
        "Wrench",
    ),
    module(
        ids::INVENTORY,
        "Inventory",
        "Stock, stores and purchase requests",
        ModuleCategory::Facility,
        "inventory",
        "Package",
    ),
    module(
        ids::MASTERS,
        "Masters",
        "Shared master data such as packages and fee heads",
        ModuleCategory::Masters,
        "masters",
        "Database",
    ),
    module(
        ids::LOCATIONS,
        "Locations",
        "Cities, sites and ziyarat locations",
        ModuleCategory::Masters,
        "locations",
        "MapPin",
    ),
    module(
        ids::USER_MANAGEMENT,
        "User Management",
        "Dashboard user accounts",
        ModuleCategory::System,
        "user-management",
        "UserCog",
    ),
    module(
        ids::ROLE_MANAGEMENT,
        "Role Management",
        "Role definitions and permission assignments",
        ModuleCategory::System,
        "role-management",
        "ShieldCheck",
    ),
    module(
        ids::SETTINGS,
        "Settings",
        "Application-wide settings",
        ModuleCategory::System,
        "settings",
        "Settings",
    ),
];

/// The full registry in declaration order.
pub fn list_modules() -> &'static [Module] {
    &MODULES
}

/// Look up a module by id.
pub fn find_module(id: &str) -> Option<&'static Module> {
    MODULES.iter().find(|module| module.id == id)
}

/// Registry ids in declaration order.
pub fn module_ids() -> impl Iterator<Item = &'static str> {
    MODULES.iter().map(|module| module.id)
}

/// Modules belonging to `category`, in declaration order.
pub fn modules_in_category(category: ModuleCategory) -> impl Iterator<Item = &'static Module> {
    MODULES
        .iter()
        .filter(move |module| module.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_is_not_empty() {
        assert!(!list_modules().is_empty());
    }

    #[test]
    fn test_registry_ids_are_unique() {
        let ids: HashSet<_> = module_ids().collect();
        assert_eq!(ids.len(), list_modules().len());
    }

    #[test]
    fn test_find_module() {
        let module = find_module(ids::ACCOMMODATION).unwrap();
        assert_eq!(module.name, "Accommodation");
        assert_eq!(module.category, ModuleCategory::Operations);
        assert!(find_module("Accommodation").is_none());
        assert!(find_module("").is_none());
    }

    #[test]
    fn test_every_category_is_used() {
        for category in ModuleCategory::ALL {
            assert!(
                modules_in_category(category).next().is_some(),
                "no module in category {}",
                category
            );
        }
    }

    #[test]
    fn test_category_parse_and_display() {
        assert_eq!("facility".parse::<ModuleCategory>(), Ok(ModuleCategory::Facility));
        assert!("Facility".parse::<ModuleCategory>().is_err());
        assert!("general".parse::<ModuleCategory>().is_err());
        assert_eq!(ModuleCategory::System.to_string(), "system");
    }

    #[test]
    fn test_module_serializes_category_lowercase() {
        let value = serde_json::to_value(find_module(ids::MANNAT_NIYAZ).unwrap()).unwrap();
        assert_eq!(value["id"], "mannat-niyaz");
        assert_eq!(value["category"], "finance");
    }
}
