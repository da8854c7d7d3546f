//! # Ziyarat Models
//!
//! Domain types for the Ziyarat access-control core.
//!
//! This crate holds the static data the permission façade is evaluated over:
//!
//! - [`modules`]: The module registry, the fixed catalog of functional areas
//! - [`permissions`]: Capability flags and the per-module permission record
//! - [`roles`]: The closed role enumeration and its display names
//!
//! # Example
//!
//! ```ignore
//! use ziyarat_models::modules::{ids, list_modules};
//! use ziyarat_models::{ModulePermissions, PermissionAction, Role};
//!
//! let role: Role = "hotel-manager".parse()?;
//! assert_eq!(role.display_name(), "Hotel Manager");
//!
//! for module in list_modules() {
//!     println!("{} ({})", module.name, module.category);
//! }
//!
//! let record = ModulePermissions::all();
//! assert!(record.allows(PermissionAction::ManageUsers));
//! ```

pub mod modules;
pub mod permissions;
pub mod roles;

// Re-export commonly used types at crate root
pub use modules::{Module, ModuleCategory, ParseCategoryError, find_module, list_modules};
pub use permissions::{ModulePermissions, ParseActionError, PermissionAction, RolePermissions};
pub use roles::{ParseRoleError, Role};
