//! Capability flags and permission records.
//!
//! A role's access to one module is described by a [`ModulePermissions`]
//! record: eight independent booleans, one per [`PermissionAction`]. There is
//! no hierarchy between the flags, so `edit` does not imply `view`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Error returned when an action name is not one of the eight capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseActionError(pub String);

impl std::error::Error for ParseActionError {}

impl fmt::Display for ParseActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown permission action: {}", self.0)
    }
}

/// A capability that can be granted per module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum PermissionAction {
    View,
    Add,
    Edit,
    Delete,
    Approve,
    Lock,
    Restore,
    ManageUsers,
}

impl PermissionAction {
    /// Every action, in record field order.
    pub const ALL: [PermissionAction; 8] = [
        Self::View,
        Self::Add,
        Self::Edit,
        Self::Delete,
        Self::Approve,
        Self::Lock,
        Self::Restore,
        Self::ManageUsers,
    ];

    /// Wire spelling of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Approve => "approve",
            Self::Lock => "lock",
            Self::Restore => "restore",
            Self::ManageUsers => "manageUsers",
        }
    }
}

impl fmt::Display for PermissionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ParseActionError(s.to_string()))
    }
}

/// The eight capability flags a role holds on a single module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModulePermissions {
    pub view: bool,
    pub add: bool,
    pub edit: bool,
    pub delete: bool,
    pub approve: bool,
    pub lock: bool,
    pub restore: bool,
    pub manage_users: bool,
}

impl ModulePermissions {
    /// Build a record from positional flags, in [`PermissionAction::ALL`] order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        view: bool,
        add: bool,
        edit: bool,
        delete: bool,
        approve: bool,
        lock: bool,
        restore: bool,
        manage_users: bool,
    ) -> Self {
        Self {
            view,
            add,
            edit,
            delete,
            approve,
            lock,
            restore,
            manage_users,
        }
    }

    /// Every flag set.
    pub const fn all() -> Self {
        Self::new(true, true, true, true, true, true, true, true)
    }

    /// Every flag cleared.
    pub const fn none() -> Self {
        Self::new(false, false, false, false, false, false, false, false)
    }

    /// Whether this record grants `action`.
    pub fn allows(&self, action: PermissionAction) -> bool {
        match action {
            PermissionAction::View => self.view,
            PermissionAction::Add => self.add,
            PermissionAction::Edit => self.edit,
            PermissionAction::Delete => self.delete,
            PermissionAction::Approve => self.approve,
            PermissionAction::Lock => self.lock,
            PermissionAction::Restore => self.restore,
            PermissionAction::ManageUsers => self.manage_users,
        }
    }

    /// Actions this record grants, in field order.
    pub fn granted(&self) -> Vec<PermissionAction> {
        PermissionAction::ALL
            .into_iter()
            .filter(|action| self.allows(*action))
            .collect()
    }
}

/// A role's permission matrix: module id to capability record.
///
/// Iteration follows insertion order, which is how accessible-module lists
/// are ordered.
pub type RolePermissions = IndexMap<&'static str, ModulePermissions>;
