//! The closed role enumeration.
//!
//! Roles reach the access-control core as raw strings resolved by the login
//! flow. Parsing is exact against the wire spelling: `"Super Admin"` is not
//! [`Role::SuperAdmin`]. Callers that need tolerant matching use the façade's
//! `is_super_admin`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Error returned when a string is not one of the known roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError(pub String);

impl std::error::Error for ParseRoleError {}

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown role: {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Role {
    #[serde(rename = "super-admin")]
    SuperAdmin,
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "tour-operator")]
    TourOperator,
    #[serde(rename = "hotel-manager")]
    HotelManager,
    #[serde(rename = "finance-officer")]
    FinanceOfficer,
    #[serde(rename = "hr-team")]
    HrTeam,
    #[serde(rename = "support-staff")]
    SupportStaff,
    #[serde(rename = "Mannat-Finance")]
    MannatFinance,
    #[serde(rename = "Mannat-User")]
    MannatUser,
}

impl Role {
    pub const ALL: [Role; 9] = [
        Self::SuperAdmin,
        Self::Admin,
        Self::TourOperator,
        Self::HotelManager,
        Self::FinanceOfficer,
        Self::HrTeam,
        Self::SupportStaff,
        Self::MannatFinance,
        Self::MannatUser,
    ];

    /// Wire spelling, as issued by the login API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super-admin",
            Self::Admin => "admin",
            Self::TourOperator => "tour-operator",
            Self::HotelManager => "hotel-manager",
            Self::FinanceOfficer => "finance-officer",
            Self::HrTeam => "hr-team",
            Self::SupportStaff => "support-staff",
            Self::MannatFinance => "Mannat-Finance",
            Self::MannatUser => "Mannat-User",
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::Admin => "Administrator",
            Self::TourOperator => "Tour Operator",
            Self::HotelManager => "Hotel Manager",
            Self::FinanceOfficer => "Finance Officer",
            Self::HrTeam => "HR Team",
            Self::SupportStaff => "Support Staff",
            Self::MannatFinance => "Mannat Finance",
            Self::MannatUser => "Mannat User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}
