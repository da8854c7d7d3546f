//! Load-time check that every role matrix covers exactly the registry.
//!
//! A module missing from a matrix is denied by the façade, which is safe but
//! usually means the matrix was not updated when the module was added. A key
//! that is not in the registry can never be queried through navigation and
//! is most likely a typo.

use std::collections::HashSet;
use std::fmt;

use ziyarat_models::modules::module_ids;
use ziyarat_models::{Role, RolePermissions};

use crate::matrices::matrix_for;

/// Coverage problems found in one role's matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGap {
    pub role: Role,
    /// Registry modules with no row in the matrix.
    pub missing: Vec<&'static str>,
    /// Matrix rows whose key is not in the registry.
    pub unknown: Vec<&'static str>,
}

impl fmt::Display for MatrixGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.role)?;
        if !self.missing.is_empty() {
            write!(f, " missing [{}]", self.missing.join(", "))?;
        }
        if !self.unknown.is_empty() {
            write!(f, " unknown [{}]", self.unknown.join(", "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageError {
    pub gaps: Vec<MatrixGap>,
}

impl std::error::Error for CoverageError {}

impl fmt::Display for CoverageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} role matrices do not match the module registry",
            self.gaps.len()
        )?;
        for gap in &self.gaps {
            write!(f, "; {}", gap)?;
        }
        Ok(())
    }
}

/// Compare one matrix against the registry. `None` means the key sets match.
pub fn check_matrix_coverage(role: Role, matrix: &RolePermissions) -> Option<MatrixGap> {
    let registry: HashSet<&'static str> = module_ids().collect();

    let missing: Vec<_> = module_ids().filter(|id| !matrix.contains_key(*id)).collect();
    let unknown: Vec<_> = matrix
        .keys()
        .copied()
        .filter(|id| !registry.contains(id))
        .collect();

    if missing.is_empty() && unknown.is_empty() {
        None
    } else {
        Some(MatrixGap {
            role,
            missing,
            unknown,
        })
    }
}

/// Check every role's matrix.
pub fn validate_role_matrices() -> Result<(), CoverageError> {
    let gaps: Vec<_> = Role::ALL
        .into_iter()
        .filter_map(|role| check_matrix_coverage(role, matrix_for(role)))
        .collect();

    if gaps.is_empty() {
        Ok(())
    } else {
        Err(CoverageError { gaps })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziyarat_models::ModulePermissions;
    use ziyarat_models::modules::ids;

    #[test]
    fn test_shipped_matrices_cover_registry() {
        assert_eq!(validate_role_matrices(), Ok(()));
    }

    #[test]
    fn test_reports_missing_and_unknown_rows() {
        let mut matrix = matrix_for(Role::SupportStaff).clone();
        matrix.shift_remove(ids::SETTINGS);
        matrix.insert("housekeepng", ModulePermissions::none());

        let gap = check_matrix_coverage(Role::SupportStaff, &matrix).unwrap();
        assert_eq!(gap.missing, vec![ids::SETTINGS]);
        assert_eq!(gap.unknown, vec!["housekeepng"]);
        assert_eq!(
            gap.to_string(),
            "support-staff: missing [settings] unknown [housekeepng]"
        );
    }

    #[test]
    fn test_empty_matrix_misses_everything() {
        let gap = check_matrix_coverage(Role::Admin, &RolePermissions::new()).unwrap();
        assert_eq!(gap.missing.len(), module_ids().count());
        assert!(gap.unknown.is_empty());
    }
}
