//! Checks run once before the server accepts requests.

use tracing::{info, warn};
use ziyarat_config::RbacConfig;
use ziyarat_rbac::{CoverageError, validate_role_matrices};

/// Compare every role matrix with the module registry.
pub fn verify_role_matrices(config: &RbacConfig) -> anyhow::Result<()> {
    enforce_coverage(config, validate_role_matrices())
}

/// Act on a coverage result.
///
/// Gaps are logged. With `strict_coverage` they also abort startup, since a
/// module missing from a matrix is silently denied to that role.
pub fn enforce_coverage(
    config: &RbacConfig,
    result: Result<(), CoverageError>,
) -> anyhow::Result<()> {
    match result {
        Ok(()) => {
            info!("Role matrices cover the module registry");
            Ok(())
        }
        Err(err) => {
            for gap in &err.gaps {
                warn!(
                    role = %gap.role,
                    missing = ?gap.missing,
                    unknown = ?gap.unknown,
                    "Role matrix does not match the module registry"
                );
            }

            if config.strict_coverage {
                Err(err.into())
            } else {
                Ok(())
            }
        }
    }
}
