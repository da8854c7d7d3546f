//! Access-control settings.
//!
//! - `RBAC_STRICT_COVERAGE`: Refuse to start when a role matrix does not
//!   cover the module registry exactly (default: false, gaps are only logged)

use std::env;

use crate::parse_bool;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RbacConfig {
    pub strict_coverage: bool,
}

impl RbacConfig {
    pub fn from_env() -> Self {
        Self {
            strict_coverage: env::var("RBAC_STRICT_COVERAGE")
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        assert!(!RbacConfig::default().strict_coverage);
    }
}
