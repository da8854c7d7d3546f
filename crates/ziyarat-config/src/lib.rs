//! # Ziyarat Config
//!
//! Configuration types for the Ziyarat permission service.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`server`]: Listen address and metrics port
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`rbac`]: Matrix coverage enforcement at startup
//!
//! # Example
//!
//! ```ignore
//! use ziyarat_config::{CorsConfig, RbacConfig, ServerConfig};
//!
//! // Load all configs from environment
//! let server_config = ServerConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let rbac_config = RbacConfig::from_env();
//! ```

pub mod cors;
pub mod rbac;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use rbac::RbacConfig;
pub use server::ServerConfig;

/// Interpret a boolean environment value. Accepts `true/false`, `1/0`,
/// `yes/no` and `on/off`, case-insensitively.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool(" ON "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("No"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool(""), None);
    }
}
