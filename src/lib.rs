//! # Ziyarat
//!
//! Read-only permission service for the Ziyarat pilgrimage-logistics admin
//! dashboard, built with Rust and Axum.
//!
//! ## Overview
//!
//! The dashboard gates every sidebar entry and action button on a static
//! role → module → capability matrix. This service exposes that matrix and
//! the derived answers over HTTP so the front end and other services resolve
//! permissions from one source:
//!
//! - **Module registry**: the fixed catalog of functional areas
//! - **Role matrices**: one full permission table per role
//! - **Permission checks**: default-deny decisions for a role, module and action
//! - **Access summaries**: user/role-management visibility and accessible modules
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── modules/          # Feature modules
//! │   ├── catalog/      # Module registry endpoints
//! │   ├── roles/        # Role matrices and access summaries
//! │   └── permissions/  # Single permission checks
//! ├── docs.rs           # OpenAPI document
//! ├── logging.rs        # Request logging and subscriber setup
//! ├── metrics.rs        # Prometheus metrics
//! ├── router.rs         # Main application router
//! ├── startup.rs        # Matrix coverage check
//! └── state.rs          # Shared application state
//! ```
//!
//! The access-control core itself lives in the `ziyarat-models` and
//! `ziyarat-rbac` workspace crates and has no I/O.
//!
//! ## Default deny
//!
//! Unknown roles, unknown modules and unknown actions are never errors. They
//! are answered with `false`, an empty matrix or an empty module list.
//!
//! ## Environment Variables
//!
//! ```bash
//! HOST=0.0.0.0
//! PORT=3000
//! METRICS_PORT=9090
//! ALLOWED_ORIGINS=http://localhost:5173
//! RBAC_STRICT_COVERAGE=true
//! OBSERVABILITY_ENABLED=true
//! ```
//!
//! ## API Documentation
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod modules;
pub mod router;
pub mod startup;
pub mod state;

// Re-export workspace crates for convenience
pub use ziyarat_config;
pub use ziyarat_core;
pub use ziyarat_models;
pub use ziyarat_rbac;
