//! # Ziyarat Core
//!
//! Error types shared by the Ziyarat HTTP service.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use ziyarat_core::errors::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Module not found: {}", id));
//! ```

pub mod errors;

// Re-export commonly used types at crate root
pub use errors::AppError;
