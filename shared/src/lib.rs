//! Calorie Burn Estimator Shared Library
//!
//! This crate contains the estimation core, the fixed activity catalog,
//! and the boundary types consumed by the WASM module and the
//! presentation layer.

pub mod activities;
pub mod errors;
pub mod estimation;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use activities::*;
pub use errors::*;
pub use estimation::*;
pub use types::*;
