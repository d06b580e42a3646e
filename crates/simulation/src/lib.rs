//! Sweeps a bonding curve over a range of supplies.
//!
//! This crate provides:
//! - Supply sweep generation
//! - Curve evaluation into de-scaled price points
//! - Curve summary statistics

/// Prelude module for convenient imports.
pub mod prelude;

/// Curve evaluation.
pub mod price_curve;
/// Supply sweep generation.
pub mod sweep;
