//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use bcurve_simulation::prelude::*;
//! ```

// Evaluation
pub use crate::price_curve::{CurveSummary, PriceCurve, evaluate_curve, evaluate_quotes};

// Sweeps
pub use crate::sweep::{FixedSupplySweep, LinearSupplySweep, SupplySweep, SweepConfig};
