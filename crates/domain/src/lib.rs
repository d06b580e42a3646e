//! Domain model of the quadratic bonding curve.
//!
//! - [`value_objects`]: 18-decimal fixed-point quantities and curve points
//! - [`math`]: closed-form sums used by the curve
//! - [`curve`]: the [`curve::BondingCurve`] trait and [`curve::QuadraticCurve`]

pub mod constants;
pub mod curve;
pub mod error;
pub mod math;
pub mod value_objects;

pub use curve::{BondingCurve, QuadraticCurve};
pub use error::CurveError;
