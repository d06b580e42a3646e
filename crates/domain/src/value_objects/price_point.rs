use crate::error::CurveError;
use crate::value_objects::amount::Amount;
use serde::{Deserialize, Serialize};

/// One de-scaled point of a price curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Supply in whole tokens.
    pub supply: f64,
    /// Price in whole units of the reserve asset.
    pub price: f64,
    /// The price as returned by the curve, before de-scaling.
    pub raw_price: Amount,
}

impl PricePoint {
    /// De-scales a supply and the price quoted at it.
    ///
    /// # Errors
    /// Returns [`CurveError::Conversion`] if either value cannot be represented as `f64`.
    pub fn from_fixed(supply: Amount, price: Amount) -> Result<Self, CurveError> {
        Ok(Self {
            supply: supply.to_f64()?,
            price: price.to_f64()?,
            raw_price: price,
        })
    }
}
