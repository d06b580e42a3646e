use crate::error::CurveError;
use crate::value_objects::amount::Amount;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Current supply and the size of a trade against it, both 18-decimal fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyAmountPair {
    pub supply: Amount,
    pub amount: Amount,
}

impl SupplyAmountPair {
    pub fn new(supply: Amount, amount: Amount) -> Self {
        Self { supply, amount }
    }

    /// Builds a pair from whole-token counts.
    ///
    /// # Errors
    /// Returns [`CurveError::Overflow`] if either count overflows when scaled.
    pub fn from_tokens(
        supply: impl Into<U256>,
        amount: impl Into<U256>,
    ) -> Result<Self, CurveError> {
        Ok(Self {
            supply: Amount::from_tokens(supply)?,
            amount: Amount::from_tokens(amount)?,
        })
    }
}
