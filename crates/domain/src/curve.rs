//! Quadratic bonding curve pricing.
//!
//! The curve prices token `k` (0-based) at `k^2 / divisor`. Buying `a` tokens
//! at supply `s` costs the discretized integral `Σ_{k=s}^{s+a-1} k^2 / divisor`,
//! evaluated in whole tokens with two closed-form sums of squares and
//! re-scaled into 18-decimal fixed point with a single floor division.

use crate::constants::{DEFAULT_PRICE_DIVISOR, WAD};
use crate::error::CurveError;
use crate::math::sum_of_squares_below;
use crate::value_objects::amount::Amount;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// A deterministic mapping from supply to price.
pub trait BondingCurve {
    /// Cost of buying `amount` tokens when `supply` tokens are outstanding.
    ///
    /// # Errors
    /// Returns a [`CurveError`] when the arithmetic cannot be carried out.
    fn get_price(&self, supply: Amount, amount: Amount) -> Result<Amount, CurveError>;

    /// Proceeds of selling `amount` tokens when `supply` tokens are outstanding.
    ///
    /// # Errors
    /// Returns [`CurveError::InsufficientSupply`] when `amount` exceeds `supply`.
    fn get_sell_price(&self, supply: Amount, amount: Amount) -> Result<Amount, CurveError>;

    /// Marginal price of the next token at `supply`.
    ///
    /// # Errors
    /// Returns a [`CurveError`] when the arithmetic cannot be carried out.
    fn spot_price(&self, supply: Amount) -> Result<Amount, CurveError>;
}

/// `P(x) = x^2 / divisor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadraticCurve {
    divisor: U256,
}

impl Default for QuadraticCurve {
    fn default() -> Self {
        Self {
            divisor: U256::from(DEFAULT_PRICE_DIVISOR),
        }
    }
}

impl QuadraticCurve {
    /// Creates a curve with the given steepness divisor.
    ///
    /// # Errors
    /// Returns [`CurveError::ZeroDivisor`] if `divisor` is zero.
    pub fn new(divisor: impl Into<U256>) -> Result<Self, CurveError> {
        let divisor = divisor.into();
        if divisor.is_zero() {
            return Err(CurveError::ZeroDivisor);
        }
        Ok(Self { divisor })
    }

    pub fn divisor(&self) -> U256 {
        self.divisor
    }

    /// Human readable formula, e.g. `P(x) = x^2/9600000000000`.
    pub fn formula(&self) -> String {
        format!("P(x) = x^2/{}", self.divisor)
    }

    /// Same as [`formula`](Self::formula) with the divisor's digits grouped
    /// by thousands, e.g. `P(x) = x^2/9,600,000,000,000`.
    pub fn formula_grouped(&self) -> String {
        format!("P(x) = x^2/{}", group_thousands(&self.divisor.to_string()))
    }

    /// Scales a whole-token sum of squares into a fixed-point price.
    fn rescale(&self, integral: U256) -> Result<Amount, CurveError> {
        let scaled = integral
            .checked_mul(U256::from(WAD))
            .ok_or(CurveError::Overflow("price scaling"))?;
        Ok(Amount::from_wad(scaled / self.divisor))
    }
}

impl BondingCurve for QuadraticCurve {
    fn get_price(&self, supply: Amount, amount: Amount) -> Result<Amount, CurveError> {
        let s = supply.wad_tokens()?;
        let a = amount.wad_tokens()?;

        let end = s
            .checked_add(a)
            .ok_or(CurveError::Overflow("supply + amount"))?;

        let sum1 = sum_of_squares_below(s)?;
        let sum2 = sum_of_squares_below(end)?;

        self.rescale(sum2 - sum1)
    }

    fn get_sell_price(&self, supply: Amount, amount: Amount) -> Result<Amount, CurveError> {
        let s = supply.wad_tokens()?;
        let a = amount.wad_tokens()?;

        if a > s {
            return Err(CurveError::InsufficientSupply {
                supply: s.to_string(),
                amount: a.to_string(),
            });
        }

        let sum1 = sum_of_squares_below(s - a)?;
        let sum2 = sum_of_squares_below(s)?;

        self.rescale(sum2 - sum1)
    }

    fn spot_price(&self, supply: Amount) -> Result<Amount, CurveError> {
        let s = supply.wad_tokens()?;
        let squared = s
            .checked_mul(s)
            .ok_or(CurveError::Overflow("spot price"))?;
        self.rescale(squared)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
