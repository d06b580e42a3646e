use crate::constants::{WAD, WAD_DECIMALS};
use crate::error::CurveError;
use primitive_types::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest scale whose fractional part fits in a `u128`.
pub const MAX_DECIMALS: u8 = 38;

/// A non-negative fixed-point quantity: `raw / 10^decimals`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    pub raw: U256,
    pub decimals: u8,
}

impl Amount {
    pub fn new(raw: U256, decimals: u8) -> Self {
        Self { raw, decimals }
    }

    /// Wraps an 18-decimal raw value.
    pub fn from_wad(raw: impl Into<U256>) -> Self {
        Self::new(raw.into(), WAD_DECIMALS)
    }

    /// `tokens * 10^18`.
    ///
    /// # Errors
    /// Returns [`CurveError::Overflow`] if the scaled value does not fit in 256 bits.
    pub fn from_tokens(tokens: impl Into<U256>) -> Result<Self, CurveError> {
        let raw = tokens
            .into()
            .checked_mul(U256::from(WAD))
            .ok_or(CurveError::Overflow("token scaling"))?;
        Ok(Self::from_wad(raw))
    }

    pub fn zero() -> Self {
        Self::from_wad(U256::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// `10^decimals`, or an error past the precision this type de-scales.
    fn unit(&self) -> Result<U256, CurveError> {
        if self.decimals > MAX_DECIMALS {
            return Err(CurveError::Conversion(format!(
                "{} decimals exceeds the supported {MAX_DECIMALS}",
                self.decimals
            )));
        }
        Ok(U256::exp10(self.decimals as usize))
    }

    /// Whole units, truncating the fractional part (floor for non-negative values).
    ///
    /// # Errors
    /// Returns [`CurveError::Conversion`] if `decimals` exceeds 38.
    pub fn whole_tokens(&self) -> Result<U256, CurveError> {
        Ok(self.raw / self.unit()?)
    }

    /// Whole tokens of an 18-decimal amount: `raw div 10^18`.
    ///
    /// # Errors
    /// Returns [`CurveError::Conversion`] for any other scale.
    pub fn wad_tokens(&self) -> Result<U256, CurveError> {
        if self.decimals != WAD_DECIMALS {
            return Err(CurveError::Conversion(format!(
                "expected {WAD_DECIMALS} decimals, got {}",
                self.decimals
            )));
        }
        Ok(self.raw / U256::from(WAD))
    }

    /// De-scales to a float. The whole part is converted exactly, so integral
    /// token counts below 2^53 come back without rounding.
    ///
    /// # Errors
    /// Returns [`CurveError::Conversion`] if `decimals` exceeds 38 or the whole
    /// part cannot be parsed as `f64`.
    pub fn to_f64(&self) -> Result<f64, CurveError> {
        let unit = self.unit()?;
        let whole: f64 = (self.raw / unit)
            .to_string()
            .parse()
            .map_err(|e| CurveError::Conversion(format!("{} as f64: {e}", self.raw)))?;
        // below 10^38, so the low 128 bits hold all of it
        let frac = (self.raw % unit).low_u128() as f64 / 10f64.powi(i32::from(self.decimals));
        Ok(whole + frac)
    }

    /// Exact de-scale into a [`Decimal`].
    ///
    /// # Errors
    /// Returns [`CurveError::Conversion`] when the raw value exceeds the 96-bit
    /// mantissa of `Decimal`.
    pub fn to_decimal(&self) -> Result<Decimal, CurveError> {
        if self.raw > U256::from(i128::MAX as u128) {
            return Err(CurveError::Conversion(format!("{} exceeds i128", self.raw)));
        }
        Decimal::try_from_i128_with_scale(self.raw.low_u128() as i128, u32::from(self.decimals))
            .map(|d| d.normalize())
            .map_err(|e| CurveError::Conversion(e.to_string()))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal() {
            Ok(d) => write!(f, "{d}"),
            Err(_) => write!(f, "{}e-{}", self.raw, self.decimals),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_tokens_scales_by_wad() {
        let a = Amount::from_tokens(1000u64).unwrap();
        assert_eq!(a.raw, U256::exp10(21));
        assert_eq!(a.decimals, 18);
        assert_eq!(a.whole_tokens().unwrap(), U256::from(1000u64));
    }

    #[test]
    fn test_whole_tokens_floors() {
        // 1.999... tokens
        let a = Amount::from_wad(U256::from(2 * WAD - 1));
        assert_eq!(a.whole_tokens().unwrap(), U256::one());

        let dust = Amount::from_wad(U256::from(WAD - 1));
        assert!(dust.whole_tokens().unwrap().is_zero());
    }

    #[test]
    fn test_wad_tokens_requires_eighteen_decimals() {
        let a = Amount::from_tokens(1000u64).unwrap();
        assert_eq!(a.wad_tokens().unwrap(), U256::from(1000u64));

        let usdc = Amount::new(U256::from(1_000_000_000u64), 6);
        assert_eq!(usdc.whole_tokens().unwrap(), U256::from(1000u64));
        assert!(matches!(usdc.wad_tokens(), Err(CurveError::Conversion(_))));
    }

    #[test]
    fn test_oversized_scale_is_rejected() {
        let a = Amount::new(U256::one(), 78);
        assert!(matches!(a.whole_tokens(), Err(CurveError::Conversion(_))));
        assert!(matches!(a.to_f64(), Err(CurveError::Conversion(_))));

        let b = Amount::new(U256::exp10(39), 39);
        assert!(matches!(b.to_f64(), Err(CurveError::Conversion(_))));

        let max = Amount::new(U256::exp10(38) + U256::one(), MAX_DECIMALS);
        assert_eq!(max.to_f64().unwrap(), 1.0);
    }

    #[test]
    fn test_to_f64() {
        let a = Amount::from_tokens(999_000u64).unwrap();
        assert_eq!(a.to_f64().unwrap(), 999_000.0);

        let half = Amount::from_wad(U256::from(WAD / 2));
        assert_eq!(half.to_f64().unwrap(), 0.5);
    }

    #[test]
    fn test_to_decimal() {
        let a = Amount::from_wad(U256::from(104_166_666_666u64));
        assert_eq!(a.to_decimal().unwrap(), dec!(0.000000104166666666));
        assert_eq!(a.to_string(), "0.000000104166666666");
    }

    #[test]
    fn test_to_decimal_out_of_range() {
        let huge = Amount::from_wad(U256::MAX);
        assert!(matches!(huge.to_decimal(), Err(CurveError::Conversion(_))));
        // Display still renders something meaningful
        assert!(huge.to_string().ends_with("e-18"));
    }

    #[test]
    fn test_from_tokens_overflow() {
        assert_eq!(
            Amount::from_tokens(U256::MAX),
            Err(CurveError::Overflow("token scaling"))
        );
    }
}
