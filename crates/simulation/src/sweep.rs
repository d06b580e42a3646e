//! Supply sweeps.
//!
//! A sweep is the ordered list of `(supply, amount)` pairs a curve is
//! evaluated over.

use bcurve_domain::constants::{
    DEFAULT_PURCHASE_TOKENS, DEFAULT_STEP_TOKENS, DEFAULT_SWEEP_STEPS, WAD,
};
use bcurve_domain::error::CurveError;
use bcurve_domain::value_objects::{Amount, SupplyAmountPair};
use primitive_types::U256;

/// Parameters of a linear supply sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    /// Number of supply points.
    pub steps: usize,
    /// Distance between consecutive supply points.
    pub step_size: Amount,
    /// Trade size quoted at every point.
    pub amount: Amount,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_SWEEP_STEPS,
            step_size: Amount::from_wad(U256::from(DEFAULT_STEP_TOKENS) * U256::from(WAD)),
            amount: Amount::from_wad(U256::from(DEFAULT_PURCHASE_TOKENS) * U256::from(WAD)),
        }
    }
}

impl SweepConfig {
    /// Sets the number of points.
    #[must_use]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Sets the supply step.
    #[must_use]
    pub fn with_step_size(mut self, step_size: Amount) -> Self {
        self.step_size = step_size;
        self
    }

    /// Sets the quoted trade size.
    #[must_use]
    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = amount;
        self
    }
}

/// Source of the pairs a curve is evaluated over.
pub trait SupplySweep {
    /// Produces the ordered sweep.
    ///
    /// # Errors
    /// Returns [`CurveError::Overflow`] if a supply point does not fit in 256 bits.
    fn generate(&self) -> Result<Vec<SupplyAmountPair>, CurveError>;
}

/// `supply_i = i * step_size` for `i` in `0..steps`, constant amount.
#[derive(Debug, Clone)]
pub struct LinearSupplySweep {
    pub config: SweepConfig,
}

impl LinearSupplySweep {
    /// Creates a linear sweep.
    #[must_use]
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }
}

impl SupplySweep for LinearSupplySweep {
    fn generate(&self) -> Result<Vec<SupplyAmountPair>, CurveError> {
        let SweepConfig {
            steps,
            step_size,
            amount,
        } = self.config;

        (0..steps)
            .map(|i| {
                let raw = step_size
                    .raw
                    .checked_mul(U256::from(i))
                    .ok_or(CurveError::Overflow("sweep supply"))?;
                Ok(SupplyAmountPair::new(
                    Amount::new(raw, step_size.decimals),
                    amount,
                ))
            })
            .collect()
    }
}

/// Replays an explicit list of supplies with a constant amount.
#[derive(Debug, Clone)]
pub struct FixedSupplySweep {
    pub supplies: Vec<Amount>,
    pub amount: Amount,
}

impl SupplySweep for FixedSupplySweep {
    fn generate(&self) -> Result<Vec<SupplyAmountPair>, CurveError> {
        Ok(self
            .supplies
            .iter()
            .map(|&supply| SupplyAmountPair::new(supply, self.amount))
            .collect())
    }
}
