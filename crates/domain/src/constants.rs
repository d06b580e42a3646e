//! Fixed constants of the quadratic bonding curve.

/// Decimals of every fixed-point quantity on the curve.
pub const WAD_DECIMALS: u8 = 18;

/// `10^18`, one whole token in fixed point.
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Steepness of `P(x) = x^2 / divisor`.
pub const DEFAULT_PRICE_DIVISOR: u64 = 9_600_000_000_000;

/// Number of supply points in the default sweep.
pub const DEFAULT_SWEEP_STEPS: usize = 1000;

/// Whole tokens between consecutive supply points of the default sweep.
pub const DEFAULT_STEP_TOKENS: u64 = 1000;

/// Whole tokens bought at every point of the default sweep.
pub const DEFAULT_PURCHASE_TOKENS: u64 = 1000;

/// Whole tokens priced at every point of the default chart.
pub const DEFAULT_QUOTE_TOKENS: u64 = 1;
