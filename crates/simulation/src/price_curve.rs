//! Evaluation of a bonding curve over a sweep.

use bcurve_domain::curve::BondingCurve;
use bcurve_domain::error::CurveError;
use bcurve_domain::value_objects::{Amount, PricePoint, SupplyAmountPair};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Ordered, de-scaled `(supply, price)` points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceCurve {
    points: Vec<PricePoint>,
}

/// Aggregate view of a [`PriceCurve`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSummary {
    pub points: usize,
    pub first: PricePoint,
    pub last: PricePoint,
    pub min_price: f64,
    pub max_price: f64,
    /// True if every price is at least the one before it.
    pub non_decreasing: bool,
}

impl PriceCurve {
    #[must_use]
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// X values, index-aligned with [`prices`](Self::prices).
    #[must_use]
    pub fn supplies(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.supply).collect()
    }

    /// Y values, index-aligned with [`supplies`](Self::supplies).
    #[must_use]
    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// Returns `None` for an empty curve.
    #[must_use]
    pub fn summary(&self) -> Option<CurveSummary> {
        let first = *self.points.first()?;
        let last = *self.points.last()?;

        let (min_price, max_price) = self
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.price), hi.max(p.price))
            });

        let non_decreasing = self
            .points
            .windows(2)
            .all(|w| w[1].raw_price.raw >= w[0].raw_price.raw);

        Some(CurveSummary {
            points: self.points.len(),
            first,
            last,
            min_price,
            max_price,
            non_decreasing,
        })
    }
}

/// Prices every pair of `inputs` on `curve`, in order.
///
/// # Errors
/// Propagates the first [`CurveError`] raised by the curve or by de-scaling.
pub fn evaluate_curve<C>(curve: &C, inputs: &[SupplyAmountPair]) -> Result<PriceCurve, CurveError>
where
    C: BondingCurve + ?Sized,
{
    info!(points = inputs.len(), "evaluating bonding curve");
    price_each(curve, inputs, |pair| pair.amount)
}

/// Prices a fixed `quote` at the supply of every pair of `inputs`, ignoring the
/// pairs' own amounts.
///
/// # Errors
/// Propagates the first [`CurveError`] raised by the curve or by de-scaling.
pub fn evaluate_quotes<C>(
    curve: &C,
    inputs: &[SupplyAmountPair],
    quote: Amount,
) -> Result<PriceCurve, CurveError>
where
    C: BondingCurve + ?Sized,
{
    info!(points = inputs.len(), quote = %quote, "evaluating bonding curve quotes");
    price_each(curve, inputs, |_| quote)
}

fn price_each<C, F>(
    curve: &C,
    inputs: &[SupplyAmountPair],
    amount_of: F,
) -> Result<PriceCurve, CurveError>
where
    C: BondingCurve + ?Sized,
    F: Fn(&SupplyAmountPair) -> Amount,
{
    let mut points = Vec::with_capacity(inputs.len());
    for (step, pair) in inputs.iter().enumerate() {
        let price = curve.get_price(pair.supply, amount_of(pair))?;
        let point = PricePoint::from_fixed(pair.supply, price)?;
        debug!(step, supply = point.supply, price = point.price, "priced step");
        points.push(point);
    }

    Ok(PriceCurve::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::{LinearSupplySweep, SupplySweep, SweepConfig};
    use bcurve_domain::curve::QuadraticCurve;
    use primitive_types::U256;

    fn default_curve() -> PriceCurve {
        let inputs = LinearSupplySweep::new(SweepConfig::default())
            .generate()
            .unwrap();
        evaluate_curve(&QuadraticCurve::default(), &inputs).unwrap()
    }

    #[test]
    fn test_default_sweep_supplies() {
        let curve = default_curve();
        let expected: Vec<f64> = (0..1000u32).map(|i| f64::from(i * 1000)).collect();
        assert_eq!(curve.supplies(), expected);
    }

    #[test]
    fn test_default_sweep_prices() {
        let curve = default_curve();
        let prices = curve.prices();

        assert_eq!(prices.len(), curve.supplies().len());
        assert_eq!(prices.len(), 1000);
        assert!(prices.iter().all(|p| *p >= 0.0));
        assert!(prices.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn test_first_point_matches_curve() {
        // s = 0, a = 1000: Σ_{k=0}^{999} k^2 = 332,833,500
        // 332,833,500 * 1e18 / 9.6e12 = 34,670,156,250,000 raw
        let curve = default_curve();
        let first = curve.points()[0];
        assert_eq!(first.supply, 0.0);
        assert_eq!(first.raw_price.raw, U256::from(34_670_156_250_000u64));
    }

    #[test]
    fn test_summary() {
        let summary = default_curve().summary().unwrap();
        assert_eq!(summary.points, 1000);
        assert_eq!(summary.first.supply, 0.0);
        assert_eq!(summary.last.supply, 999_000.0);
        assert_eq!(summary.min_price, summary.first.price);
        assert_eq!(summary.max_price, summary.last.price);
        assert!(summary.non_decreasing);
    }

    #[test]
    fn test_quotes_price_one_token_per_supply() {
        let inputs = LinearSupplySweep::new(SweepConfig::default())
            .generate()
            .unwrap();
        let one = Amount::from_tokens(1u64).unwrap();
        let curve = evaluate_quotes(&QuadraticCurve::default(), &inputs, one).unwrap();

        assert_eq!(curve.len(), 1000);
        assert_eq!(curve.points()[0].price, 0.0);
        // 999000^2 * 1e18 / 9.6e12
        let last = curve.points()[999];
        assert_eq!(last.supply, 999_000.0);
        assert_eq!(last.raw_price.raw, U256::from(103_958_437_500_000_000u64));
        assert!((last.price - 0.1039584375).abs() < 1e-15);
        // the pairs still carry the 1000 token purchase
        assert!(inputs.iter().all(|p| p.amount == Amount::from_tokens(1000u64).unwrap()));
    }

    #[test]
    fn test_summary_empty() {
        assert!(PriceCurve::default().summary().is_none());
    }

    #[test]
    fn test_error_propagates() {
        let inputs = vec![SupplyAmountPair::new(
            Amount::from_wad(U256::MAX),
            Amount::from_tokens(1u64).unwrap(),
        )];
        let result = evaluate_curve(&QuadraticCurve::default(), &inputs);
        assert!(matches!(result, Err(CurveError::Overflow(_))));
    }
}
