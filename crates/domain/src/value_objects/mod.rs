pub mod amount;
pub mod price_point;
pub mod supply_amount;

pub use amount::{Amount, MAX_DECIMALS};
pub use price_point::PricePoint;
pub use supply_amount::SupplyAmountPair;
