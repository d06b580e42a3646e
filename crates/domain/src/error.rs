use thiserror::Error;

/// Errors raised by bonding curve arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),

    #[error("cannot sell {amount} tokens from a supply of {supply}")]
    InsufficientSupply { supply: String, amount: String },

    #[error("curve divisor must be non-zero")]
    ZeroDivisor,

    #[error("conversion error: {0}")]
    Conversion(String),
}
