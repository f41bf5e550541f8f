use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("Invalid trade term '{0}'. Expected one of the registered codes.")]
    InvalidTradeTerm(String),

    #[error(
        "Cannot split responsibility: seller costs ({seller}) and buyer costs ({buyer}) give no usable total."
    )]
    DegenerateCostBasis { seller: Decimal, buyer: Decimal },

    #[error("{0} exceeds the supported amount range.")]
    AmountOverflow(&'static str),
}
