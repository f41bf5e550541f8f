use crate::enums::Currency;
use crate::error::CoreError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The markup applied when the user does not supply one.
pub const DEFAULT_MARKUP_PERCENTAGE: Decimal = dec!(10);

/// The direct costs the user enters for a shipment.
///
/// Every field is a raw amount in the quote's display currency. The pricing
/// engine derives the rest of its cost items from these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShipmentCosts {
    /// Local transportation at origin.
    pub local_transport: Decimal,
    pub inland_freight: Decimal,
    pub ocean_air_freight: Decimal,
    pub insurance: Decimal,
    pub customs_clearance: Decimal,
    /// Export duties and taxes.
    pub export_duties: Decimal,
}

impl ShipmentCosts {
    /// Field labels paired with their values, in form order.
    fn labelled(&self) -> [(&'static str, Decimal); 6] {
        [
            ("local_transport", self.local_transport),
            ("inland_freight", self.inland_freight),
            ("ocean_air_freight", self.ocean_air_freight),
            ("insurance", self.insurance),
            ("customs_clearance", self.customs_clearance),
            ("export_duties", self.export_duties),
        ]
    }
}

/// A single calculation request, built fresh for every submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingInput {
    pub product_description: String,
    pub quantity: u64,
    pub unit_price: Decimal,
    pub currency: Currency,
    pub origin_country: String,
    pub origin_port: String,
    pub destination_country: String,
    pub destination_port: String,
    /// Trade-term code, matched exactly against the registry (e.g. "CIF").
    pub trade_term: String,
    pub costs: ShipmentCosts,
    pub markup_percentage: Decimal,
}

impl Default for PricingInput {
    /// The blank form: one unit at zero price, no term selected, 10% markup.
    fn default() -> Self {
        Self {
            product_description: String::new(),
            quantity: 1,
            unit_price: Decimal::ZERO,
            currency: Currency::Usd,
            origin_country: String::new(),
            origin_port: String::new(),
            destination_country: String::new(),
            destination_port: String::new(),
            trade_term: String::new(),
            costs: ShipmentCosts::default(),
            markup_percentage: DEFAULT_MARKUP_PERCENTAGE,
        }
    }
}

impl PricingInput {
    /// Checks the constraints the input form enforces before a calculation is submitted.
    ///
    /// The pricing engine computes with whatever it is given, so callers that accept
    /// user input should run this first.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.quantity == 0 {
            return Err(CoreError::InvalidInput(
                "quantity".to_string(),
                "must be at least 1".to_string(),
            ));
        }
        if self.unit_price < Decimal::ZERO {
            return Err(non_negative("unit_price", self.unit_price));
        }
        for (field, value) in self.costs.labelled() {
            if value < Decimal::ZERO {
                return Err(non_negative(field, value));
            }
        }
        if self.markup_percentage < Decimal::ZERO {
            return Err(non_negative("markup_percentage", self.markup_percentage));
        }
        if self.trade_term.is_empty() {
            return Err(CoreError::InvalidInput(
                "trade_term".to_string(),
                "select a trade term".to_string(),
            ));
        }
        Ok(())
    }
}

fn non_negative(field: &str, value: Decimal) -> CoreError {
    CoreError::InvalidInput(
        field.to_string(),
        format!("must not be negative (got {})", value),
    )
}
